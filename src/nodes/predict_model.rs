use crate::config::{NodeConfigEnvelope, PanelConfig};
use crate::validation::ValidationDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Settings of a Predict Model node. It has nothing to configure beyond its name.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictModelConfig {
    pub name: String,
    pub validation: ValidationDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPredictModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictModelBody {}

impl Default for PredictModelConfig {
    fn default() -> Self {
        Self::default_values()
    }
}

impl PanelConfig for PredictModelConfig {
    type Partial = PartialPredictModelConfig;
    type Body = PredictModelBody;

    const DISPLAY_NAME: &'static str = "Predict Node";

    fn default_values() -> Self {
        Self {
            name: Self::DISPLAY_NAME.to_string(),
            validation: ValidationDescriptor::valid(),
        }
    }

    fn from_partial(init: PartialPredictModelConfig) -> Self {
        Self {
            name: init
                .name
                .unwrap_or_else(|| Self::DISPLAY_NAME.to_string()),
            validation: init.validation.unwrap_or_default(),
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "validation": self.validation,
        })
    }

    fn to_envelope(&self) -> NodeConfigEnvelope<PredictModelBody> {
        NodeConfigEnvelope::new(
            self.name.clone(),
            PredictModelBody::default(),
            self.validation.clone(),
        )
    }

    fn from_envelope(envelope: NodeConfigEnvelope<PredictModelBody>) -> Self {
        Self {
            name: envelope.name,
            validation: envelope.validation,
        }
    }

    fn validation(&self) -> &ValidationDescriptor {
        &self.validation
    }

    fn validation_mut(&mut self) -> &mut ValidationDescriptor {
        &mut self.validation
    }
}
