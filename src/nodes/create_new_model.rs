use crate::config::{NodeConfigEnvelope, PanelConfig, double_option};
use crate::template;
use crate::validation::ValidationDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const DEFAULT_MODEL_NAME: &str =
    "{model.name}-{datetime.datetime.now().strftime('%Y_%m_%d-T%H_%M_%S')}";
pub const DEFAULT_DATA_QUERY: &str = "SELECT * FROM {model.name}";

/// A free-form query selecting the data a new model is trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQuery {
    pub value: Value,
}

impl Default for DataQuery {
    fn default() -> Self {
        Self {
            value: json!({ "query": DEFAULT_DATA_QUERY }),
        }
    }
}

/// Settings of a Create New Model node.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateNewModelConfig {
    pub name: String,
    /// Template for the new model's name, see [`crate::template`].
    pub model_name: String,
    pub model_parameters: Map<String, Value>,
    pub data_query: Option<DataQuery>,
    pub validation: ValidationDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCreateNewModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_parameters: Option<Map<String, Value>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_query: Option<Option<DataQuery>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewModelBody {
    pub model_name: String,
    #[serde(default)]
    pub model_parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_query: Option<DataQuery>,
}

impl CreateNewModelConfig {
    /// Renders the model name template with `resolve`.
    pub fn resolve_model_name<F>(&self, resolve: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        template::render(&self.model_name, resolve)
    }

    /// Placeholder expressions the model name template refers to.
    pub fn model_name_placeholders(&self) -> Vec<&str> {
        template::placeholders(&self.model_name)
    }
}

impl Default for CreateNewModelConfig {
    fn default() -> Self {
        Self::default_values()
    }
}

impl PanelConfig for CreateNewModelConfig {
    type Partial = PartialCreateNewModelConfig;
    type Body = CreateNewModelBody;

    const DISPLAY_NAME: &'static str = "Create New Model";

    fn default_values() -> Self {
        Self {
            name: Self::DISPLAY_NAME.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_parameters: Map::new(),
            data_query: Some(DataQuery::default()),
            validation: ValidationDescriptor::valid(),
        }
    }

    fn from_partial(init: PartialCreateNewModelConfig) -> Self {
        let defaults = Self::default_values();
        Self {
            name: init.name.unwrap_or(defaults.name),
            model_name: init.model_name.unwrap_or(defaults.model_name),
            model_parameters: init.model_parameters.unwrap_or(defaults.model_parameters),
            data_query: init.data_query.unwrap_or(defaults.data_query),
            validation: init.validation.unwrap_or(defaults.validation),
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "modelName": self.model_name,
            "validation": self.validation,
            "modelParameters": self.model_parameters,
            "dataQuery": self.data_query,
        })
    }

    fn to_envelope(&self) -> NodeConfigEnvelope<CreateNewModelBody> {
        let body = CreateNewModelBody {
            model_name: self.model_name.clone(),
            model_parameters: self.model_parameters.clone(),
            data_query: self.data_query.clone(),
        };
        NodeConfigEnvelope::new(self.name.clone(), body, self.validation.clone())
    }

    fn from_envelope(envelope: NodeConfigEnvelope<CreateNewModelBody>) -> Self {
        Self {
            name: envelope.name,
            model_name: envelope.body.model_name,
            model_parameters: envelope.body.model_parameters,
            data_query: envelope.body.data_query,
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
