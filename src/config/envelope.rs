use crate::descriptor::Port;
use crate::validation::ValidationDescriptor;
use serde::{Deserialize, Deserializer, Serialize};

/// The JSON shape a node configuration is stored as by the pipeline storage service.
///
/// The node-specific settings live under `body`; `ports` is only present for node types
/// that derive branching ports from their settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfigEnvelope<B> {
    pub name: String,
    pub body: B,
    pub validation: ValidationDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<Port>>,
}

impl<B> NodeConfigEnvelope<B> {
    pub fn new(name: impl Into<String>, body: B, validation: ValidationDescriptor) -> Self {
        Self {
            name: name.into(),
            body,
            validation,
            ports: None,
        }
    }

    pub fn with_ports(mut self, ports: Vec<Port>) -> Self {
        self.ports = Some(ports);
        self
    }
}

/// Keeps an explicit `null` apart from a missing field.
///
/// Used with `#[serde(default)]` so that a missing field stays `None` while `null`
/// becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
