use thiserror::Error;

/// Errors that can occur while reading panel configurations and node descriptors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PanelError {
    #[error("Failed to parse panel JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has no split groups in its custom node config")]
    MissingGroups { node_id: String },

    #[error("Node type '{0}' is not registered")]
    UnknownNodeType(String),
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::JsonParseError(err.to_string())
    }
}
