use super::{IODescriptor, NodeNamespace};
use crate::config::PanelConfig;
use crate::error::PanelError;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

/// Descriptor metadata. The node configuration sits under `customNodeConfig`; any other
/// keys the canvas put there are carried along untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMetadata<C> {
    pub custom_node_config: C,
    pub extra: Map<String, Value>,
}

impl<C: PanelConfig> NodeMetadata<C> {
    pub fn new(custom_node_config: C) -> Self {
        Self {
            custom_node_config,
            extra: Map::new(),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut map = self.extra.clone();
        map.insert(
            "customNodeConfig".to_string(),
            self.custom_node_config.to_json(),
        );
        Value::Object(map)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialNodeMetadata<P> {
    pub custom_node_config: Option<P>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A node descriptor as read from the wire, before any defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialNodeDescriptor<P> {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    pub project_id: Option<String>,
    pub app_id: Option<String>,
    pub namespace: Option<NodeNamespace>,
    pub inputs: Option<Vec<IODescriptor>>,
    pub outputs: Option<Vec<IODescriptor>>,
    pub metadata: Option<PartialNodeMetadata<P>>,
}

/// Canvas-level representation of a node holding a configuration of type `C`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDescriptor<C> {
    pub id: String,
    pub name: String,
    pub node_type: String,
    pub project_id: String,
    pub app_id: String,
    pub namespace: NodeNamespace,
    pub inputs: Vec<IODescriptor>,
    pub metadata: NodeMetadata<C>,
    outputs: Vec<IODescriptor>,
}

impl<C: PanelConfig> Default for NodeDescriptor<C> {
    fn default() -> Self {
        Self::with_config(C::default_values())
    }
}

impl<C: PanelConfig> NodeDescriptor<C> {
    /// A freshly placed node holding `config`.
    pub fn with_config(config: C) -> Self {
        let mut descriptor = Self {
            id: String::new(),
            name: C::DISPLAY_NAME.to_string(),
            node_type: String::new(),
            project_id: String::new(),
            app_id: String::new(),
            namespace: NodeNamespace::default(),
            inputs: Vec::new(),
            metadata: NodeMetadata::new(config),
            outputs: Vec::new(),
        };
        descriptor.outputs = descriptor.outputs();
        descriptor
    }

    /// Builds a live descriptor, defaulting every absent field.
    ///
    /// When `metadata` is present its `customNodeConfig` is handed to
    /// [`PanelConfig::from_descriptor_metadata`], which may reject it.
    pub fn from_partial(init: PartialNodeDescriptor<C::Partial>) -> Result<Self, PanelError> {
        let id = init.id.unwrap_or_default();
        let metadata = match init.metadata {
            Some(metadata) => {
                let custom_node_config =
                    C::from_descriptor_metadata(&id, metadata.custom_node_config).inspect_err(
                        |e| {
                            warn!(
                                node_id = %id,
                                node = C::DISPLAY_NAME,
                                error = %e,
                                "rejected node descriptor"
                            )
                        },
                    )?;
                NodeMetadata {
                    custom_node_config,
                    extra: metadata.extra,
                }
            }
            None => NodeMetadata::new(C::default_values()),
        };

        let stored = init.outputs.unwrap_or_default();
        let outputs = metadata.custom_node_config.derive_outputs(&id, &stored);

        debug!(node_id = %id, node = C::DISPLAY_NAME, "built node descriptor");

        Ok(Self {
            name: init.name.unwrap_or_else(|| C::DISPLAY_NAME.to_string()),
            node_type: init.node_type.unwrap_or_default(),
            project_id: init.project_id.unwrap_or_default(),
            app_id: init.app_id.unwrap_or_default(),
            namespace: init.namespace.unwrap_or_default(),
            inputs: init.inputs.unwrap_or_default(),
            metadata,
            outputs,
            id,
        })
    }

    /// Re-maps wire JSON into a partial descriptor without applying any defaults.
    pub fn from_json(json: &Value) -> Result<PartialNodeDescriptor<C::Partial>, PanelError> {
        Ok(PartialNodeDescriptor::deserialize(json)?)
    }

    /// Output ports, recomputed from the current configuration on every call.
    pub fn outputs(&self) -> Vec<IODescriptor> {
        self.metadata
            .custom_node_config
            .derive_outputs(&self.id, &self.outputs)
    }

    /// Replaces the stored outputs. Node types that derive their outputs stamp a port id
    /// here, so it stays the same across calls to [`NodeDescriptor::outputs`].
    pub fn set_outputs(&mut self, outputs: Vec<IODescriptor>) {
        self.outputs = self
            .metadata
            .custom_node_config
            .derive_outputs(&self.id, &outputs);
    }

    pub fn config(&self) -> &C {
        &self.metadata.custom_node_config
    }

    pub fn config_mut(&mut self) -> &mut C {
        &mut self.metadata.custom_node_config
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "type": self.node_type,
            "projectId": self.project_id,
            "appId": self.app_id,
            "namespace": self.namespace,
            "inputs": self.inputs,
            "outputs": self.outputs(),
            "metadata": self.metadata.to_json(),
        })
    }
}
