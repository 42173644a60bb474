use crate::config::PanelConfig;
use crate::descriptor::{IODescriptor, NodeDescriptor};
use crate::error::PanelError;
use crate::nodes::{CompareModelsConfig, CreateNewModelConfig, DataSplitConfig, PredictModelConfig};
use ahash::AHashMap;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::debug;

/// Type-erased access to one node type's configuration panel.
pub trait NodePanel: Send + Sync {
    /// Key the canvas uses for this node type, e.g. `dataSplit`.
    fn node_type(&self) -> &str;
    fn display_name(&self) -> &str;
    fn default_config(&self) -> Value;
    fn default_descriptor(&self) -> Value;
    /// Reads a stored configuration and writes it back with every field populated.
    fn normalize_config(&self, json: &Value) -> Result<Value, PanelError>;
    /// Reads a stored descriptor and writes it back with every field populated.
    fn normalize_descriptor(&self, json: &Value) -> Result<Value, PanelError>;
    fn outputs(&self, descriptor: &Value) -> Result<Vec<IODescriptor>, PanelError>;
}

/// Adapts a concrete [`PanelConfig`] to the [`NodePanel`] interface.
pub struct TypedPanel<C> {
    node_type: String,
    _config: PhantomData<fn() -> C>,
}

impl<C: PanelConfig> TypedPanel<C> {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            _config: PhantomData,
        }
    }

    fn descriptor(&self, json: &Value) -> Result<NodeDescriptor<C>, PanelError> {
        let partial = NodeDescriptor::<C>::from_json(json)?;
        NodeDescriptor::from_partial(partial)
    }
}

impl<C: PanelConfig> NodePanel for TypedPanel<C> {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn display_name(&self) -> &str {
        C::DISPLAY_NAME
    }

    fn default_config(&self) -> Value {
        C::default_values().to_json()
    }

    fn default_descriptor(&self) -> Value {
        NodeDescriptor::<C>::default().to_json()
    }

    fn normalize_config(&self, json: &Value) -> Result<Value, PanelError> {
        let partial = C::from_json(json)?;
        debug!(node_type = %self.node_type, "normalizing node config");
        Ok(C::from_partial(partial).to_json())
    }

    fn normalize_descriptor(&self, json: &Value) -> Result<Value, PanelError> {
        debug!(node_type = %self.node_type, "normalizing node descriptor");
        Ok(self.descriptor(json)?.to_json())
    }

    fn outputs(&self, descriptor: &Value) -> Result<Vec<IODescriptor>, PanelError> {
        Ok(self.descriptor(descriptor)?.outputs())
    }
}

/// Defines the built-in panels, their registration and their lookup by name.
macro_rules! define_node_panels {
    ( $( ($node_type:literal, $config:ty) ),* $(,)? ) => {
        pub(super) fn register_default_panels(registry: &mut AHashMap<String, Box<dyn NodePanel>>) {
            $(
                registry.insert(
                    $node_type.to_string(),
                    Box::new(TypedPanel::<$config>::new($node_type)),
                );
            )*
        }

        pub(super) fn create_panel_by_name(name: &str) -> Option<Box<dyn NodePanel>> {
            match name {
                $( $node_type => Some(Box::new(TypedPanel::<$config>::new($node_type))), )*
                _ => None,
            }
        }
    };
}

define_node_panels! {
    ("compareModels", CompareModelsConfig),
    ("createNewModel", CreateNewModelConfig),
    ("dataSplit", DataSplitConfig),
    ("predictModel", PredictModelConfig),
}
