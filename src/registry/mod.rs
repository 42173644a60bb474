//! Lookup table from node type keys to their configuration panels.
//!
//! The table is filled once when the registry is built. The built-in node types are
//! always present; callers can add aliases for them or register their own panels.

use crate::error::PanelError;
use ahash::AHashMap;
use itertools::Itertools;

mod panels;

pub use panels::{NodePanel, TypedPanel};
use panels::*;

pub struct NodeRegistry {
    panels: AHashMap<String, Box<dyn NodePanel>>,
}

pub struct NodeRegistryBuilder {
    panels: AHashMap<String, Box<dyn NodePanel>>,
}

impl NodeRegistryBuilder {
    pub fn new() -> Self {
        let mut panels: AHashMap<String, Box<dyn NodePanel>> = AHashMap::new();
        register_default_panels(&mut panels);
        Self { panels }
    }

    /// Makes `user_type_name` resolve to the built-in panel `builtin_type_name`.
    /// Unknown built-in names are ignored.
    pub fn with_alias(mut self, user_type_name: &str, builtin_type_name: &str) -> Self {
        if let Some(panel) = create_panel_by_name(builtin_type_name) {
            self.panels.insert(user_type_name.to_string(), panel);
        }
        self
    }

    pub fn with_custom_panel(mut self, panel: Box<dyn NodePanel>) -> Self {
        self.panels.insert(panel.node_type().to_string(), panel);
        self
    }

    pub fn build(self) -> NodeRegistry {
        NodeRegistry {
            panels: self.panels,
        }
    }
}

impl Default for NodeRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeRegistry {
    pub fn builder() -> NodeRegistryBuilder {
        NodeRegistryBuilder::new()
    }

    pub fn get(&self, node_type: &str) -> Result<&dyn NodePanel, PanelError> {
        self.panels
            .get(node_type)
            .map(|panel| panel.as_ref())
            .ok_or_else(|| PanelError::UnknownNodeType(node_type.to_string()))
    }

    pub fn contains(&self, node_type: &str) -> bool {
        self.panels.contains_key(node_type)
    }

    /// Registered keys, sorted.
    pub fn node_types(&self) -> Vec<&str> {
        self.panels.keys().map(String::as_str).sorted().collect()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::builder().build()
    }
}
