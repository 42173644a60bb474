//! # pipeline-panels - Configuration Models for Visual Pipeline Nodes
//!
//! **pipeline-panels** holds the data models behind the configuration panels of a
//! drag-and-drop pipeline builder. Every node type on the canvas (model comparison, model
//! creation, data splitting and prediction) gets:
//!
//! 1.  **A configuration**: the settings a user edits in the node's panel, with a
//!     ready-to-use set of defaults for a freshly placed node.
//! 2.  **A JSON bridge**: `from_json` reads a possibly incomplete stored configuration
//!     without filling anything in, `from_partial` turns that into a live configuration
//!     and `to_json` writes every field back.
//! 3.  **A node descriptor**: the canvas-level view of the node (ports, namespace and
//!     metadata), with output ports derived from the configuration where they depend on it.
//!
//! The [`registry::NodeRegistry`] ties node type keys such as `dataSplit` to their panels
//! for callers that only deal in JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pipeline_panels::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     // A node freshly dropped on the canvas starts from the defaults.
//!     let mut node = NodeDescriptor::<DataSplitConfig>::default();
//!     node.id = "split-1".to_string();
//!     node.config_mut().groups[0].name = "train".to_string();
//!     node.config_mut().groups[1].name = "validation".to_string();
//!
//!     // Outputs follow the groups.
//!     let outputs = node.outputs();
//!     assert_eq!(
//!         outputs[0].actions,
//!         Some(vec!["train".to_string(), "validation".to_string()])
//!     );
//!
//!     // Save, then reload.
//!     let saved = node.to_json();
//!     let reloaded = NodeDescriptor::<DataSplitConfig>::from_partial(
//!         NodeDescriptor::<DataSplitConfig>::from_json(&saved)?,
//!     )?;
//!     assert_eq!(reloaded.config(), node.config());
//!
//!     // The same through the registry, by node type key.
//!     let registry = NodeRegistry::default();
//!     let panel = registry.get("predictModel")?;
//!     let config = panel.normalize_config(&json!({ "name": "Score items" }))?;
//!     println!("{}", config);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod nodes;
pub mod prelude;
pub mod registry;
pub mod template;
pub mod validation;
