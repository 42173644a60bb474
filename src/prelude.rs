//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! pipeline-panels crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use pipeline_panels::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let stored = std::fs::read_to_string("path/to/compare_models.json")?;
//! let json: serde_json::Value = serde_json::from_str(&stored)?;
//!
//! let config = CompareModelsConfig::from_partial(CompareModelsConfig::from_json(&json)?);
//! println!("Comparison logic: {:?}", config.logic_source());
//! # Ok(())
//! # }
//! ```

// Configuration contract and wire shape
pub use crate::config::{NodeConfigEnvelope, PanelConfig};

// Node configurations
pub use crate::nodes::{
    CodebaseType, CompareModelsConfig, ComparisonSource, CreateNewModelConfig, DataQuery,
    DataSplitConfig, Group, PredictModelConfig,
};

// Canvas descriptors
pub use crate::descriptor::{IODescriptor, NodeDescriptor, NodeNamespace, Port};

// Registry
pub use crate::registry::{NodePanel, NodeRegistry};

// Validation
pub use crate::validation::{ConfigValidator, ValidationDescriptor, ValidationIssue};

// Error types
pub use crate::error::PanelError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
