//! Configuration models of the built-in pipeline nodes.

pub mod compare_models;
pub mod create_new_model;
pub mod data_split;
pub mod predict_model;

pub use compare_models::*;
pub use create_new_model::*;
pub use data_split::*;
pub use predict_model::*;
