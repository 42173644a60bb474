//! The shared contract every node configuration implements.
//!
//! Each node type has a full configuration (what a live panel edits), a partial form
//! (what arrives over the wire, every field optional) and a `body` used in the storage
//! envelope. [`PanelConfig`] ties the three together.

use crate::descriptor::IODescriptor;
use crate::error::PanelError;
use crate::validation::{ConfigValidator, ValidationDescriptor};
use serde::Serialize;
use serde::de::{Deserialize, DeserializeOwned};
use serde_json::Value;
use std::fmt::Debug;

mod envelope;

pub use envelope::NodeConfigEnvelope;
pub(crate) use envelope::double_option;

pub trait PanelConfig: Clone + Debug + Sized {
    /// Wire form with every field optional. Missing fields stay `None`.
    type Partial: DeserializeOwned + Serialize + Default + Clone + Debug;
    /// Node-specific settings as stored under `body` in a [`NodeConfigEnvelope`].
    type Body: DeserializeOwned + Serialize + Clone + Debug;

    /// Default node name shown on the canvas.
    const DISPLAY_NAME: &'static str;

    /// A fully populated configuration for a freshly placed node.
    fn default_values() -> Self;

    /// Builds a live configuration, taking the default for every absent field.
    fn from_partial(init: Self::Partial) -> Self;

    /// Emits every declared field.
    fn to_json(&self) -> Value;

    fn to_envelope(&self) -> NodeConfigEnvelope<Self::Body>;

    fn from_envelope(envelope: NodeConfigEnvelope<Self::Body>) -> Self;

    fn validation(&self) -> &ValidationDescriptor;

    fn validation_mut(&mut self) -> &mut ValidationDescriptor;

    /// Re-maps wire JSON field by field. Unknown fields are dropped and nothing is
    /// defaulted; use [`PanelConfig::from_partial`] to get a live configuration.
    fn from_json(json: &Value) -> Result<Self::Partial, PanelError> {
        Ok(Self::Partial::deserialize(json)?)
    }

    /// Runs `validator` and stores the outcome on the configuration.
    fn validate_with<V>(&mut self, validator: &V) -> &ValidationDescriptor
    where
        V: ConfigValidator<Self> + ?Sized,
    {
        let result = validator.validate(self);
        *self.validation_mut() = result;
        self.validation()
    }

    /// Builds the configuration held in a descriptor's `metadata.customNodeConfig`.
    fn from_descriptor_metadata(
        _node_id: &str,
        init: Option<Self::Partial>,
    ) -> Result<Self, PanelError> {
        Ok(Self::from_partial(init.unwrap_or_default()))
    }

    /// Output ports of a descriptor holding this configuration.
    ///
    /// `stored` is what the descriptor was created with. Node types whose outputs do not
    /// depend on their settings return it unchanged.
    fn derive_outputs(&self, _node_id: &str, stored: &[IODescriptor]) -> Vec<IODescriptor> {
        stored.to_vec()
    }
}
