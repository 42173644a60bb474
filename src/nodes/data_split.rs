use crate::config::{NodeConfigEnvelope, PanelConfig};
use crate::descriptor::{IODescriptor, ITEM_PORT_NAME, ITEM_PORT_TYPE, Port, serialize_percentage};
use crate::error::PanelError;
use crate::validation::ValidationDescriptor;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

/// A named, percentage-weighted partition items are routed to.
///
/// Missing wire fields read as empty text and 0%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, serialize_with = "serialize_percentage")]
    pub distribution: f64,
}

impl Group {
    /// A group with a fresh unique id.
    pub fn new(name: impl Into<String>, distribution: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            distribution,
        }
    }
}

/// Settings of a Data Split node.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSplitConfig {
    pub name: String,
    pub distribute_equally: bool,
    pub groups: Vec<Group>,
    /// Whether routed items are tagged with the name of their group.
    pub item_metadata: Option<bool>,
    pub validation: ValidationDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDataSplitConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribute_equally: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_metadata: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSplitBody {
    pub distribute_equally: bool,
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_metadata: Option<bool>,
}

impl DataSplitConfig {
    /// One weighted `Item` port per group, in group order.
    pub fn ports(&self) -> Vec<Port> {
        self.groups
            .iter()
            .map(|group| Port::item(group.name.clone(), group.distribution))
            .collect()
    }

    /// Names of the groups that can be routed to. Blank names are skipped.
    pub fn action_names(&self) -> Vec<String> {
        self.groups
            .iter()
            .filter(|group| !group.name.trim().is_empty())
            .map(|group| group.name.clone())
            .collect_vec()
    }

    pub fn total_distribution(&self) -> f64 {
        self.groups.iter().map(|group| group.distribution).sum()
    }

    /// Appends a group with a fresh id. It starts at 0% unless the split is kept equal.
    pub fn add_group(&mut self, name: impl Into<String>) -> &Group {
        self.groups.push(Group::new(name, 0.0));
        self.rebalance();
        let last = self.groups.len() - 1;
        &self.groups[last]
    }

    /// Removes the group with `id`, returning it if it existed.
    pub fn remove_group(&mut self, id: &str) -> Option<Group> {
        let index = self.groups.iter().position(|group| group.id == id)?;
        let removed = self.groups.remove(index);
        self.rebalance();
        Some(removed)
    }

    /// Splits 100% evenly in whole percentages when `distribute_equally` is set.
    ///
    /// The remainder goes to the first groups, one point each.
    pub fn rebalance(&mut self) {
        if !self.distribute_equally || self.groups.is_empty() {
            return;
        }
        let count = self.groups.len() as u32;
        let share = 100 / count;
        let remainder = 100 % count;
        for (index, group) in self.groups.iter_mut().enumerate() {
            let extra = u32::from((index as u32) < remainder);
            group.distribution = f64::from(share + extra);
        }
    }
}

impl Default for DataSplitConfig {
    fn default() -> Self {
        Self::default_values()
    }
}

impl PanelConfig for DataSplitConfig {
    type Partial = PartialDataSplitConfig;
    type Body = DataSplitBody;

    const DISPLAY_NAME: &'static str = "Data Split";

    fn default_values() -> Self {
        Self {
            name: Self::DISPLAY_NAME.to_string(),
            distribute_equally: true,
            groups: vec![Group::new("group_1", 50.0), Group::new("group_2", 50.0)],
            item_metadata: Some(false),
            validation: ValidationDescriptor::valid(),
        }
    }

    fn from_partial(init: PartialDataSplitConfig) -> Self {
        let defaults = Self::default_values();
        Self {
            name: init.name.unwrap_or(defaults.name),
            distribute_equally: init.distribute_equally.unwrap_or(defaults.distribute_equally),
            groups: init.groups.unwrap_or(defaults.groups),
            item_metadata: init.item_metadata.or(defaults.item_metadata),
            validation: init.validation.unwrap_or(defaults.validation),
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "distributeEqually": self.distribute_equally,
            "groups": self.groups,
            "itemMetadata": self.item_metadata.unwrap_or(false),
            "validation": self.validation,
            "ports": self.ports(),
        })
    }

    fn to_envelope(&self) -> NodeConfigEnvelope<DataSplitBody> {
        let body = DataSplitBody {
            distribute_equally: self.distribute_equally,
            groups: self.groups.clone(),
            item_metadata: self.item_metadata,
        };
        NodeConfigEnvelope::new(self.name.clone(), body, self.validation.clone())
            .with_ports(self.ports())
    }

    fn from_envelope(envelope: NodeConfigEnvelope<DataSplitBody>) -> Self {
        Self {
            name: envelope.name,
            distribute_equally: envelope.body.distribute_equally,
            groups: envelope.body.groups,
            item_metadata: envelope.body.item_metadata,
            validation: envelope.validation,
        }
    }

    fn validation(&self) -> &ValidationDescriptor {
        &self.validation
    }

    fn validation_mut(&mut self) -> &mut ValidationDescriptor {
        &mut self.validation
    }

    /// Groups drive the output port, so a descriptor without them cannot be built.
    fn from_descriptor_metadata(
        node_id: &str,
        init: Option<PartialDataSplitConfig>,
    ) -> Result<Self, PanelError> {
        match init {
            Some(partial) if partial.groups.is_some() => Ok(Self::from_partial(partial)),
            _ => Err(PanelError::MissingGroups {
                node_id: node_id.to_string(),
            }),
        }
    }

    /// A single `Item` output routed by the names of all non-blank groups.
    fn derive_outputs(&self, node_id: &str, stored: &[IODescriptor]) -> Vec<IODescriptor> {
        let port_id = stored
            .first()
            .and_then(|port| port.port_id.clone())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut port = IODescriptor::new(ITEM_PORT_NAME, ITEM_PORT_TYPE);
        if let Some(first) = stored.first() {
            port.extra = first.extra.clone();
        }
        port.port_id = Some(port_id);
        port.actions = Some(self.action_names());
        port.node_id = Some(node_id.to_string());
        vec![port]
    }
}
