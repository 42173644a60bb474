use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Port name used by nodes that pass items through.
pub const ITEM_PORT_NAME: &str = "item";
/// Semantic type tag for item ports.
pub const ITEM_PORT_TYPE: &str = "Item";

/// One input or output connector of a node on the canvas.
///
/// Keys the canvas adds beyond the declared ones are kept in `extra` and written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IODescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub port_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(
        default,
        serialize_with = "serialize_optional_percentage",
        skip_serializing_if = "Option::is_none"
    )]
    pub port_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IODescriptor {
    pub fn new(name: impl Into<String>, port_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port_type: port_type.into(),
            port_id: None,
            display_name: None,
            color: None,
            action_icon: None,
            action: None,
            actions: None,
            port_percentage: None,
            default_value: None,
            node_id: None,
            extra: Map::new(),
        }
    }
}

/// A weighted branch derived from a node's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub action: String,
    pub name: String,
    #[serde(rename = "type")]
    pub port_type: String,
    #[serde(serialize_with = "serialize_percentage")]
    pub port_percentage: f64,
}

impl Port {
    /// An `Item` port routed by `action`.
    pub fn item(action: impl Into<String>, port_percentage: f64) -> Self {
        Self {
            action: action.into(),
            name: ITEM_PORT_NAME.to_string(),
            port_type: ITEM_PORT_TYPE.to_string(),
            port_percentage,
        }
    }
}

/// Writes whole percentages as integers, so `50` stays `50` on the wire.
pub(crate) fn serialize_percentage<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_optional_percentage<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(percentage) => serialize_percentage(percentage, serializer),
        None => serializer.serialize_none(),
    }
}
