use serde::{Deserialize, Serialize};

/// Where the function backing a node lives. Missing names read as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeNamespace {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub function_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

impl Default for NodeNamespace {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            service_name: String::new(),
            function_name: String::new(),
            module_name: Some(String::new()),
            package_name: Some(String::new()),
        }
    }
}
