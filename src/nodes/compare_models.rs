use crate::config::{NodeConfigEnvelope, PanelConfig, double_option};
use crate::validation::ValidationDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Where a codebase for the comparison logic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodebaseType {
    #[serde(rename = "GIT")]
    Git,
    #[serde(rename = "ZIP")]
    Zip,
}

/// A selectable entry of the codebase type dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodebaseOption {
    pub label: &'static str,
    pub value: CodebaseType,
}

impl CodebaseType {
    pub const OPTIONS: [CodebaseOption; 2] = [
        CodebaseOption {
            label: "Git",
            value: CodebaseType::Git,
        },
        CodebaseOption {
            label: "ZIP File",
            value: CodebaseType::Zip,
        },
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodebaseType::Git => "GIT",
            CodebaseType::Zip => "ZIP",
        }
    }
}

impl fmt::Display for CodebaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The comparison logic a Compare Models node is set up to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparisonSource<'a> {
    Inline(&'a str),
    Git { url: &'a str, tag: &'a str },
    Zip(Option<&'a Value>),
    /// A codebase was requested but no codebase type is selected.
    Unselected,
}

/// Settings of a Compare Models node.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareModelsConfig {
    pub name: String,
    pub is_codebase: bool,
    pub codebase_type: Option<CodebaseType>,
    pub code: String,
    /// Opaque handle of an uploaded archive, as produced by the panel's file input.
    pub zip_input: Option<Value>,
    pub git_url: String,
    pub git_tag: String,
    pub validation: ValidationDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCompareModelsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_codebase: Option<bool>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub codebase_type: Option<Option<CodebaseType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub zip_input: Option<Option<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareModelsBody {
    pub is_codebase: bool,
    pub codebase_type: Option<CodebaseType>,
    pub code: String,
    pub zip_input: Option<Value>,
    pub git_url: String,
    pub git_tag: String,
}

impl CompareModelsConfig {
    pub fn logic_source(&self) -> ComparisonSource<'_> {
        if !self.is_codebase {
            return ComparisonSource::Inline(&self.code);
        }
        match self.codebase_type {
            Some(CodebaseType::Git) => ComparisonSource::Git {
                url: &self.git_url,
                tag: &self.git_tag,
            },
            Some(CodebaseType::Zip) => ComparisonSource::Zip(self.zip_input.as_ref()),
            None => ComparisonSource::Unselected,
        }
    }
}

impl Default for CompareModelsConfig {
    fn default() -> Self {
        Self::default_values()
    }
}

impl PanelConfig for CompareModelsConfig {
    type Partial = PartialCompareModelsConfig;
    type Body = CompareModelsBody;

    const DISPLAY_NAME: &'static str = "Compare Models";

    fn default_values() -> Self {
        Self {
            name: Self::DISPLAY_NAME.to_string(),
            is_codebase: false,
            codebase_type: Some(CodebaseType::Git),
            code: String::new(),
            zip_input: None,
            git_url: String::new(),
            git_tag: String::new(),
            validation: ValidationDescriptor::valid(),
        }
    }

    fn from_partial(init: PartialCompareModelsConfig) -> Self {
        let defaults = Self::default_values();
        Self {
            name: init.name.unwrap_or(defaults.name),
            is_codebase: init.is_codebase.unwrap_or(defaults.is_codebase),
            codebase_type: init.codebase_type.unwrap_or(defaults.codebase_type),
            code: init.code.unwrap_or(defaults.code),
            zip_input: init.zip_input.unwrap_or(defaults.zip_input),
            git_url: init.git_url.unwrap_or(defaults.git_url),
            git_tag: init.git_tag.unwrap_or(defaults.git_tag),
            validation: init.validation.unwrap_or(defaults.validation),
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "validation": self.validation,
            "isCodebase": self.is_codebase,
            "codebaseType": self.codebase_type,
            "code": self.code,
            "zipInput": self.zip_input,
            "gitUrl": self.git_url,
            "gitTag": self.git_tag,
        })
    }

    fn to_envelope(&self) -> NodeConfigEnvelope<CompareModelsBody> {
        let body = CompareModelsBody {
            is_codebase: self.is_codebase,
            codebase_type: self.codebase_type,
            code: self.code.clone(),
            zip_input: self.zip_input.clone(),
            git_url: self.git_url.clone(),
            git_tag: self.git_tag.clone(),
        };
        NodeConfigEnvelope::new(self.name.clone(), body, self.validation.clone())
    }

    fn from_envelope(envelope: NodeConfigEnvelope<CompareModelsBody>) -> Self {
        let body = envelope.body;
        Self {
            name: envelope.name,
            is_codebase: body.is_codebase,
            codebase_type: body.codebase_type,
            code: body.code,
            zip_input: body.zip_input,
            git_url: body.git_url,
            git_tag: body.git_tag,
            validation: envelope.validation,
        }
    }

    fn validation(&self) -> &ValidationDescriptor {
        &self.validation
    }

    fn validation_mut(&mut self) -> &mut ValidationDescriptor {
        &mut self.validation
    }
}
