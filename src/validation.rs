use serde::{Deserialize, Serialize};

/// A single problem found on a node configuration, with a hint on how to fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub suggestion: String,
}

impl ValidationIssue {
    pub fn new(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// The validation state carried by every node configuration.
///
/// This is a passive result container. It never computes validity on its own; a
/// [`ConfigValidator`] or the pipeline canvas fills it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDescriptor {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<ValidationIssue>,
}

impl ValidationDescriptor {
    /// A passing result with no errors.
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing result carrying the given issues.
    pub fn invalid(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }

    /// Builds a result whose validity follows from whether any issue was reported.
    pub fn from_issues(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Whether a failing result actually explains itself.
    ///
    /// Producers are expected to pair `valid == false` with at least one issue. Nothing in
    /// this crate enforces it; callers that care can check.
    pub fn is_consistent(&self) -> bool {
        self.valid || !self.errors.is_empty()
    }
}

impl Default for ValidationDescriptor {
    fn default() -> Self {
        Self::valid()
    }
}

/// A pluggable check that a node configuration can be run against.
///
/// Any `Fn(&C) -> ValidationDescriptor` closure is a validator.
pub trait ConfigValidator<C> {
    fn validate(&self, config: &C) -> ValidationDescriptor;
}

impl<C, F> ConfigValidator<C> for F
where
    F: Fn(&C) -> ValidationDescriptor,
{
    fn validate(&self, config: &C) -> ValidationDescriptor {
        self(config)
    }
}
