//! Unit tests for validation, templates and errors.
mod common;
use common::*;
use pipeline_panels::prelude::*;
use pipeline_panels::template;

#[test]
fn test_validation_constructors() {
    let valid = ValidationDescriptor::default();
    assert!(valid.valid);
    assert!(valid.errors.is_empty());
    assert!(valid.is_consistent());

    let issue = ValidationIssue::new("Name is empty", "Give the node a name");
    let from_issues = ValidationDescriptor::from_issues(vec![issue.clone()]);
    assert!(!from_issues.valid);
    assert_eq!(from_issues, ValidationDescriptor::invalid(vec![issue]));
    assert!(ValidationDescriptor::from_issues(Vec::new()).valid);
}

#[test]
fn test_validation_consistency_is_reported_not_enforced() {
    let unexplained = ValidationDescriptor::invalid(Vec::new());
    assert!(!unexplained.valid);
    assert!(!unexplained.is_consistent());

    let noisy = ValidationDescriptor {
        valid: true,
        errors: vec![ValidationIssue::new("warning", "ignore me")],
    };
    assert!(noisy.is_consistent());
}

#[test]
fn test_validate_with_closure_stores_result() {
    let mut config = create_two_way_split();
    config.groups[1].distribution = 50.0;

    let sums_to_hundred = |c: &DataSplitConfig| {
        let mut issues = Vec::new();
        if c.total_distribution() != 100.0 {
            issues.push(ValidationIssue::new(
                format!("Distribution adds up to {}%", c.total_distribution()),
                "Make the groups add up to 100%",
            ));
        }
        ValidationDescriptor::from_issues(issues)
    };

    let result = config.validate_with(&sums_to_hundred).clone();
    assert!(!result.valid);
    assert_eq!(result.errors[0].message, "Distribution adds up to 80%");
    assert_eq!(config.validation, result);

    config.groups[1].distribution = 70.0;
    assert!(config.validate_with(&sums_to_hundred).valid);
    assert!(config.validation.errors.is_empty());
}

struct RequireGitUrl;

impl ConfigValidator<CompareModelsConfig> for RequireGitUrl {
    fn validate(&self, config: &CompareModelsConfig) -> ValidationDescriptor {
        match config.logic_source() {
            ComparisonSource::Git { url, .. } if url.is_empty() => {
                ValidationDescriptor::invalid(vec![ValidationIssue::new(
                    "Git URL is missing",
                    "Enter the repository URL",
                )])
            }
            _ => ValidationDescriptor::valid(),
        }
    }
}

#[test]
fn test_validate_with_validator_type() {
    let mut config = CompareModelsConfig::default_values();
    config.is_codebase = true;
    assert!(!config.validate_with(&RequireGitUrl).valid);

    config.git_url = "https://example.com/repo.git".to_string();
    assert!(config.validate_with(&RequireGitUrl).valid);
}

#[test]
fn test_template_placeholders() {
    assert_eq!(template::placeholders("plain"), Vec::<&str>::new());
    assert_eq!(template::placeholders("{a}-{b}"), vec!["a", "b"]);
    assert_eq!(template::placeholders("{a}-{unterminated"), vec!["a"]);
}

#[test]
fn test_template_render() {
    let resolve = |expr: &str| match expr {
        "model.name" => Some("yolo".to_string()),
        _ => None,
    };
    assert_eq!(template::render("{model.name}_v2", resolve), "yolo_v2");
    assert_eq!(template::render("{unknown}-x", resolve), "-x");
    assert_eq!(template::render("a{}b", resolve), "ab");
    assert_eq!(template::render("{model.name}-{oops", resolve), "yolo-{oops");
    assert_eq!(template::render("no placeholders", resolve), "no placeholders");
}

#[test]
fn test_template_render_does_not_rescan_output() {
    let rendered = template::render("{x}", |_| Some("{x}".to_string()));
    assert_eq!(rendered, "{x}");
}

#[test]
fn test_error_display() {
    let err = PanelError::MissingGroups {
        node_id: "node_A".to_string(),
    };
    assert!(err.to_string().contains("node_A"));
    assert!(err.to_string().contains("groups"));

    let parse_err: PanelError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(parse_err.to_string().starts_with("Failed to parse panel JSON"));
}
