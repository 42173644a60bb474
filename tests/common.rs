//! Common test utilities for building node configurations and descriptors.
use pipeline_panels::nodes::Group;
use pipeline_panels::prelude::*;
use serde_json::{Value, json};

/// Creates a group with a fixed id so expectations stay readable.
#[allow(dead_code)]
pub fn group(id: &str, name: &str, distribution: f64) -> Group {
    Group {
        id: id.to_string(),
        name: name.to_string(),
        distribution,
    }
}

/// A Data Split configuration routing 30% to `a` and 70% to `b`.
#[allow(dead_code)]
pub fn create_two_way_split() -> DataSplitConfig {
    DataSplitConfig {
        name: "Train/Test".to_string(),
        distribute_equally: false,
        groups: vec![group("g-a", "a", 30.0), group("g-b", "b", 70.0)],
        item_metadata: Some(true),
        validation: ValidationDescriptor::valid(),
    }
}

/// A stored Data Split descriptor as the canvas would save it.
#[allow(dead_code)]
pub fn create_split_descriptor_json(groups: Value) -> Value {
    json!({
        "id": "node-42",
        "name": "Split dataset",
        "type": "custom",
        "projectId": "project-1",
        "appId": "app-1",
        "namespace": {
            "projectName": "demo",
            "serviceName": "pipelines",
            "functionName": "data_split"
        },
        "inputs": [{ "name": "item", "type": "Item", "portId": "in-1" }],
        "outputs": [{ "name": "item", "type": "Item", "portId": "out-1" }],
        "metadata": {
            "position": { "x": 10, "y": 20 },
            "customNodeConfig": {
                "name": "Split dataset",
                "distributeEqually": false,
                "groups": groups
            }
        }
    })
}

/// A Compare Models configuration with every field set.
#[allow(dead_code)]
pub fn create_git_comparison() -> CompareModelsConfig {
    CompareModelsConfig {
        name: "Pick the winner".to_string(),
        is_codebase: true,
        codebase_type: Some(CodebaseType::Git),
        code: "def compare(a, b):\n    return a > b".to_string(),
        zip_input: Some(json!({ "name": "logic.zip", "size": 2048 })),
        git_url: "https://example.com/org/compare.git".to_string(),
        git_tag: "v1.2.0".to_string(),
        validation: ValidationDescriptor::invalid(vec![ValidationIssue::new(
            "Git tag does not exist",
            "Push the tag or pick an existing one",
        )]),
    }
}
