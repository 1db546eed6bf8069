//! Common test utilities for building pipeline stages and documents.
use stagewise::prelude::*;

/// The two-function scenario: `a` has no parameters, `b` carries an inline
/// parameter and no binding, execution order lists both.
#[allow(dead_code)]
pub fn create_scenario_stage() -> Stage {
    let a = FunctionInstance::new("a", "seed_cells");
    let mut b = FunctionInstance::new("b", "update_rates");
    b.parameters.insert("x".to_string(), serde_json::json!(1));

    Stage {
        functions: vec![a, b],
        execution_order: vec!["a".to_string(), "b".to_string()],
        ..Stage::default()
    }
}

/// A stage exercising explicit bindings: two functions share one parameter
/// node, a third binds two nodes of its own.
#[allow(dead_code)]
pub fn create_shared_binding_stage() -> Stage {
    let mut f1 = FunctionInstance::new("f1", "grow_cells");
    f1.parameter_nodes.push("shared_rates".to_string());
    let mut f2 = FunctionInstance::new("f2", "shrink_cells");
    f2.parameter_nodes.push("shared_rates".to_string());
    let mut f3 = FunctionInstance::new("f3", "diffuse");
    f3.parameter_nodes.push("diffusion_a".to_string());
    f3.parameter_nodes.push("diffusion_b".to_string());

    let mut shared = ParameterMap::new();
    shared.insert("rate".to_string(), serde_json::json!(0.05));

    Stage {
        functions: vec![f1, f2, f3],
        parameters: vec![
            ParameterNode {
                id: "shared_rates".to_string(),
                label: "Shared Rates".to_string(),
                parameters: shared,
                position: Position::new(10.0, 20.0),
            },
            ParameterNode {
                id: "diffusion_a".to_string(),
                label: "Diffusion A".to_string(),
                parameters: ParameterMap::new(),
                position: Position::default(),
            },
            ParameterNode {
                id: "diffusion_b".to_string(),
                label: "Diffusion B".to_string(),
                parameters: ParameterMap::new(),
                position: Position::default(),
            },
        ],
        execution_order: vec!["f1".to_string(), "f2".to_string(), "f3".to_string()],
        ..Stage::default()
    }
}

/// A complete wire-format document holding the two-function scenario in
/// its initialization stage.
#[allow(dead_code)]
pub fn scenario_document_json() -> String {
    r#"{
        "version": "1.0",
        "name": "Demo Pipeline",
        "description": "Two functions, one inline parameter",
        "metadata": { "author": "tester", "created": "2024-05-01" },
        "stages": {
            "initialization": {
                "enabled": true,
                "steps": 1,
                "functions": [
                    {
                        "id": "a",
                        "function_name": "seed_cells",
                        "function_file": "seeding.rs",
                        "parameters": {},
                        "enabled": true,
                        "position": { "x": 0, "y": 0 },
                        "description": "",
                        "custom_name": "",
                        "step_count": 1,
                        "parameter_nodes": []
                    },
                    {
                        "id": "b",
                        "function_name": "update_rates",
                        "parameters": { "x": 1 }
                    }
                ],
                "parameters": [],
                "execution_order": ["a", "b"]
            }
        }
    }"#
    .to_string()
}

/// A document using the legacy `diffusion` stage key.
#[allow(dead_code)]
pub fn legacy_document_json() -> String {
    r#"{
        "version": "1.0",
        "name": "Legacy Pipeline",
        "description": "",
        "metadata": {},
        "stages": {
            "diffusion": {
                "enabled": false,
                "steps": 4,
                "functions": [
                    { "id": "d1", "function_name": "diffuse_oxygen" }
                ],
                "parameters": [],
                "execution_order": ["d1"]
            }
        }
    }"#
    .to_string()
}
