use crate::catalog::FunctionCatalog;
use crate::document::{ParameterNode, Position, Stage};

/// Prefix for auto-created parameter node ids, derived from the function
/// id so re-synthesis of the same stage is stable.
pub const AUTO_PARAM_PREFIX: &str = "param_auto_";

/// Ensures every function that carries inline parameters but no explicit
/// binding gets exactly one parameter node of its own.
///
/// For each function with non-empty `parameters` and empty
/// `parameter_nodes`, a node with id `param_auto_<functionId>` is created,
/// labeled `"<displayName> Parameters"`, with the function's parameters
/// copied by value, and appended to the function's bindings.
///
/// Functions that already declare a binding are never touched, and two
/// functions are never merged into one shared node here; sharing is a user
/// action, not inferred. Idempotent: a second run finds every function
/// already bound and changes nothing.
pub fn synthesize_parameter_nodes(stage: &mut Stage, catalog: &dyn FunctionCatalog) {
    let mut created: Vec<ParameterNode> = Vec::new();

    for function in &mut stage.functions {
        if function.parameters.is_empty() || !function.parameter_nodes.is_empty() {
            continue;
        }

        let display_name = catalog
            .lookup(&function.function_name)
            .map(|spec| spec.display_name.as_str())
            .unwrap_or_else(|| function.display_name())
            .to_string();

        let node_id = format!("{}{}", AUTO_PARAM_PREFIX, function.id);
        created.push(ParameterNode {
            id: node_id.clone(),
            label: format!("{} Parameters", display_name),
            parameters: function.parameters.clone(),
            position: Position::default(),
        });
        function.parameter_nodes.push(node_id);
    }

    stage.parameters.extend(created);
}
