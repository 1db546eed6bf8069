use super::model::{EdgeKind, Graph, NodePayload};
use crate::document::{FunctionInstance, ParameterNode, Stage};

/// Reconstructs a stage from a graph's current nodes and edges, the
/// inverse of [`build_stage_graph`](super::build::build_stage_graph).
///
/// Bindings are recovered from binding edges, ordered by their stored
/// ordinal. Node positions are written back verbatim, so manual drags
/// survive export. `enabled` and `steps` are carried over from
/// `prior_stage`, which the graph does not represent.
///
/// Known limitation: `execution_order` is the function nodes' current
/// array order, not a walk of the flow edges. Callers that rewire flow
/// edges must reorder the node list to match, or the exported order will
/// not reflect the rewiring.
pub fn assemble_stage(graph: &Graph, prior_stage: &Stage) -> Stage {
    let mut functions = Vec::new();
    let mut parameters = Vec::new();

    for node in &graph.nodes {
        match &node.payload {
            NodePayload::Function(data) => {
                let mut bindings: Vec<(usize, &str)> = graph
                    .binding_edges()
                    .filter(|e| e.target == node.id)
                    .filter_map(|e| match e.kind {
                        EdgeKind::Binding { ordinal } => Some((ordinal, e.source.as_str())),
                        EdgeKind::Flow => None,
                    })
                    .collect();
                bindings.sort_by_key(|(ordinal, _)| *ordinal);

                functions.push(FunctionInstance {
                    id: node.id.clone(),
                    function_name: data.function_name.clone(),
                    function_file: data.function_file.clone(),
                    parameters: data.parameters.clone(),
                    enabled: data.enabled,
                    position: node.position,
                    description: data.description.clone(),
                    custom_name: data.custom_name.clone(),
                    step_count: data.step_count,
                    parameter_nodes: bindings
                        .into_iter()
                        .map(|(_, source)| source.to_string())
                        .collect(),
                });
            }
            NodePayload::Parameter(data) => {
                parameters.push(ParameterNode {
                    id: node.id.clone(),
                    label: data.label.clone(),
                    parameters: data.parameters.clone(),
                    position: node.position,
                });
            }
        }
    }

    let execution_order = functions.iter().map(|f| f.id.clone()).collect();

    Stage {
        enabled: prior_stage.enabled,
        steps: prior_stage.steps,
        functions,
        parameters,
        execution_order,
    }
}
