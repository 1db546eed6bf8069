use super::model::{
    FunctionNodeData, Graph, GraphEdge, GraphNode, NodePayload, ParameterNodeData,
};
use crate::document::{FunctionInstance, Stage, StageKind};
use crate::error::ConversionWarning;
use ahash::AHashSet;
use itertools::Itertools;

/// Converts one stage of a document into an editable graph.
///
/// Node positions are placeholders carried over from the document; a
/// layout strategy overwrites them. Referential faults in the stage are
/// collected as warnings, never raised as errors, so a damaged document
/// still produces a complete, editable graph.
pub struct StageGraphBuilder<'a> {
    kind: StageKind,
    stage: &'a Stage,
    warnings: Vec<ConversionWarning>,
}

impl<'a> StageGraphBuilder<'a> {
    pub fn new(kind: StageKind, stage: &'a Stage) -> Self {
        Self {
            kind,
            stage,
            warnings: Vec::new(),
        }
    }

    pub fn build(mut self) -> (Graph, Vec<ConversionWarning>) {
        let mut graph = Graph::default();

        // Function nodes are emitted in effective execution order: listed
        // ids first, then functions the order never mentions, appended in
        // declaration order. Assembly reads execution order back off the
        // node array, so this ordering is load-bearing.
        for function in self.effective_order() {
            graph.nodes.push(GraphNode {
                id: function.id.clone(),
                position: function.position,
                payload: NodePayload::Function(FunctionNodeData {
                    function_name: function.function_name.clone(),
                    function_file: function.function_file.clone(),
                    parameters: function.parameters.clone(),
                    enabled: function.enabled,
                    description: function.description.clone(),
                    custom_name: function.custom_name.clone(),
                    step_count: function.step_count,
                }),
            });
        }

        for node in &self.stage.parameters {
            graph.nodes.push(GraphNode {
                id: node.id.clone(),
                position: node.position,
                payload: NodePayload::Parameter(ParameterNodeData {
                    label: node.label.clone(),
                    parameters: node.parameters.clone(),
                }),
            });
        }

        self.emit_flow_edges(&mut graph);
        self.emit_binding_edges(&mut graph);

        (graph, self.warnings)
    }

    /// Listed execution order filtered to existing functions, with
    /// duplicates dropped, then unlisted functions in declaration order.
    fn effective_order(&self) -> Vec<&'a FunctionInstance> {
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut order: Vec<&'a FunctionInstance> = Vec::with_capacity(self.stage.functions.len());

        for id in &self.stage.execution_order {
            if let Some(function) = self.stage.function(id) {
                if seen.insert(id.as_str()) {
                    order.push(function);
                }
            }
        }
        for function in &self.stage.functions {
            if seen.insert(function.id.as_str()) {
                order.push(function);
            }
        }
        order
    }

    /// One flow edge per consecutive pair of listed execution-order
    /// entries. Appended functions take part in layout but have no flow
    /// edges, since the document never declared when they run.
    fn emit_flow_edges(&self, graph: &mut Graph) {
        let listed: Vec<&String> = self
            .stage
            .execution_order
            .iter()
            .filter(|id| self.stage.function(id).is_some())
            .collect();

        for (prev, next) in listed.iter().tuple_windows() {
            graph.edges.push(GraphEdge::flow(prev.as_str(), next.as_str()));
        }
    }

    /// One binding edge per `parameter_nodes` entry, carrying the entry's
    /// ordinal. A ref with no matching parameter node is reported and the
    /// edge omitted; the remaining ordinals keep their declared values.
    fn emit_binding_edges(&mut self, graph: &mut Graph) {
        for function in &self.stage.functions {
            for (ordinal, param_id) in function.parameter_nodes.iter().enumerate() {
                if self.stage.parameter_node(param_id).is_some() {
                    graph
                        .edges
                        .push(GraphEdge::binding(param_id.as_str(), function.id.as_str(), ordinal));
                } else {
                    self.warnings.push(ConversionWarning::DanglingParameterRef {
                        stage: self.kind,
                        function_id: function.id.clone(),
                        parameter_node_id: param_id.clone(),
                    });
                }
            }
        }
    }
}

/// Convenience wrapper over [`StageGraphBuilder`].
pub fn build_stage_graph(kind: StageKind, stage: &Stage) -> (Graph, Vec<ConversionWarning>) {
    StageGraphBuilder::new(kind, stage).build()
}
