use crate::document::{ParameterMap, Position};

/// Handle names for flow connectors. Fixed by convention with the
/// rendering surface.
pub const FLOW_SOURCE_HANDLE: &str = "flow-out";
pub const FLOW_TARGET_HANDLE: &str = "flow-in";
pub const BINDING_SOURCE_HANDLE: &str = "param-out";

/// Payload of a function node on the canvas. Mirrors the persisted
/// [`FunctionInstance`](crate::document::FunctionInstance) minus identity
/// and position, which live on the node itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNodeData {
    pub function_name: String,
    pub function_file: String,
    pub parameters: ParameterMap,
    pub enabled: bool,
    pub description: String,
    pub custom_name: String,
    pub step_count: u32,
}

/// Payload of a parameter node on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterNodeData {
    pub label: String,
    pub parameters: ParameterMap,
}

/// The two node kinds, as a closed sum so every consumer handles both.
#[derive(Debug, Clone, PartialEq)]
pub enum NodePayload {
    Function(FunctionNodeData),
    Parameter(ParameterNodeData),
}

/// One node of the editable graph. Ephemeral: graphs are derived from a
/// stage and assembled back into one, never persisted themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub position: Position,
    pub payload: NodePayload,
}

impl GraphNode {
    pub fn is_function(&self) -> bool {
        matches!(self.payload, NodePayload::Function(_))
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self.payload, NodePayload::Parameter(_))
    }

    pub fn as_function(&self) -> Option<&FunctionNodeData> {
        match &self.payload {
            NodePayload::Function(data) => Some(data),
            NodePayload::Parameter(_) => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&ParameterNodeData> {
        match &self.payload {
            NodePayload::Parameter(data) => Some(data),
            NodePayload::Function(_) => None,
        }
    }
}

/// Edge kind. A binding edge carries its ordinal among the target
/// function's bindings as data; the `params-<i>` string the rendering
/// surface sees is computed from it, so removing a middle binding cannot
/// silently re-bind the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Flow,
    Binding { ordinal: usize },
}

/// One edge of the editable graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    /// Presentation hint for flow edges, not a behavioral contract.
    pub animated: bool,
}

impl GraphEdge {
    /// A "runs after" edge between two consecutive functions.
    pub fn flow(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("flow-{}-{}", source, target),
            source,
            target,
            kind: EdgeKind::Flow,
            animated: true,
        }
    }

    /// A "supplies parameters to" edge from a parameter node to a function.
    pub fn binding(source: impl Into<String>, target: impl Into<String>, ordinal: usize) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("bind-{}-{}-{}", source, target, ordinal),
            source,
            target,
            kind: EdgeKind::Binding { ordinal },
            animated: false,
        }
    }

    pub fn is_flow(&self) -> bool {
        self.kind == EdgeKind::Flow
    }

    pub fn is_binding(&self) -> bool {
        matches!(self.kind, EdgeKind::Binding { .. })
    }

    /// The connector name on the source node.
    pub fn source_handle(&self) -> String {
        match self.kind {
            EdgeKind::Flow => FLOW_SOURCE_HANDLE.to_string(),
            EdgeKind::Binding { .. } => BINDING_SOURCE_HANDLE.to_string(),
        }
    }

    /// The connector name on the target node. Binding handles are derived
    /// from the stored ordinal, one distinct connector per binding.
    pub fn target_handle(&self) -> String {
        match self.kind {
            EdgeKind::Flow => FLOW_TARGET_HANDLE.to_string(),
            EdgeKind::Binding { ordinal } => format!("params-{}", ordinal),
        }
    }
}

/// Recovers a binding ordinal from a raw string handle such as
/// `"params-2"`, for graphs handed back from a string-typed UI surface.
/// Unparseable handles fall back to ordinal 0.
pub fn parse_handle_ordinal(handle: &str) -> usize {
    handle
        .rsplit('-')
        .next()
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(0)
}

/// The editable graph for one stage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn function_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_function())
    }

    pub fn parameter_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_parameter())
    }

    pub fn flow_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.is_flow())
    }

    pub fn binding_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.is_binding())
    }
}
