use super::LayoutStrategy;
use crate::document::Position;
use crate::graph::Graph;
use ahash::AHashMap;

/// X coordinate of the even-rank (left) column.
pub const LEFT_X: f64 = 100.0;
/// X coordinate of the odd-rank (right) column.
pub const RIGHT_X: f64 = 420.0;
/// Y coordinate of rank 0.
pub const START_Y: f64 = 80.0;
/// Vertical distance between consecutive ranks.
pub const ROW_SPACING: f64 = 140.0;
/// Horizontal offset of a parameter node from the function it binds to.
pub const PARAM_OFFSET_X: f64 = -260.0;

/// The primary placement strategy: function nodes alternate between two
/// fixed columns by rank parity, one rank per row, so a long pipeline
/// never becomes a single overlong column and a test can decode the
/// column from the rank's evenness.
///
/// Each parameter node sits on the same row as the function it binds to,
/// shifted left by [`PARAM_OFFSET_X`]. A parameter node with no outgoing
/// binding edge keeps whatever position it already had.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaggeredLayout;

impl StaggeredLayout {
    pub fn new() -> Self {
        Self
    }

    /// Rank of every function node: the index of its first occurrence in
    /// `execution_order` when listed, otherwise the next unused integer,
    /// assigned in node array order.
    fn rank_functions(graph: &Graph, execution_order: &[String]) -> AHashMap<String, usize> {
        let mut ranks: AHashMap<String, usize> = AHashMap::new();
        for (rank, id) in execution_order.iter().enumerate() {
            ranks.entry(id.clone()).or_insert(rank);
        }
        let mut next_unused = execution_order.len();
        for node in graph.function_nodes() {
            ranks.entry(node.id.clone()).or_insert_with(|| {
                let rank = next_unused;
                next_unused += 1;
                rank
            });
        }
        ranks
    }
}

impl LayoutStrategy for StaggeredLayout {
    fn layout(&self, graph: &mut Graph, execution_order: &[String]) {
        let ranks = Self::rank_functions(graph, execution_order);

        for node in graph.nodes.iter_mut().filter(|n| n.is_function()) {
            if let Some(&rank) = ranks.get(&node.id) {
                let x = if rank % 2 == 0 { LEFT_X } else { RIGHT_X };
                let y = START_Y + rank as f64 * ROW_SPACING;
                node.position = Position::new(x, y);
            }
        }

        // Parameter nodes follow their bound function; orphans stay put.
        let mut anchored: Vec<(String, Position)> = Vec::new();
        for node in graph.parameter_nodes() {
            let bound_to = graph
                .binding_edges()
                .find(|e| e.source == node.id)
                .and_then(|e| graph.node(&e.target));
            if let Some(function) = bound_to {
                anchored.push((
                    node.id.clone(),
                    Position::new(function.position.x + PARAM_OFFSET_X, function.position.y),
                ));
            }
        }
        for (id, position) in anchored {
            if let Some(node) = graph.node_mut(&id) {
                node.position = position;
            }
        }

        // Presentation convention: parameter nodes first, then function
        // nodes, each group keeping its relative order.
        graph
            .nodes
            .sort_by_key(|node| if node.is_parameter() { 0 } else { 1 });
    }
}
