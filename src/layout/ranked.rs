use super::LayoutStrategy;
use crate::document::Position;
use crate::graph::{Graph, GraphNode};
use ahash::AHashMap;
use std::collections::VecDeque;

/// Fixed size class of a function node on the canvas.
pub const FUNCTION_NODE_SIZE: (f64, f64) = (220.0, 90.0);
/// Fixed size class of a parameter node on the canvas.
pub const PARAMETER_NODE_SIZE: (f64, f64) = (180.0, 70.0);

/// Axis along which ranks advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    LeftRight,
    TopBottom,
}

/// The alternative placement strategy: a layered layout where each node's
/// rank is its longest-path depth along edge direction, so topology (not
/// the declared execution order) drives placement.
///
/// Rank centers advance along the main axis by the widest node of the
/// rank plus `rank_spacing`; nodes within a rank advance along the cross
/// axis by their size plus `node_spacing`. Computed center coordinates are
/// converted to the top-left anchoring the node representation expects.
#[derive(Debug, Clone, Copy)]
pub struct RankedLayout {
    pub direction: Direction,
    pub node_spacing: f64,
    pub rank_spacing: f64,
}

impl Default for RankedLayout {
    fn default() -> Self {
        Self {
            direction: Direction::LeftRight,
            node_spacing: 60.0,
            rank_spacing: 120.0,
        }
    }
}

fn node_size(node: &GraphNode) -> (f64, f64) {
    if node.is_parameter() {
        PARAMETER_NODE_SIZE
    } else {
        FUNCTION_NODE_SIZE
    }
}

impl RankedLayout {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Longest-path ranks over all edges: Kahn's queue gives a topological
    /// order, then each node pushes its successors to at least one rank
    /// past itself. Nodes a cycle keeps off the queue fall back to rank 0
    /// rather than being dropped.
    fn compute_ranks(graph: &Graph) -> AHashMap<String, usize> {
        let mut indegree: AHashMap<&str, usize> = AHashMap::new();
        let mut successors: AHashMap<&str, Vec<&str>> = AHashMap::new();

        for node in &graph.nodes {
            indegree.insert(node.id.as_str(), 0);
        }
        for edge in &graph.edges {
            successors
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
            *indegree.entry(edge.target.as_str()).or_insert(0) += 1;
        }

        let mut queue: VecDeque<&str> = graph
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| indegree.get(id).copied().unwrap_or(0) == 0)
            .collect();

        let mut order: Vec<&str> = Vec::with_capacity(graph.nodes.len());
        while let Some(id) = queue.pop_front() {
            order.push(id);
            if let Some(next) = successors.get(id) {
                for target in next {
                    if let Some(deg) = indegree.get_mut(target) {
                        *deg -= 1;
                        if *deg == 0 {
                            queue.push_back(target);
                        }
                    }
                }
            }
        }
        if order.len() < graph.nodes.len() {
            for node in &graph.nodes {
                if !order.contains(&node.id.as_str()) {
                    order.push(node.id.as_str());
                }
            }
        }

        let mut ranks: AHashMap<String, usize> = AHashMap::new();
        for id in order {
            let rank = *ranks.entry(id.to_string()).or_insert(0);
            if let Some(next) = successors.get(id) {
                for target in next {
                    let entry = ranks.entry(target.to_string()).or_insert(0);
                    *entry = (*entry).max(rank + 1);
                }
            }
        }
        ranks
    }
}

impl LayoutStrategy for RankedLayout {
    fn layout(&self, graph: &mut Graph, _execution_order: &[String]) {
        let ranks = Self::compute_ranks(graph);
        let max_rank = ranks.values().copied().max().unwrap_or(0);

        // Buckets keep node array order within a rank, so layout stays
        // deterministic for identical input.
        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); max_rank + 1];
        for (index, node) in graph.nodes.iter().enumerate() {
            let rank = ranks.get(&node.id).copied().unwrap_or(0);
            buckets[rank].push(index);
        }

        let mut main_cursor = 0.0;
        for bucket in &buckets {
            let rank_extent = bucket
                .iter()
                .map(|&i| {
                    let (w, h) = node_size(&graph.nodes[i]);
                    match self.direction {
                        Direction::LeftRight => w,
                        Direction::TopBottom => h,
                    }
                })
                .fold(0.0, f64::max);

            let mut cross_cursor = 0.0;
            for &index in bucket {
                let (width, height) = node_size(&graph.nodes[index]);
                let (center_main, center_cross) = match self.direction {
                    Direction::LeftRight => {
                        let c = (main_cursor + rank_extent / 2.0, cross_cursor + height / 2.0);
                        cross_cursor += height + self.node_spacing;
                        c
                    }
                    Direction::TopBottom => {
                        let c = (main_cursor + rank_extent / 2.0, cross_cursor + width / 2.0);
                        cross_cursor += width + self.node_spacing;
                        c
                    }
                };
                // Center-anchored to top-left-anchored.
                graph.nodes[index].position = match self.direction {
                    Direction::LeftRight => {
                        Position::new(center_main - width / 2.0, center_cross - height / 2.0)
                    }
                    Direction::TopBottom => {
                        Position::new(center_cross - width / 2.0, center_main - height / 2.0)
                    }
                };
            }

            main_cursor += rank_extent + self.rank_spacing;
        }
    }
}
