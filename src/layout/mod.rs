pub mod ranked;
pub mod staggered;

pub use ranked::*;
pub use staggered::*;

use crate::graph::Graph;

/// A deterministic placement strategy over an editable graph.
///
/// Strategies assign every node a position from topology alone; no prior
/// position data is required and no randomness is allowed, so the same
/// graph always lays out the same way. `execution_order` is the stage's
/// declared order, used as a ranking hint by strategies that want it.
pub trait LayoutStrategy {
    fn layout(&self, graph: &mut Graph, execution_order: &[String]);
}
