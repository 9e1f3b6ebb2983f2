//! Branch-and-Bound (B&B) over reduced cost matrices.
//!
//! Both traversals share the same tree: a node commits to a partial path
//! from the start vertex, and its bound is the path cost plus the reduction
//! of the remaining matrix. The bound is admissible, so it never exceeds the
//! cost of the best tour completing the node.
//!
//! - [`BranchAndBoundBestFirst`]: least-cost priority queue, stops at the
//!   first complete tour popped
//! - [`BranchAndBoundDepthFirst`]: recursive dive with an incumbent bound
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem", *Operations Research* 11(6), 972-989.
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems", *Econometrica* 28(3), 497-520.

mod best_first;
mod depth_first;
mod node;
mod reduction;

pub use best_first::{BnbOutcome, BranchAndBoundBestFirst};
pub use depth_first::BranchAndBoundDepthFirst;
pub use node::SearchNode;
pub use reduction::{lower_bound, ReducedMatrix};

use crate::graph::Cost;

/// Node counters collected by a branch-and-bound run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbStats {
    /// Lower bound of the root node.
    pub root_bound: Cost,
    /// Nodes whose children were generated.
    pub nodes_expanded: usize,
    /// Children created across the run.
    pub nodes_generated: usize,
    /// Nodes discarded by the incumbent bound or a missing closing edge.
    pub nodes_pruned: usize,
    /// Largest bound among expanded nodes.
    pub max_expanded_bound: Cost,
}
