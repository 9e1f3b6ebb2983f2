//! Depth-first branch-and-bound with an incumbent upper bound.

use log::{debug, trace, warn};

use super::best_first::BnbOutcome;
use super::node::SearchNode;
use super::BnbStats;
use crate::budget::Stopwatch;
use crate::graph::{Cost, CostGraph};
use crate::solver::{Solver, SolverResult};

/// Exact solver that dives depth-first and prunes against the best tour so far.
///
/// Children are visited in ascending vertex order. A node is pruned when its
/// lower bound exceeds the incumbent cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchAndBoundDepthFirst {
    /// Vertex every tour starts (and ends) at.
    pub start: usize,
}

/// Mutable state of one depth-first run.
struct DfsSearch<'a> {
    graph: &'a CostGraph,
    start: usize,
    clock: Stopwatch,
    upper_bound: Option<Cost>,
    best: Option<(Vec<usize>, f64)>,
    stats: BnbStats,
}

impl DfsSearch<'_> {
    fn visit(&mut self, node: SearchNode) {
        if self.upper_bound.is_some_and(|ub| node.cost > ub) {
            self.stats.nodes_pruned += 1;
            return;
        }

        if node.is_leaf(self.graph.size()) {
            if !node.closes_tour(self.graph, self.start) {
                self.stats.nodes_pruned += 1;
                return;
            }
            if self.upper_bound.is_none_or(|ub| node.cost < ub) {
                trace!("depth-first branch-and-bound: incumbent {}", node.cost);
                self.upper_bound = Some(node.cost);
                self.best = Some((node.tour(self.start), self.clock.elapsed_ms()));
            }
            return;
        }

        self.stats.nodes_expanded += 1;
        self.stats.max_expanded_bound = self.stats.max_expanded_bound.max(node.cost);

        let children = node.children(self.start);
        self.stats.nodes_generated += children.len();
        drop(node);
        for child in children {
            self.visit(child);
        }
    }
}

impl BranchAndBoundDepthFirst {
    /// Creates a solver whose tours start at `start`.
    pub fn new(start: usize) -> Self {
        Self { start }
    }

    /// Runs the full search and returns the best tour with statistics.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a vertex of `graph`.
    pub fn run(&self, graph: &CostGraph) -> BnbOutcome {
        let n = graph.size();
        let start = self.start;
        assert!(start < n, "start vertex {start} out of range for {n} vertices");
        let clock = Stopwatch::start();

        debug!("depth-first branch-and-bound: {n} vertices, start {start}");

        let root = SearchNode::root(graph, start);
        let stats = BnbStats {
            root_bound: root.cost,
            ..BnbStats::default()
        };

        if n == 1 {
            return BnbOutcome {
                result: Some(SolverResult::exact(0, vec![start], 0, clock.elapsed_ms())),
                stats,
            };
        }

        let mut search = DfsSearch {
            graph,
            start,
            clock,
            upper_bound: None,
            best: None,
            stats,
        };
        search.visit(root);

        let DfsSearch {
            upper_bound,
            best,
            stats,
            ..
        } = search;

        let result = match (upper_bound, best) {
            (Some(cost), Some((tour, found_ms))) => {
                debug!(
                    "depth-first branch-and-bound: optimal cost {cost}, {} expanded, {} pruned",
                    stats.nodes_expanded, stats.nodes_pruned
                );
                Some(SolverResult::exact(cost, tour, stats.nodes_expanded, found_ms))
            }
            _ => {
                warn!("depth-first branch-and-bound: no feasible tour exists");
                None
            }
        };

        BnbOutcome { result, stats }
    }
}

impl Solver for BranchAndBoundDepthFirst {
    fn name(&self) -> &'static str {
        "branch-and-bound (depth-first)"
    }

    fn solve(&self, graph: &CostGraph) -> Option<SolverResult> {
        self.run(graph).result
    }
}
