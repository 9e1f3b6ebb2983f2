//! Best-first (least-cost) branch-and-bound.
//!
//! # Algorithm
//!
//! 1. Seed a min-priority queue with the reduced root node
//! 2. Pop the cheapest open node
//! 3. If it is a complete tour, stop: it is optimal
//! 4. Otherwise push all of its children and repeat
//!
//! Child bounds never decrease along a path, so no open node can lead to a
//! tour cheaper than the first complete tour popped from the queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, warn};

use super::node::SearchNode;
use super::BnbStats;
use crate::budget::Stopwatch;
use crate::graph::{Cost, CostGraph};
use crate::solver::{Solver, SolverResult};

/// Exact solver that always expands the globally cheapest open node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchAndBoundBestFirst {
    /// Vertex every tour starts (and ends) at.
    pub start: usize,
}

/// Outcome of a branch-and-bound run: the tour (if any) plus search statistics.
#[derive(Debug, Clone)]
pub struct BnbOutcome {
    /// Optimal tour, or `None` when the graph has no feasible tour.
    pub result: Option<SolverResult>,
    /// Node counters collected during the search.
    pub stats: BnbStats,
}

/// Heap entry ordered so that `BinaryHeap` pops the lowest cost first and,
/// among equal costs, the earliest inserted node.
struct QueueEntry {
    cost: Cost,
    seq: u64,
    node: SearchNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl BranchAndBoundBestFirst {
    /// Creates a solver whose tours start at `start`.
    pub fn new(start: usize) -> Self {
        Self { start }
    }

    /// Runs the search and returns the optimal tour with statistics.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a vertex of `graph`.
    pub fn run(&self, graph: &CostGraph) -> BnbOutcome {
        let n = graph.size();
        let start = self.start;
        assert!(start < n, "start vertex {start} out of range for {n} vertices");
        let clock = Stopwatch::start();

        debug!("best-first branch-and-bound: {n} vertices, start {start}");

        let root = SearchNode::root(graph, start);
        let mut stats = BnbStats {
            root_bound: root.cost,
            ..BnbStats::default()
        };

        if n == 1 {
            return BnbOutcome {
                result: Some(SolverResult::exact(0, vec![start], 0, clock.elapsed_ms())),
                stats,
            };
        }

        let mut seq = 0u64;
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            cost: root.cost,
            seq,
            node: root,
        });

        while let Some(QueueEntry { node, .. }) = queue.pop() {
            if node.is_leaf(n) {
                if !node.closes_tour(graph, start) {
                    stats.nodes_pruned += 1;
                    continue;
                }
                let tour = node.tour(start);
                debug_assert_eq!(graph.tour_cost(&tour), Some(node.cost));
                debug!(
                    "best-first branch-and-bound: optimal cost {} after {} expansions",
                    node.cost, stats.nodes_expanded
                );
                return BnbOutcome {
                    result: Some(SolverResult::exact(
                        node.cost,
                        tour,
                        stats.nodes_expanded,
                        clock.elapsed_ms(),
                    )),
                    stats,
                };
            }

            stats.nodes_expanded += 1;
            stats.max_expanded_bound = stats.max_expanded_bound.max(node.cost);

            for child in node.children(start) {
                seq += 1;
                stats.nodes_generated += 1;
                queue.push(QueueEntry {
                    cost: child.cost,
                    seq,
                    node: child,
                });
            }
        }

        warn!("best-first branch-and-bound: no feasible tour exists");
        BnbOutcome {
            result: None,
            stats,
        }
    }
}

impl Solver for BranchAndBoundBestFirst {
    fn name(&self) -> &'static str {
        "branch-and-bound (best-first)"
    }

    fn solve(&self, graph: &CostGraph) -> Option<SolverResult> {
        self.run(graph).result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::four_city_graph;

    #[test]
    fn test_four_city_optimum() {
        let outcome = BranchAndBoundBestFirst::new(0).run(&four_city_graph());
        let result = outcome.result.unwrap();
        assert_eq!(result.cost, 80);
        assert_eq!(result.tour[0], 0);
        assert_eq!(four_city_graph().tour_cost(&result.tour), Some(80));
        assert_eq!(outcome.stats.root_bound, 70);
        assert!(outcome.stats.max_expanded_bound <= 80);
    }

    #[test]
    fn test_other_start_vertex() {
        let result = BranchAndBoundBestFirst::new(2)
            .solve(&four_city_graph())
            .unwrap();
        assert_eq!(result.cost, 80);
        assert_eq!(result.tour[0], 2);
    }

    #[test]
    fn test_asymmetric_instance() {
        // Only the cycle 0 -> 2 -> 1 -> 0 is cheap.
        let graph = CostGraph::from_rows(&[
            vec![-1, 50, 1],
            vec![1, -1, 50],
            vec![50, 1, -1],
        ])
        .unwrap();
        let result = BranchAndBoundBestFirst::new(0).solve(&graph).unwrap();
        assert_eq!(result.cost, 3);
        assert_eq!(result.tour, vec![0, 2, 1]);
    }

    #[test]
    fn test_infeasible_graph_returns_none() {
        // Vertex 2 has no outgoing edges.
        let graph = CostGraph::from_rows(&[
            vec![-1, 1, 1],
            vec![1, -1, 1],
            vec![-1, -1, -1],
        ])
        .unwrap();
        assert!(BranchAndBoundBestFirst::new(0).solve(&graph).is_none());
    }

    #[test]
    fn test_missing_closing_edge_is_rejected() {
        // The cheap tour 0 -> 1 -> 2 -> 0 needs the missing edge 2 -> 0.
        let graph = CostGraph::from_rows(&[
            vec![-1, 1, 100],
            vec![100, -1, 1],
            vec![-1, 100, -1],
        ])
        .unwrap();
        let result = BranchAndBoundBestFirst::new(0).solve(&graph).unwrap();
        assert_eq!(result.tour, vec![0, 2, 1]);
        assert_eq!(result.cost, 300);
    }

    #[test]
    fn test_single_and_two_vertices() {
        let one = CostGraph::from_rows(&[vec![-1]]).unwrap();
        let r = BranchAndBoundBestFirst::new(0).solve(&one).unwrap();
        assert_eq!((r.cost, r.tour), (0, vec![0]));

        let two = CostGraph::from_rows(&[vec![-1, 3], vec![4, -1]]).unwrap();
        let r = BranchAndBoundBestFirst::new(0).solve(&two).unwrap();
        assert_eq!((r.cost, r.tour), (7, vec![0, 1]));
    }

    #[test]
    fn test_queue_entry_orders_by_cost_then_insertion() {
        let node = SearchNode::root(&four_city_graph(), 0);
        let mut heap = BinaryHeap::new();
        for (cost, seq) in [(5, 0), (3, 1), (3, 2), (9, 3)] {
            heap.push(QueueEntry {
                cost,
                seq,
                node: node.clone(),
            });
        }
        let order: Vec<(Cost, u64)> =
            std::iter::from_fn(|| heap.pop().map(|e| (e.cost, e.seq))).collect();
        assert_eq!(order, vec![(3, 1), (3, 2), (5, 0), (9, 3)]);
    }
}
