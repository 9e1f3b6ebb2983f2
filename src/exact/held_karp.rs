//! Held-Karp dynamic programming over vertex subsets.
//!
//! # Algorithm
//!
//! Let `C(S, v)` be the cheapest path that leaves the start vertex, visits
//! exactly the vertices of `S`, and ends at `v ∈ S`. Then
//!
//! ```text
//! C({v}, v)  = w(start, v)
//! C(S, v)    = min over p ∈ S \ {v} of C(S \ {v}, p) + w(p, v)
//! optimum    = min over v of C(all, v) + w(v, start)
//! ```
//!
//! Subsets are bitmasks over the non-start vertices. Every proper subset of
//! a mask is numerically smaller, so visiting masks in increasing order
//! fills the table bottom-up. The tour is recovered by walking backward from
//! the full set, choosing at each step a predecessor whose table entry
//! explains the current one.
//!
//! Time O(N²·2ᴺ), memory O(N·2ᴺ).
//!
//! # Reference
//!
//! Held & Karp (1962), "A Dynamic Programming Approach to Sequencing
//! Problems", *Journal of the SIAM* 10(1), 196-210.

use log::{debug, warn};

use crate::budget::Stopwatch;
use crate::graph::{Cost, CostGraph};
use crate::solver::{Solver, SolverResult};

/// Table entry for a `(subset, end)` state no path reaches.
const UNREACHABLE: Cost = Cost::MAX;

/// Exact solver based on subset dynamic programming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeldKarp {
    /// Vertex every tour starts (and ends) at.
    pub start: usize,
}

impl HeldKarp {
    /// Largest graph the solver accepts.
    ///
    /// At this size the table holds 19 · 2¹⁹ entries (about 80 MB).
    pub const MAX_VERTICES: usize = 20;

    /// Creates a solver whose tours start at `start`.
    pub fn new(start: usize) -> Self {
        Self { start }
    }

    /// Fills the DP table and reconstructs the optimal tour.
    ///
    /// # Panics
    ///
    /// Panics if `graph` has more than [`MAX_VERTICES`](Self::MAX_VERTICES)
    /// vertices or `start` is not a vertex of `graph`.
    pub fn run(&self, graph: &CostGraph) -> Option<SolverResult> {
        let n = graph.size();
        let start = self.start;
        assert!(
            n <= Self::MAX_VERTICES,
            "held-karp supports at most {} vertices, got {n}",
            Self::MAX_VERTICES
        );
        assert!(start < n, "start vertex {start} out of range for {n} vertices");
        let clock = Stopwatch::start();

        debug!("held-karp: {n} vertices, start {start}");

        if n == 1 {
            return Some(SolverResult::exact(0, vec![start], 0, clock.elapsed_ms()));
        }

        // Bit `i` of a mask stands for `others[i]`.
        let others: Vec<usize> = (0..n).filter(|&v| v != start).collect();
        let k = others.len();
        let full = (1usize << k) - 1;
        let mut table = vec![UNREACHABLE; (full + 1) * k];
        let idx = |mask: usize, end: usize| mask * k + end;

        for (i, &v) in others.iter().enumerate() {
            if let Some(w) = graph.weight(start, v) {
                table[idx(1 << i, i)] = w;
            }
        }

        let mut states = 0usize;
        for mask in 1..=full {
            if mask.count_ones() < 2 {
                continue;
            }
            for end in 0..k {
                if mask & (1 << end) == 0 {
                    continue;
                }
                states += 1;
                let prev_mask = mask & !(1 << end);
                let mut best = UNREACHABLE;
                for prev in 0..k {
                    if prev_mask & (1 << prev) == 0 {
                        continue;
                    }
                    let base = table[idx(prev_mask, prev)];
                    if base == UNREACHABLE {
                        continue;
                    }
                    if let Some(w) = graph.weight(others[prev], others[end]) {
                        best = best.min(base.saturating_add(w));
                    }
                }
                table[idx(mask, end)] = best;
            }
        }

        let closing = (0..k)
            .filter_map(|end| {
                let base = table[idx(full, end)];
                if base == UNREACHABLE {
                    return None;
                }
                let w = graph.weight(others[end], start)?;
                Some((base.saturating_add(w), end))
            })
            .min();

        let Some((cost, last)) = closing else {
            warn!("held-karp: no feasible tour exists");
            return None;
        };

        let mut reversed = Vec::with_capacity(n);
        let mut mask = full;
        let mut end = last;
        loop {
            reversed.push(others[end]);
            let here = table[idx(mask, end)];
            let prev_mask = mask & !(1 << end);
            if prev_mask == 0 {
                break;
            }
            let prev = (0..k).find(|&p| {
                prev_mask & (1 << p) != 0
                    && table[idx(prev_mask, p)] != UNREACHABLE
                    && graph
                        .weight(others[p], others[end])
                        .is_some_and(|w| table[idx(prev_mask, p)].saturating_add(w) == here)
            })?;
            mask = prev_mask;
            end = prev;
        }
        reversed.push(start);
        reversed.reverse();

        debug!("held-karp: optimal cost {cost} over {states} states");
        Some(SolverResult::exact(cost, reversed, states, clock.elapsed_ms()))
    }
}

impl Solver for HeldKarp {
    fn name(&self) -> &'static str {
        "held-karp"
    }

    fn solve(&self, graph: &CostGraph) -> Option<SolverResult> {
        self.run(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::four_city_graph;

    #[test]
    fn test_four_city_optimum() {
        let graph = four_city_graph();
        let result = HeldKarp::new(0).run(&graph).unwrap();
        assert_eq!(result.cost, 80);
        assert_eq!(result.tour[0], 0);
        assert_eq!(graph.tour_cost(&result.tour), Some(80));
    }

    #[test]
    fn test_start_vertex_respected() {
        let graph = four_city_graph();
        let result = HeldKarp::new(3).run(&graph).unwrap();
        assert_eq!(result.tour[0], 3);
        assert_eq!(graph.tour_cost(&result.tour), Some(80));
    }

    #[test]
    fn test_asymmetric_direction() {
        let graph = CostGraph::from_rows(&[
            vec![-1, 50, 1],
            vec![1, -1, 50],
            vec![50, 1, -1],
        ])
        .unwrap();
        let result = HeldKarp::new(0).run(&graph).unwrap();
        assert_eq!(result.cost, 3);
        assert_eq!(result.tour, vec![0, 2, 1]);
    }

    #[test]
    fn test_trivial_sizes() {
        let one = CostGraph::from_rows(&[vec![-1]]).unwrap();
        assert_eq!(HeldKarp::new(0).run(&one).unwrap().tour, vec![0]);

        let two = CostGraph::from_rows(&[vec![-1, 4], vec![6, -1]]).unwrap();
        let result = HeldKarp::new(1).run(&two).unwrap();
        assert_eq!((result.cost, result.tour), (10, vec![1, 0]));
    }

    #[test]
    fn test_infeasible_graph() {
        let graph = CostGraph::from_rows(&[
            vec![-1, 1, 1, -1],
            vec![1, -1, 1, -1],
            vec![1, 1, -1, -1],
            vec![1, 1, 1, -1],
        ])
        .unwrap();
        assert!(HeldKarp::new(0).run(&graph).is_none());
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = CostGraph::from_fn(5, |_, _| Some(0)).unwrap();
        let result = HeldKarp::new(0).run(&graph).unwrap();
        assert_eq!(result.cost, 0);
        assert_eq!(result.tour.len(), 5);
    }

    #[test]
    #[should_panic(expected = "at most")]
    fn test_too_many_vertices_panics() {
        let n = HeldKarp::MAX_VERTICES + 1;
        let graph = CostGraph::from_fn(n, |_, _| Some(1)).unwrap();
        HeldKarp::new(0).run(&graph);
    }
}
