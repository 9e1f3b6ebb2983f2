//! Exhaustive permutation search.

use log::{debug, trace, warn};

use crate::budget::Stopwatch;
use crate::graph::{Cost, CostGraph};
use crate::solver::{Solver, SolverResult};

/// Exact solver that evaluates every ordering of the non-start vertices.
///
/// Runs in O(N!) time; intended as a correctness oracle for N ≲ 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BruteForce {
    /// Vertex every tour starts (and ends) at.
    pub start: usize,
}

impl BruteForce {
    /// Creates a solver whose tours start at `start`.
    pub fn new(start: usize) -> Self {
        Self { start }
    }

    /// Enumerates all tours and returns the cheapest feasible one.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a vertex of `graph`.
    pub fn run(&self, graph: &CostGraph) -> Option<SolverResult> {
        let n = graph.size();
        let start = self.start;
        assert!(start < n, "start vertex {start} out of range for {n} vertices");
        let clock = Stopwatch::start();

        debug!("brute force: {n} vertices, start {start}");

        let mut rest: Vec<usize> = (0..n).filter(|&v| v != start).collect();
        let mut best: Option<(Cost, Vec<usize>, f64)> = None;
        let mut evaluated = 0usize;

        loop {
            evaluated += 1;
            if let Some(cost) = path_cost(graph, start, &rest) {
                if best.as_ref().is_none_or(|(c, _, _)| cost < *c) {
                    trace!("brute force: new best {cost}");
                    best = Some((cost, rest.clone(), clock.elapsed_ms()));
                }
            }
            if !next_permutation(&mut rest) {
                break;
            }
        }

        match best {
            Some((cost, rest, found_ms)) => {
                debug!("brute force: optimal cost {cost} over {evaluated} permutations");
                let mut tour = Vec::with_capacity(n);
                tour.push(start);
                tour.extend(rest);
                Some(SolverResult::exact(cost, tour, evaluated, found_ms))
            }
            None => {
                warn!("brute force: no feasible tour exists");
                None
            }
        }
    }
}

impl Solver for BruteForce {
    fn name(&self) -> &'static str {
        "brute force"
    }

    fn solve(&self, graph: &CostGraph) -> Option<SolverResult> {
        self.run(graph)
    }
}

/// Cost of `start -> rest[0] -> ... -> rest[k] -> start`, `None` if an edge is missing.
fn path_cost(graph: &CostGraph, start: usize, rest: &[usize]) -> Option<Cost> {
    let mut prev = start;
    let mut total: Cost = 0;
    for &v in rest {
        total = total.saturating_add(graph.weight(prev, v)?);
        prev = v;
    }
    if prev != start {
        total = total.saturating_add(graph.weight(prev, start)?);
    }
    Some(total)
}

/// Rearranges `perm` into the next lexicographically greater permutation.
///
/// Returns `false` (leaving `perm` in descending order) when `perm` is
/// already the last permutation.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `i`.
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    // Rightmost successor of the pivot.
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}
