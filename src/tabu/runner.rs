//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a nearest-neighbor tour
//! 2. At each iteration:
//!    a. Evaluate every position pair under the move operator
//!    b. Select the best non-tabu move (or a tabu move satisfying aspiration)
//!    c. Apply the move and push it onto the tabu list
//!    d. Update the global best if improved
//! 3. After `stagnation_limit` iterations without a new global best, restart
//!    from a nearest-neighbor tour at a random vertex with an empty tabu list
//! 4. Terminate when the time budget expires or the run is cancelled
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::{debug, trace};

use super::config::{MoveOperator, TabuConfig};
use super::list::TabuList;
use crate::budget::TimeBudget;
use crate::construct::random_nearest_neighbor_tour;
use crate::graph::{Cost, CostGraph};
use crate::operators::{relocate, reverse_segment, swap_positions};
use crate::random::rng_from_seed;
use crate::solver::{Solver, SolverResult};

/// A move identified by the tour positions it acts on.
///
/// Swap and reversal moves are symmetric and stored with `i < j`; insertion
/// moves keep their direction (`i` is the source position, `j` the target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabuMove {
    pub i: usize,
    pub j: usize,
}

impl TabuMove {
    fn apply(self, op: MoveOperator, tour: &mut [usize]) {
        match op {
            MoveOperator::VertexSwap => swap_positions(tour, self.i, self.j),
            MoveOperator::EdgeReversal => reverse_segment(tour, self.i, self.j),
            MoveOperator::Insertion => relocate(tour, self.i, self.j),
        }
    }

    fn undo(self, op: MoveOperator, tour: &mut [usize]) {
        match op {
            MoveOperator::Insertion => relocate(tour, self.j, self.i),
            _ => self.apply(op, tour),
        }
    }
}

/// Every move of `op` on a tour of `n` vertices.
fn neighborhood(op: MoveOperator, n: usize) -> Vec<TabuMove> {
    let mut moves = Vec::new();
    for i in 0..n {
        for j in 0..n {
            let keep = match op {
                MoveOperator::Insertion => i != j,
                _ => i < j,
            };
            if keep {
                moves.push(TabuMove { i, j });
            }
        }
    }
    moves
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best tour found.
    pub result: SolverResult,
    /// Iteration at which the best tour was found.
    pub best_iteration: usize,
    /// Number of stagnation restarts.
    pub restarts: usize,
    /// Whether the run stopped on the cancel flag.
    pub cancelled: bool,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search until the time budget expires.
    pub fn run(graph: &CostGraph, config: &TabuConfig) -> TabuResult {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs Tabu Search with an optional cancellation token.
    ///
    /// `config` is assumed to be validated.
    pub fn run_with_cancel(
        graph: &CostGraph,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TabuResult {
        let budget = TimeBudget::start(config.time_budget_ms).with_cancel(cancel);
        let mut rng = rng_from_seed(config.seed);
        let n = graph.size();
        let op = config.move_operator;
        let moves = neighborhood(op, n);
        let mut tabu = TabuList::new(config.list_size_for(n));

        debug!(
            "tabu search: {n} vertices, {op:?}, {} moves, list size {}",
            moves.len(),
            tabu.capacity()
        );

        let mut current = random_nearest_neighbor_tour(graph, &mut rng);
        let mut best = current.clone();
        let mut best_cost = graph.penalized_cost(&current);
        let mut best_ms = budget.elapsed_ms();
        let mut best_iteration = 0;

        let mut iterations = 0usize;
        let mut stagnation = 0usize;
        let mut restarts = 0usize;
        let mut scratch = current.clone();

        while !moves.is_empty() && !budget.should_stop() {
            iterations += 1;

            let mut chosen: Option<(TabuMove, Cost)> = None;
            let mut fallback: Option<(TabuMove, Cost)> = None;
            scratch.copy_from_slice(&current);

            for &mv in &moves {
                mv.apply(op, &mut scratch);
                let cost = graph.penalized_cost(&scratch);
                mv.undo(op, &mut scratch);

                if fallback.is_none_or(|(_, c)| cost < c) {
                    fallback = Some((mv, cost));
                }
                let admissible =
                    !tabu.contains(&mv) || (config.aspiration && cost < best_cost);
                if admissible && chosen.is_none_or(|(_, c)| cost < c) {
                    chosen = Some((mv, cost));
                }
            }

            // Every move is tabu and none aspirates: take the least bad one.
            let Some((mv, cost)) = chosen.or(fallback) else {
                break;
            };
            mv.apply(op, &mut current);
            tabu.push(mv);

            if cost < best_cost {
                trace!("tabu search: new best {cost} at iteration {iterations}");
                best.clone_from(&current);
                best_cost = cost;
                best_ms = budget.elapsed_ms();
                best_iteration = iterations;
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            if stagnation >= config.stagnation_limit {
                trace!("tabu search: restart after {stagnation} stagnant iterations");
                current = random_nearest_neighbor_tour(graph, &mut rng);
                tabu.clear();
                stagnation = 0;
                restarts += 1;
            }
        }

        let cancelled = budget.cancelled();
        debug!(
            "tabu search: best {best_cost} after {iterations} iterations, {restarts} restarts{}",
            if cancelled { " (cancelled)" } else { "" }
        );

        TabuResult {
            result: SolverResult::heuristic(graph, best, iterations, best_ms),
            best_iteration,
            restarts,
            cancelled,
        }
    }
}

impl Solver for TabuConfig {
    fn name(&self) -> &'static str {
        "tabu search"
    }

    fn solve(&self, graph: &CostGraph) -> Option<SolverResult> {
        Some(TabuRunner::run(graph, self).result)
    }
}
