//! SA execution loop.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;

use super::config::SaConfig;
use crate::budget::TimeBudget;
use crate::construct::random_nearest_neighbor_tour;
use crate::graph::{Cost, CostGraph};
use crate::operators::random_reversal;
use crate::random::rng_from_seed;
use crate::solver::{Solver, SolverResult};

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best tour found, with the final temperature attached.
    pub result: SolverResult,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves that lowered the current cost.
    pub improving_moves: usize,

    /// Whether the run stopped on the cancel flag.
    pub cancelled: bool,

    /// Best penalized cost sampled every [`HISTORY_INTERVAL`] steps.
    pub cost_history: Vec<Cost>,
}

/// Steps between two [`SaResult::cost_history`] samples.
pub const HISTORY_INTERVAL: usize = 1_000;

/// Executes simulated annealing over segment-reversal moves.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA until the time budget expires.
    pub fn run(graph: &CostGraph, config: &SaConfig) -> SaResult {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// `config` is assumed to be validated.
    pub fn run_with_cancel(
        graph: &CostGraph,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SaResult {
        let budget = TimeBudget::start(config.time_budget_ms).with_cancel(cancel);
        let mut rng = rng_from_seed(config.seed);
        let n = graph.size();
        let alpha = config.modifier();

        debug!(
            "simulated annealing: {n} vertices, {:?} cooling (alpha {alpha}), budget {} ms",
            config.cooling, config.time_budget_ms
        );

        let mut current = random_nearest_neighbor_tour(graph, &mut rng);
        let mut current_cost = graph.penalized_cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut best_ms = budget.elapsed_ms();

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![best_cost];

        if n >= 2 {
            while !budget.should_stop() {
                let mut candidate = current.clone();
                random_reversal(&mut candidate, &mut rng);
                let candidate_cost = graph.penalized_cost(&candidate);

                let accept = if candidate_cost <= current_cost {
                    if candidate_cost < current_cost {
                        improving_moves += 1;
                    }
                    true
                } else {
                    let delta = (candidate_cost - current_cost) as f64;
                    rng.random::<f64>() < (-delta / temperature).exp()
                };

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        trace!("simulated annealing: new best {current_cost} at T={temperature:.3e}");
                        best.clone_from(&current);
                        best_cost = current_cost;
                        best_ms = budget.elapsed_ms();
                    }
                }

                temperature = config
                    .cooling
                    .cool(temperature, alpha)
                    .max(config.min_temperature);
                iterations += 1;

                if iterations % HISTORY_INTERVAL == 0 {
                    cost_history.push(best_cost);
                }
            }
        }

        if cost_history.last() != Some(&best_cost) {
            cost_history.push(best_cost);
        }

        let cancelled = budget.cancelled();
        debug!(
            "simulated annealing: best {best_cost} after {iterations} steps, final T={temperature:.3e}{}",
            if cancelled { " (cancelled)" } else { "" }
        );

        SaResult {
            result: SolverResult::heuristic(graph, best, iterations, best_ms)
                .with_final_temperature(temperature),
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        }
    }
}

impl Solver for SaConfig {
    fn name(&self) -> &'static str {
        "simulated annealing"
    }

    fn solve(&self, graph: &CostGraph) -> Option<SolverResult> {
        Some(SaRunner::run(graph, self).result)
    }
}
