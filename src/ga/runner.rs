//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational cycle:
//! evaluation → roulette selection → pairwise crossover → mutation → repeat.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::{debug, trace};
use rand::Rng;

use super::config::{CrossoverOperator, GaConfig};
use super::selection::RouletteWheel;
use crate::budget::TimeBudget;
use crate::graph::{Cost, CostGraph};
use crate::operators::{order_crossover, pmx_crossover, random_reversal};
use crate::random::{random_permutation, rng_from_seed};
use crate::solver::{Solver, SolverResult};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best tour found across all generations.
    pub result: SolverResult,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best penalized cost after initialization and after each generation.
    pub fitness_history: Vec<Cost>,
}

/// Executes the GA evolutionary loop.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA until the time budget expires.
    pub fn run(graph: &CostGraph, config: &GaConfig) -> GaResult {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the best tour so far.
    /// `config` is assumed to be validated.
    pub fn run_with_cancel(
        graph: &CostGraph,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult {
        let budget = TimeBudget::start(config.time_budget_ms).with_cancel(cancel);
        let mut rng = rng_from_seed(config.seed);
        let n = graph.size();

        debug!(
            "genetic algorithm: {n} vertices, population {}, {:?} crossover, budget {} ms",
            config.population_size, config.crossover, config.time_budget_ms
        );

        // 1. Initialize and evaluate
        let mut population: Vec<Vec<usize>> = (0..config.population_size)
            .map(|_| random_permutation(n, &mut rng))
            .collect();
        let mut costs = evaluate(graph, &population, config.parallel);

        // 2. Track best
        let (mut best, mut best_cost) = fittest(&population, &costs);
        let mut best_ms = budget.elapsed_ms();
        let mut fitness_history = vec![best_cost];
        let mut generations = 0usize;

        // 3. Evolutionary loop
        while n >= 2 && !budget.should_stop() {
            generations += 1;

            let wheel = RouletteWheel::new(&costs, config.fitness_exponent);
            let mut next: Vec<Vec<usize>> = (0..population.len())
                .map(|_| population[wheel.select(&mut rng)].clone())
                .collect();

            for pair in next.chunks_exact_mut(2) {
                if rng.random::<f64>() < config.crossover_rate {
                    let (a, b) = match config.crossover {
                        CrossoverOperator::Ordered => order_crossover(&pair[0], &pair[1], &mut rng),
                        CrossoverOperator::PartiallyMapped => {
                            pmx_crossover(&pair[0], &pair[1], &mut rng)
                        }
                    };
                    pair[0] = a;
                    pair[1] = b;
                }
            }

            for tour in &mut next {
                if rng.random::<f64>() < config.mutation_rate {
                    random_reversal(tour, &mut rng);
                }
            }

            population = next;
            costs = evaluate(graph, &population, config.parallel);

            let (gen_best, gen_cost) = fittest(&population, &costs);
            if gen_cost < best_cost {
                trace!("genetic algorithm: new best {gen_cost} in generation {generations}");
                best = gen_best;
                best_cost = gen_cost;
                best_ms = budget.elapsed_ms();
            }
            fitness_history.push(best_cost);
        }

        let cancelled = budget.cancelled();
        debug!(
            "genetic algorithm: best {best_cost} after {generations} generations{}",
            if cancelled { " (cancelled)" } else { "" }
        );

        GaResult {
            result: SolverResult::heuristic(graph, best, generations, best_ms),
            generations,
            cancelled,
            fitness_history,
        }
    }
}

impl Solver for GaConfig {
    fn name(&self) -> &'static str {
        "genetic algorithm"
    }

    fn solve(&self, graph: &CostGraph) -> Option<SolverResult> {
        Some(GaRunner::run(graph, self).result)
    }
}

/// Penalized cost of every tour in the population.
fn evaluate(graph: &CostGraph, population: &[Vec<usize>], parallel: bool) -> Vec<Cost> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return population
            .par_iter()
            .map(|tour| graph.penalized_cost(tour))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .iter()
        .map(|tour| graph.penalized_cost(tour))
        .collect()
}

/// Cheapest tour of the population (first on ties) and its cost.
fn fittest(population: &[Vec<usize>], costs: &[Cost]) -> (Vec<usize>, Cost) {
    let (idx, &cost) = costs
        .iter()
        .enumerate()
        .min_by_key(|&(_, &c)| c)
        .unwrap_or((0, &0));
    (population[idx].clone(), cost)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RandomGraphConfig;
    use crate::graph::is_valid_tour;
    use crate::graph::tests::four_city_graph;

    #[test]
    fn test_four_city_optimum_both_crossovers() {
        for crossover in [CrossoverOperator::Ordered, CrossoverOperator::PartiallyMapped] {
            let config = GaConfig::default()
                .with_crossover(crossover)
                .with_population_size(30)
                .with_time_budget_ms(50)
                .with_seed(42);
            let outcome = GaRunner::run(&four_city_graph(), &config);
            assert_eq!(outcome.result.cost, 80, "{crossover:?}");
            assert!(outcome.result.feasible);
            assert!(outcome.generations > 0);
        }
    }

    #[test]
    fn test_fitness_history_non_increasing() {
        let graph = RandomGraphConfig::new(10).with_seed(4).generate().unwrap();
        let config = GaConfig::default()
            .with_population_size(40)
            .with_time_budget_ms(30)
            .with_seed(4);
        let outcome = GaRunner::run(&graph, &config);
        assert_eq!(outcome.fitness_history.len(), outcome.generations + 1);
        for window in outcome.fitness_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert_eq!(outcome.fitness_history.last(), Some(&outcome.result.cost));
        assert!(is_valid_tour(&outcome.result.tour, 10));
    }

    #[test]
    fn test_odd_population_keeps_size() {
        let config = GaConfig::default()
            .with_population_size(7)
            .with_time_budget_ms(10)
            .with_seed(1);
        let outcome = GaRunner::run(&four_city_graph(), &config);
        assert!(is_valid_tour(&outcome.result.tour, 4));
    }

    #[test]
    fn test_cancellation() {
        let cancel = Arc::new(AtomicBool::new(true));
        let config = GaConfig::default().with_time_budget_ms(60_000).with_seed(2);
        let outcome = GaRunner::run_with_cancel(&four_city_graph(), &config, Some(cancel));
        assert!(outcome.cancelled);
        assert_eq!(outcome.generations, 0);
        assert_eq!(outcome.fitness_history.len(), 1);
    }

    #[test]
    fn test_parallel_flag_gives_valid_result() {
        let graph = RandomGraphConfig::new(8).with_seed(6).generate().unwrap();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_parallel(true)
            .with_time_budget_ms(20)
            .with_seed(6);
        let result = config.solve(&graph).unwrap();
        assert!(is_valid_tour(&result.tour, 8));
        assert_eq!(graph.tour_cost(&result.tour), Some(result.cost));
    }

    #[test]
    fn test_evaluate_matches_sequential() {
        let graph = four_city_graph();
        let population = vec![vec![0, 1, 3, 2], vec![0, 1, 2, 3]];
        assert_eq!(evaluate(&graph, &population, false), vec![80, 95]);
        assert_eq!(evaluate(&graph, &population, true), vec![80, 95]);
    }

    #[test]
    fn test_fittest_prefers_first_on_ties() {
        let population = vec![vec![0, 1], vec![1, 0], vec![0, 1]];
        assert_eq!(fittest(&population, &[5, 3, 3]), (vec![1, 0], 3));
    }
}
