//! Uniform solver contract and result type.
//!
//! Every algorithm implements [`Solver`] independently. [`Algorithm`] is a
//! plain configuration value that builds the matching boxed solver, so a
//! caller can pick an algorithm at runtime without knowing its concrete type.

use crate::bnb::{BranchAndBoundBestFirst, BranchAndBoundDepthFirst};
use crate::error::{Result, TspError};
use crate::exact::{BruteForce, HeldKarp};
use crate::ga::GaConfig;
use crate::graph::{Cost, CostGraph};
use crate::sa::SaConfig;
use crate::tabu::TabuConfig;

/// Outcome of a solver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// Total cost of the closed tour.
    ///
    /// For an infeasible metaheuristic result this is the penalized cost.
    pub cost: Cost,

    /// Vertex visiting order; the return to `tour[0]` is implied.
    pub tour: Vec<usize>,

    /// Wall-clock milliseconds from the start of the run until the reported
    /// tour was found.
    pub time_to_best_ms: f64,

    /// Algorithm-specific work counter: permutations, expanded nodes,
    /// DP states, annealing steps, tabu iterations or GA generations.
    pub iterations: usize,

    /// Temperature when annealing stopped; `None` for other algorithms.
    pub final_temperature: Option<f64>,

    /// `false` if the tour uses at least one missing edge.
    pub feasible: bool,
}

impl SolverResult {
    /// Result of an exact solver: always feasible and optimal.
    pub fn exact(cost: Cost, tour: Vec<usize>, iterations: usize, time_to_best_ms: f64) -> Self {
        Self {
            cost,
            tour,
            time_to_best_ms,
            iterations,
            final_temperature: None,
            feasible: true,
        }
    }

    /// Result of a metaheuristic, scored against `graph`.
    ///
    /// `cost` is the true tour cost when every edge exists, and the
    /// penalized cost otherwise.
    pub fn heuristic(
        graph: &CostGraph,
        tour: Vec<usize>,
        iterations: usize,
        time_to_best_ms: f64,
    ) -> Self {
        let (cost, feasible) = match graph.tour_cost(&tour) {
            Some(cost) => (cost, true),
            None => (graph.penalized_cost(&tour), false),
        };
        Self {
            cost,
            tour,
            time_to_best_ms,
            iterations,
            final_temperature: None,
            feasible,
        }
    }

    /// Sets [`final_temperature`](Self::final_temperature).
    pub fn with_final_temperature(mut self, temperature: f64) -> Self {
        self.final_temperature = Some(temperature);
        self
    }
}

/// A TSP algorithm.
///
/// Exact solvers return `None` when the graph has no Hamiltonian cycle.
/// Metaheuristics always return `Some`, flagging infeasible tours through
/// [`SolverResult::feasible`].
pub trait Solver {
    /// Short human-readable algorithm name.
    fn name(&self) -> &'static str;

    /// Solves `graph` and returns the best tour found.
    fn solve(&self, graph: &CostGraph) -> Option<SolverResult>;
}

/// Runtime selection of an algorithm and its configuration.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::CostGraph;
/// use u_tsp::solver::Algorithm;
///
/// let graph = CostGraph::from_rows(&[
///     vec![-1, 10, 15, 20],
///     vec![10, -1, 35, 25],
///     vec![15, 35, -1, 30],
///     vec![20, 25, 30, -1],
/// ])
/// .unwrap();
///
/// let algorithm = Algorithm::HeldKarp(Default::default());
/// algorithm.validate(&graph).unwrap();
/// let result = algorithm.solver().solve(&graph).unwrap();
/// assert_eq!(result.cost, 80);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BruteForce(BruteForce),
    BranchAndBoundBestFirst(BranchAndBoundBestFirst),
    BranchAndBoundDepthFirst(BranchAndBoundDepthFirst),
    HeldKarp(HeldKarp),
    SimulatedAnnealing(SaConfig),
    TabuSearch(TabuConfig),
    Genetic(GaConfig),
}

impl Algorithm {
    /// Builds the solver this value describes.
    pub fn solver(&self) -> Box<dyn Solver> {
        match self {
            Algorithm::BruteForce(s) => Box::new(*s),
            Algorithm::BranchAndBoundBestFirst(s) => Box::new(*s),
            Algorithm::BranchAndBoundDepthFirst(s) => Box::new(*s),
            Algorithm::HeldKarp(s) => Box::new(*s),
            Algorithm::SimulatedAnnealing(c) => Box::new(c.clone()),
            Algorithm::TabuSearch(c) => Box::new(c.clone()),
            Algorithm::Genetic(c) => Box::new(c.clone()),
        }
    }

    /// Checks the configuration against `graph` before a run.
    pub fn validate(&self, graph: &CostGraph) -> Result<()> {
        let n = graph.size();
        let start = match self {
            Algorithm::BruteForce(s) => Some(s.start),
            Algorithm::BranchAndBoundBestFirst(s) => Some(s.start),
            Algorithm::BranchAndBoundDepthFirst(s) => Some(s.start),
            Algorithm::HeldKarp(s) => {
                if n > HeldKarp::MAX_VERTICES {
                    return Err(TspError::config(format!(
                        "held-karp supports at most {} vertices, got {n}",
                        HeldKarp::MAX_VERTICES
                    )));
                }
                Some(s.start)
            }
            Algorithm::SimulatedAnnealing(c) => {
                c.validate()?;
                None
            }
            Algorithm::TabuSearch(c) => {
                c.validate()?;
                None
            }
            Algorithm::Genetic(c) => {
                c.validate()?;
                None
            }
        };
        match start {
            Some(start) if start >= n => Err(TspError::config(format!(
                "start vertex {start} out of range for {n} vertices"
            ))),
            _ => Ok(()),
        }
    }
}
