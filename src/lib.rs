//! Traveling Salesman Problem solvers over dense weighted graphs.
//!
//! All solvers share one immutable [`graph::CostGraph`] and return a uniform
//! [`solver::SolverResult`]:
//!
//! - **Exact**: [`exact::BruteForce`], [`exact::HeldKarp`],
//!   and branch-and-bound over reduced cost matrices in best-first
//!   ([`bnb::BranchAndBoundBestFirst`]) and depth-first
//!   ([`bnb::BranchAndBoundDepthFirst`]) order.
//! - **Metaheuristics**: Simulated Annealing ([`sa`]), Tabu Search
//!   ([`tabu`]) and a Genetic Algorithm ([`ga`]), each bounded by a
//!   wall-clock budget and an optional cancel flag.
//!
//! Graphs may be directed and incomplete: a missing edge is `None`, never a
//! numeric sentinel. Exact solvers return `None` when no Hamiltonian cycle
//! exists; metaheuristics charge missing edges a penalty larger than any
//! feasible tour and flag infeasible results.
//!
//! # Example
//!
//! ```
//! use u_tsp::bnb::BranchAndBoundBestFirst;
//! use u_tsp::graph::CostGraph;
//! use u_tsp::solver::Solver;
//!
//! let graph = CostGraph::from_rows(&[
//!     vec![-1, 10, 15, 20],
//!     vec![10, -1, 35, 25],
//!     vec![15, 35, -1, 30],
//!     vec![20, 25, 30, -1],
//! ])
//! .unwrap();
//!
//! let result = BranchAndBoundBestFirst::new(0).solve(&graph).unwrap();
//! assert_eq!(result.cost, 80);
//! ```

pub mod bnb;
pub mod budget;
pub mod construct;
pub mod error;
pub mod exact;
pub mod ga;
pub mod generator;
pub mod graph;
pub mod io;
pub mod operators;
pub mod random;
pub mod sa;
pub mod solver;
pub mod tabu;

pub use error::{Result, TspError};
pub use graph::{Cost, CostGraph};
pub use solver::{Algorithm, Solver, SolverResult};
