//! Genetic Algorithm (GA) over tour permutations.
//!
//! The population starts as uniformly random permutations. Each generation
//! draws a full population by roulette wheel on the fitness `1 / cost^p`,
//! crosses successive pairs with OX or PMX at the crossover rate, and
//! mutates individuals by reversing a random segment at the mutation rate.
//! The best tour across all generations is reported.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, exponent)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour with run statistics
//! - [`RouletteWheel`]: Cumulative fitness-proportionate selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
mod runner;
mod selection;

pub use config::{CrossoverOperator, GaConfig};
pub use runner::{GaResult, GaRunner};
pub use selection::{fitness, RouletteWheel};
