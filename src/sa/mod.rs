//! Simulated Annealing (SA).
//!
//! A single-tour trajectory search. Starting from a nearest-neighbor tour,
//! each step reverses a random segment and accepts the result by the
//! Metropolis criterion: improvements always, a worsening of `Δ` with
//! probability `exp(-Δ / T)`. The temperature follows a
//! [`CoolingSchedule`] and never drops below the configured floor.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner, HISTORY_INTERVAL};
