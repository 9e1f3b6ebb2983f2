//! Tabu Search (TS).
//!
//! A single-tour trajectory search that takes the best move of a full
//! neighborhood scan each iteration, even when it worsens the tour, and
//! forbids recently applied moves through a bounded FIFO tabu list so the
//! search does not cycle back into the same local optimum.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;

pub use config::{MoveOperator, TabuConfig};
pub use list::TabuList;
pub use runner::{TabuMove, TabuResult, TabuRunner};
