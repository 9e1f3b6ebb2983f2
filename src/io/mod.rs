//! Graph file formats.
//!
//! - [`plain`]: vertex count followed by the full matrix
//! - [`atsp`]: TSPLIB-style explicit full matrix

pub mod atsp;
pub mod plain;

pub use atsp::{parse_atsp, read_atsp, AtspInstance};
pub use plain::{parse_plain, read_plain, write_plain};
