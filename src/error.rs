//! Error types for graph loading and configuration validation.
//!
//! Solvers themselves never return errors: exact solvers report an
//! infeasible graph as `None`, and metaheuristics always return the best
//! tour they found.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised at the boundary of the solver engine.
#[derive(Error, Debug)]
pub enum TspError {
    /// The underlying file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input text does not follow the expected graph format.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number where the problem was detected.
        line: usize,
        /// Human-readable description.
        message: String,
    },

    /// The weight matrix is structurally invalid (wrong shape, empty).
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A solver or generator configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TspError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        TspError::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        TspError::InvalidConfig(message.into())
    }
}
