//! Tabu Search configuration.

use crate::error::{Result, TspError};

/// Neighborhood scanned at every iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOperator {
    /// Exchange the vertices at two positions.
    VertexSwap,
    /// Reverse the segment between two positions (2-opt).
    #[default]
    EdgeReversal,
    /// Remove the vertex at one position and reinsert it at another.
    Insertion,
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::{MoveOperator, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_move_operator(MoveOperator::VertexSwap)
///     .with_tabu_list_size(7)
///     .with_stagnation_limit(50)
///     .with_time_budget_ms(200);
/// assert_eq!(config.tabu_list_size, Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Move neighborhood.
    pub move_operator: MoveOperator,
    /// Wall-clock budget in milliseconds.
    pub time_budget_ms: u64,
    /// Tabu list capacity. `None` uses half the vertex count.
    pub tabu_list_size: Option<usize>,
    /// Iterations without a new global best before restarting.
    pub stagnation_limit: usize,
    /// Whether a tabu move may be taken when it yields a new global best.
    pub aspiration: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            move_operator: MoveOperator::default(),
            time_budget_ms: 1_000,
            tabu_list_size: None,
            stagnation_limit: 100,
            aspiration: true,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the move neighborhood.
    pub fn with_move_operator(mut self, op: MoveOperator) -> Self {
        self.move_operator = op;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    /// Sets a fixed tabu list capacity.
    pub fn with_tabu_list_size(mut self, size: usize) -> Self {
        self.tabu_list_size = Some(size);
        self
    }

    /// Sets the number of non-improving iterations before a restart.
    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tabu list capacity for a graph of `n` vertices.
    pub fn list_size_for(&self, n: usize) -> usize {
        self.tabu_list_size.unwrap_or(n / 2).max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.time_budget_ms == 0 {
            return Err(TspError::config("time_budget_ms must be at least 1"));
        }
        if self.tabu_list_size == Some(0) {
            return Err(TspError::config("tabu_list_size must be at least 1"));
        }
        if self.stagnation_limit == 0 {
            return Err(TspError::config("stagnation_limit must be at least 1"));
        }
        Ok(())
    }
}
