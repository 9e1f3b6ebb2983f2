//! Random complete graphs for benchmarking and testing.

use log::debug;
use rand::Rng;

use crate::error::{Result, TspError};
use crate::graph::{Cost, CostGraph};
use crate::random::rng_from_seed;

/// Parameters of a random complete graph.
///
/// Every off-diagonal weight is drawn uniformly from
/// `min_weight..max_weight` (upper bound exclusive).
///
/// # Examples
///
/// ```
/// use u_tsp::generator::RandomGraphConfig;
///
/// let graph = RandomGraphConfig::new(6)
///     .with_symmetric(true)
///     .with_weight_range(10, 20)
///     .with_seed(7)
///     .generate()
///     .unwrap();
/// assert_eq!(graph.size(), 6);
/// assert!(graph.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub size: usize,
    /// Whether `w(i, j) == w(j, i)`.
    pub symmetric: bool,
    /// Smallest weight (inclusive).
    pub min_weight: Cost,
    /// Largest weight (exclusive).
    pub max_weight: Cost,
    /// Random seed; `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl RandomGraphConfig {
    /// Symmetric graph of `size` vertices with weights in `1..100`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            symmetric: true,
            min_weight: 1,
            max_weight: 100,
            seed: None,
        }
    }

    pub fn with_symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    pub fn with_weight_range(mut self, min: Cost, max: Cost) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(TspError::config("size must be at least 1"));
        }
        if self.size.checked_mul(self.size).is_none() {
            return Err(TspError::config(format!("size {} is too large", self.size)));
        }
        if self.min_weight >= self.max_weight {
            return Err(TspError::config(format!(
                "weight range {}..{} is empty",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }

    /// Draws a graph.
    pub fn generate(&self) -> Result<CostGraph> {
        self.validate()?;
        let n = self.size;
        let mut rng = rng_from_seed(self.seed);
        let mut weights: Vec<Option<Cost>> = vec![None; n * n];

        for i in 0..n {
            let first = if self.symmetric { i + 1 } else { 0 };
            for j in first..n {
                if i == j {
                    continue;
                }
                let w = rng.random_range(self.min_weight..self.max_weight);
                weights[i * n + j] = Some(w);
                if self.symmetric {
                    weights[j * n + i] = Some(w);
                }
            }
        }

        debug!(
            "generated {} graph: {n} vertices, weights {}..{}",
            if self.symmetric { "symmetric" } else { "asymmetric" },
            self.min_weight,
            self.max_weight
        );
        CostGraph::new(n, weights)
    }
}
