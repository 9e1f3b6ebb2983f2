//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Result, TspError};

/// Crossover operator applied to each pair of selected parents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverOperator {
    /// Order crossover (OX).
    #[default]
    Ordered,
    /// Partially mapped crossover (PMX).
    PartiallyMapped,
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.fitness_exponent, 4.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::{CrossoverOperator, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover(CrossoverOperator::PartiallyMapped)
///     .with_mutation_rate(0.2)
///     .with_time_budget_ms(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Crossover operator.
    pub crossover: CrossoverOperator,

    /// Number of tours in the population.
    pub population_size: usize,

    /// Probability of crossing a pair of parents (0.0–1.0).
    ///
    /// Pairs that are not crossed pass to the next generation unchanged.
    pub crossover_rate: f64,

    /// Probability of mutating an individual (0.0–1.0).
    pub mutation_rate: f64,

    /// Wall-clock budget in milliseconds.
    ///
    /// Checked at the start of each generation, so the run may exceed it by
    /// one generation's worth of work.
    pub time_budget_ms: u64,

    /// Exponent `p` in the fitness `1 / cost^p`.
    pub fitness_exponent: f64,

    /// Whether to evaluate tours in parallel using rayon.
    ///
    /// Has no effect unless the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            crossover: CrossoverOperator::default(),
            population_size: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            time_budget_ms: 1_000,
            fitness_exponent: 4.0,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: CrossoverOperator) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    /// Sets the fitness exponent.
    pub fn with_fitness_exponent(mut self, exponent: f64) -> Self {
        self.fitness_exponent = exponent;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(TspError::config(format!(
                "population_size must be >= 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(TspError::config(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(self.fitness_exponent > 0.0 && self.fitness_exponent.is_finite()) {
            return Err(TspError::config(format!(
                "fitness_exponent must be positive and finite, got {}",
                self.fitness_exponent
            )));
        }
        if self.time_budget_ms == 0 {
            return Err(TspError::config("time_budget_ms must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.crossover, CrossoverOperator::Ordered);
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_fitness_exponent(2.0)
            .with_parallel(true)
            .with_seed(42);
        assert_eq!(config.population_size, 50);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.fitness_exponent - 2.0).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rates() {
        assert!(GaConfig::default().with_crossover_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(-0.1).validate().is_err());
        assert!(GaConfig::default().with_crossover_rate(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_exponent_and_budget() {
        assert!(GaConfig::default().with_fitness_exponent(0.0).validate().is_err());
        assert!(GaConfig::default()
            .with_fitness_exponent(f64::NAN)
            .validate()
            .is_err());
        assert!(GaConfig::default().with_time_budget_ms(0).validate().is_err());
    }
}
