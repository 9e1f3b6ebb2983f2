//! SA configuration and cooling schedules.

use crate::error::{Result, TspError};

/// Cooling schedule applied after every annealing step.
///
/// Each schedule is parameterized by a single modifier `α`; when
/// [`SaConfig::temp_modifier`] is `None` the schedule's own default is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// `T ← α·T`. Default `α = 0.999995`.
    #[default]
    Geometric,

    /// `T ← T − (1 − α)`. Default `α = 0.99`.
    Linear,

    /// `T ← T / (1 + α·T)`. Default `α = 1e-7`.
    ///
    /// Cools fast at high temperature and slowly near the floor.
    ///
    /// Reference: Lundy & Mees (1986)
    SlowDecrease,
}

impl CoolingSchedule {
    /// Modifier used when none is configured.
    pub fn default_modifier(self) -> f64 {
        match self {
            CoolingSchedule::Geometric => 0.999_995,
            CoolingSchedule::Linear => 0.99,
            CoolingSchedule::SlowDecrease => 1e-7,
        }
    }

    /// Next temperature, before the floor is applied.
    pub fn cool(self, temperature: f64, modifier: f64) -> f64 {
        match self {
            CoolingSchedule::Geometric => temperature * modifier,
            CoolingSchedule::Linear => temperature - (1.0 - modifier),
            CoolingSchedule::SlowDecrease => temperature / (1.0 + modifier * temperature),
        }
    }
}

/// Configuration for simulated annealing.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_cooling(CoolingSchedule::SlowDecrease)
///     .with_temp_modifier(1e-6)
///     .with_time_budget_ms(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Overrides the schedule's default modifier.
    pub temp_modifier: Option<f64>,

    /// Wall-clock budget in milliseconds.
    pub time_budget_ms: u64,

    /// Starting temperature.
    pub initial_temperature: f64,

    /// Floor the temperature never drops below.
    pub min_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            cooling: CoolingSchedule::default(),
            temp_modifier: None,
            time_budget_ms: 1_000,
            initial_temperature: 1e6,
            min_temperature: 1e-15,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_temp_modifier(mut self, modifier: f64) -> Self {
        self.temp_modifier = Some(modifier);
        self
    }

    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The modifier in effect: the configured one or the schedule default.
    pub fn modifier(&self) -> f64 {
        self.temp_modifier
            .unwrap_or_else(|| self.cooling.default_modifier())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(TspError::config("initial_temperature must be positive and finite"));
        }
        if !(self.min_temperature > 0.0) {
            return Err(TspError::config("min_temperature must be positive"));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(TspError::config(
                "min_temperature must be less than initial_temperature",
            ));
        }
        if self.time_budget_ms == 0 {
            return Err(TspError::config("time_budget_ms must be at least 1"));
        }

        let alpha = self.modifier();
        match self.cooling {
            CoolingSchedule::Geometric | CoolingSchedule::Linear => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(TspError::config(format!(
                        "{:?} modifier must be in (0, 1), got {alpha}",
                        self.cooling
                    )));
                }
            }
            CoolingSchedule::SlowDecrease => {
                if !(alpha > 0.0 && alpha.is_finite()) {
                    return Err(TspError::config(format!(
                        "SlowDecrease modifier must be positive, got {alpha}"
                    )));
                }
            }
        }
        Ok(())
    }
}
