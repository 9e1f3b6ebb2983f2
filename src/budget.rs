//! Wall-clock budgets for the time-limited solvers.
//!
//! Budgets are cooperative: a solver asks [`TimeBudget::expired`] once per
//! outer iteration, so a run may overshoot by up to one iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A started stopwatch with a fixed limit and an optional cancel flag.
#[derive(Debug, Clone)]
pub struct TimeBudget {
    start: Instant,
    limit: Duration,
    cancel: Option<Arc<AtomicBool>>,
}

impl TimeBudget {
    /// Starts a budget of `limit_ms` milliseconds now.
    pub fn start(limit_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            limit: Duration::from_millis(limit_ms),
            cancel: None,
        }
    }

    /// Attaches an external cancellation flag.
    pub fn with_cancel(mut self, cancel: Option<Arc<AtomicBool>>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns `true` once the limit has elapsed.
    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }

    /// Returns `true` if the cancel flag has been raised.
    pub fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Returns `true` if the run should stop for either reason.
    pub fn should_stop(&self) -> bool {
        self.cancelled() || self.expired()
    }

    /// Milliseconds since the budget started.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Measures elapsed time for solvers that have no limit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stopwatch(Instant);

impl Stopwatch {
    pub(crate) fn start() -> Self {
        Self(Instant::now())
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.0.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_is_expired() {
        let budget = TimeBudget::start(0);
        assert!(budget.expired());
        assert!(budget.should_stop());
    }

    #[test]
    fn test_generous_budget_not_expired() {
        let budget = TimeBudget::start(60_000);
        assert!(!budget.expired());
        assert!(!budget.cancelled());
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let budget = TimeBudget::start(60_000).with_cancel(Some(flag.clone()));
        assert!(!budget.should_stop());
        flag.store(true, Ordering::Relaxed);
        assert!(budget.should_stop());
    }
}
