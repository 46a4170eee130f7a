//! Wall-clock time budget.

use std::time::{Duration, Instant};

/// A soft wall-clock deadline started at construction.
///
/// Solvers poll [`TimeBudget::is_exhausted`] between units of work and
/// never interrupt a unit, so a run may overshoot by at most one unit.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::TimeBudget;
///
/// let budget = TimeBudget::new(Duration::from_secs(60));
/// assert!(!budget.is_exhausted());
/// assert!(budget.elapsed() < Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    /// Starts a budget of the given length now.
    pub fn new(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Starts a budget of `secs` seconds now.
    ///
    /// Negative or non-finite values yield an already exhausted budget.
    pub fn from_secs(secs: f64) -> Self {
        let limit = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        Self::new(limit)
    }

    /// Time since the budget started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The total allowance.
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Returns `true` once the allowance is used up.
    pub fn is_exhausted(&self) -> bool {
        self.elapsed() >= self.limit
    }
}
