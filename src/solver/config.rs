//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::bnb::DEFAULT_FRONTIER_LIMIT;
use crate::error::{Result, TspError};

/// Default time budget in seconds.
pub const DEFAULT_TIME_BUDGET: f64 = 60.0;

/// Heuristic used to seed branch-and-bound with an initial tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InitialBound {
    /// Nearest-neighbor walk from every start city.
    #[default]
    NearestNeighbor,
    /// Single greedy matching pass.
    GreedyMatching,
}

/// Configuration for [`TspSolver`](super::TspSolver).
///
/// # Examples
///
/// ```
/// use u_tsp::solver::{InitialBound, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_time_budget(5.0)
///     .with_seed(42)
///     .with_initial_bound(InitialBound::GreedyMatching);
/// assert!(config.validate().is_ok());
/// assert!(SolverConfig::default().with_time_budget(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Budget in seconds used by [`TspSolver::solve`](super::TspSolver::solve).
    pub time_budget: f64,

    /// Random seed for reproducible random tours.
    pub seed: Option<u64>,

    /// Heuristic that provides the initial branch-and-bound incumbent.
    pub initial_bound: InitialBound,

    /// Maximum branch-and-bound frontier entries held at once.
    pub max_frontier: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            seed: None,
            initial_bound: InitialBound::default(),
            max_frontier: DEFAULT_FRONTIER_LIMIT,
        }
    }
}

impl SolverConfig {
    pub fn with_time_budget(mut self, secs: f64) -> Self {
        self.time_budget = secs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial_bound(mut self, initial_bound: InitialBound) -> Self {
        self.initial_bound = initial_bound;
        self
    }

    pub fn with_max_frontier(mut self, max_frontier: usize) -> Self {
        self.max_frontier = max_frontier;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_time_budget(self.time_budget)?;
        if self.max_frontier < 2 {
            return Err(TspError::InvalidConfig(format!(
                "max_frontier must be at least 2, got {}",
                self.max_frontier
            )));
        }
        Ok(())
    }
}

/// Rejects budgets that are not positive finite seconds.
pub(crate) fn validate_time_budget(secs: f64) -> Result<()> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(TspError::InvalidConfig(format!(
            "time budget must be a positive number of seconds, got {secs}"
        )));
    }
    Ok(())
}
