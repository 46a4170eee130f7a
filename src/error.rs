//! Error types.

use thiserror::Error;

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised by scenario construction and the solver engine.
///
/// An infeasible scenario is not an error: solvers report
/// [`Cost::Unreachable`](crate::models::Cost::Unreachable) with no solution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// A solve method was called before a scenario was configured.
    #[error("no scenario bound: call configure() before solving")]
    NoScenarioBound,

    /// The scenario cannot be used (no cities, mismatched or invalid costs).
    #[error("malformed scenario: {0}")]
    MalformedScenario(String),

    /// A solver setting is out of range.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}
