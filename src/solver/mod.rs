//! Solver engine and configuration.

mod config;
mod engine;

pub use config::{InitialBound, SolverConfig, DEFAULT_TIME_BUDGET};
pub use engine::TspSolver;
