//! # u-tsp
//!
//! Traveling salesman solver for asymmetric, possibly incomplete cost
//! models: anytime construction heuristics and an exact best-first
//! branch-and-bound search under a wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Cost, City, Scenario, Tour)
//! - [`distance`]: Cost model trait and dense cost matrix
//! - [`constructive`]: Random, greedy matching, nearest-neighbor, cheapest insertion
//! - [`bnb`]: Branch-and-bound with reduced-cost lower bounds
//! - [`report`]: Result contract and reporter
//! - [`solver`]: Engine binding a scenario to the solve entry points

pub mod bnb;
pub mod constructive;
pub mod distance;
pub mod models;
pub mod report;
pub mod solver;

mod budget;
mod error;

pub use budget::TimeBudget;
pub use error::{Result, TspError};
pub use solver::{InitialBound, SolverConfig, TspSolver};
