//! Domain model types for the traveling salesman problem.
//!
//! Provides the tagged [`Cost`], cities, immutable scenarios that own the
//! cost matrix, and tours as validated permutations with a cached cost.

mod city;
mod cost;
mod scenario;
mod tour;

pub use city::City;
pub use cost::Cost;
pub use scenario::Scenario;
pub use tour::Tour;
