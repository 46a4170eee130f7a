//! Cost models.
//!
//! Provides the [`CostModel`] trait consumed by every solver and a dense
//! [`CostMatrix`] implementation.

mod matrix;

pub use matrix::CostMatrix;

use crate::models::Cost;

/// Directed cost between two cities of a scenario.
///
/// Costs may be asymmetric and need not satisfy the triangle inequality.
/// Implementations must be pure: repeated calls with the same arguments
/// return the same value.
pub trait CostModel {
    /// Number of cities addressed by this model.
    fn num_cities(&self) -> usize;

    /// Cost of travelling from `from` to `to`, or `Cost::Unreachable`.
    fn cost(&self, from: usize, to: usize) -> Cost;
}

impl<C: CostModel + ?Sized> CostModel for &C {
    fn num_cities(&self) -> usize {
        (**self).num_cities()
    }

    fn cost(&self, from: usize, to: usize) -> Cost {
        (**self).cost(from, to)
    }
}
