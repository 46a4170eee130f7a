//! Tagged edge and tour cost.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// The cost of an edge or a tour: either a finite non-negative value or
/// `Unreachable` (no edge exists).
///
/// `Unreachable` absorbs in sums and compares greater than every finite cost,
/// so "no tour yet" and "infeasible tour" both lose against any real tour.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Cost;
///
/// let a = Cost::Finite(3.0);
/// let b = Cost::Finite(4.5);
/// assert_eq!(a + b, Cost::Finite(7.5));
/// assert_eq!(a + Cost::Unreachable, Cost::Unreachable);
/// assert!(Cost::Finite(1e300) < Cost::Unreachable);
/// assert_eq!(Cost::new(f64::INFINITY), Cost::Unreachable);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Cost {
    /// A reachable edge or complete tour with the given cost.
    Finite(f64),
    /// No edge exists, or the tour uses one that does not.
    Unreachable,
}

impl Cost {
    /// Zero cost.
    pub const ZERO: Cost = Cost::Finite(0.0);

    /// Converts a raw value, mapping infinities and NaN to `Unreachable`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Cost::Finite(value)
        } else {
            Cost::Unreachable
        }
    }

    /// Returns `true` for a finite cost.
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// Returns `true` for `Unreachable`.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Cost::Unreachable)
    }

    /// The finite value, if any.
    pub fn finite(&self) -> Option<f64> {
        match *self {
            Cost::Finite(v) => Some(v),
            Cost::Unreachable => None,
        }
    }

    /// The value as `f64`, with `Unreachable` as `f64::INFINITY`.
    pub fn value(&self) -> f64 {
        self.finite().unwrap_or(f64::INFINITY)
    }

    /// Subtracts a finite amount from a finite cost. `Unreachable` stays
    /// `Unreachable`.
    pub(crate) fn minus(self, amount: f64) -> Self {
        match self {
            Cost::Finite(v) => Cost::Finite(v - amount),
            Cost::Unreachable => Cost::Unreachable,
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::ZERO
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::new(a + b),
            _ => Cost::Unreachable,
        }
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        let mut total = 0.0;
        for c in iter {
            match c {
                Cost::Finite(v) => total += v,
                Cost::Unreachable => return Cost::Unreachable,
            }
        }
        Cost::new(total)
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.total_cmp(b),
            (Cost::Finite(_), Cost::Unreachable) => Ordering::Less,
            (Cost::Unreachable, Cost::Finite(_)) => Ordering::Greater,
            (Cost::Unreachable, Cost::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost::new(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{v}"),
            Cost::Unreachable => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maps_non_finite() {
        assert_eq!(Cost::new(2.0), Cost::Finite(2.0));
        assert_eq!(Cost::new(f64::INFINITY), Cost::Unreachable);
        assert_eq!(Cost::new(f64::NAN), Cost::Unreachable);
    }

    #[test]
    fn test_unreachable_absorbs() {
        assert_eq!(Cost::Unreachable + Cost::Finite(1.0), Cost::Unreachable);
        assert_eq!(Cost::Finite(1.0) + Cost::Unreachable, Cost::Unreachable);
        assert_eq!(Cost::Finite(1.0) + Cost::Finite(2.0), Cost::Finite(3.0));
    }

    #[test]
    fn test_ordering() {
        assert!(Cost::Finite(1.0) < Cost::Finite(2.0));
        assert!(Cost::Finite(f64::MAX) < Cost::Unreachable);
        assert_eq!(Cost::Unreachable, Cost::Unreachable);
        assert_eq!(
            [Cost::Unreachable, Cost::Finite(5.0), Cost::Finite(1.0)]
                .into_iter()
                .min(),
            Some(Cost::Finite(1.0))
        );
    }

    #[test]
    fn test_overflow_is_unreachable() {
        assert_eq!(Cost::Finite(f64::MAX) + Cost::Finite(f64::MAX), Cost::Unreachable);
        let total: Cost = [f64::MAX, f64::MAX].into_iter().map(Cost::Finite).sum();
        assert_eq!(total, Cost::Unreachable);
    }

    #[test]
    fn test_sum() {
        let total: Cost = [1.0, 2.0, 3.5].into_iter().map(Cost::Finite).sum();
        assert_eq!(total, Cost::Finite(6.5));
        let blocked: Cost = vec![Cost::Finite(1.0), Cost::Unreachable, Cost::Finite(2.0)]
            .into_iter()
            .sum();
        assert_eq!(blocked, Cost::Unreachable);
        let empty: Cost = std::iter::empty().sum();
        assert_eq!(empty, Cost::ZERO);
    }

    #[test]
    fn test_value_and_display() {
        assert_eq!(Cost::Unreachable.value(), f64::INFINITY);
        assert_eq!(Cost::Finite(4.0).value(), 4.0);
        assert_eq!(Cost::Unreachable.to_string(), "inf");
        assert_eq!(Cost::Finite(4.5).to_string(), "4.5");
    }

    #[test]
    fn test_minus() {
        assert_eq!(Cost::Finite(5.0).minus(2.0), Cost::Finite(3.0));
        assert_eq!(Cost::Unreachable.minus(2.0), Cost::Unreachable);
    }
}
