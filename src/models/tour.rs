//! Tour type.

use serde::Serialize;

use super::Cost;
use crate::distance::CostModel;

/// A closed tour: a permutation of all city indices, read as a cycle.
///
/// The cost is computed once when the tour is built. Tours are immutable,
/// so the cached cost always matches the route.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Cost, Tour};
/// use u_tsp::distance::CostMatrix;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 1.0, 9.0],
///     vec![9.0, 0.0, 2.0],
///     vec![3.0, 9.0, 0.0],
/// ]).unwrap();
/// let tour = Tour::new(vec![0, 1, 2], &cm).unwrap();
/// assert_eq!(tour.cost(), Cost::Finite(6.0));
/// assert!(Tour::new(vec![0, 0, 2], &cm).is_none());
/// ```
///
/// Tours serialize for reporting but cannot be deserialized: a route only
/// becomes a tour through [`Tour::new`], which checks it against a cost
/// model and computes the cost itself.
///
/// ```compile_fail
/// use u_tsp::models::Tour;
///
/// let json = r#"{"route":[0,0,5],"cost":{"Finite":1.0}}"#;
/// let _tour: Tour = serde_json::from_str(json).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    route: Vec<usize>,
    cost: Cost,
}

impl Tour {
    /// Builds a tour from a route.
    ///
    /// Returns `None` unless `route` is a permutation of `0..costs.num_cities()`.
    pub fn new<C: CostModel + ?Sized>(route: Vec<usize>, costs: &C) -> Option<Self> {
        let n = costs.num_cities();
        if route.len() != n {
            return None;
        }
        let mut seen = vec![false; n];
        for &c in &route {
            if c >= n || seen[c] {
                return None;
            }
            seen[c] = true;
        }
        Some(Self::from_route(route, costs))
    }

    /// Builds a tour from a route already known to be a permutation.
    pub(crate) fn from_route<C: CostModel + ?Sized>(route: Vec<usize>, costs: &C) -> Self {
        let cost = route_cost(&route, costs);
        Self { route, cost }
    }

    /// City indices in visiting order.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Total cost of the closed cycle.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns `true` if every edge of the cycle exists.
    pub fn is_valid(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    /// Returns `true` for a tour over zero cities.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

/// Sum of `route[k] → route[k+1]` plus the closing edge, stopping at the
/// first unreachable edge. A route of fewer than two cities has no edges.
pub(crate) fn route_cost<C: CostModel + ?Sized>(route: &[usize], costs: &C) -> Cost {
    if route.len() < 2 {
        return Cost::ZERO;
    }
    let closing = std::iter::once((route[route.len() - 1], route[0]));
    route
        .windows(2)
        .map(|w| (w[0], w[1]))
        .chain(closing)
        .map(|(a, b)| costs.cost(a, b))
        .sum()
}
