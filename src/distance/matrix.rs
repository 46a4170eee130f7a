//! Dense cost matrix.

use super::CostModel;
use crate::error::{Result, TspError};
use crate::models::{City, Cost};

/// A dense n×n cost matrix stored in row-major order.
///
/// Entries may be asymmetric and may be [`Cost::Unreachable`] to forbid an
/// edge.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Cost};
/// use u_tsp::distance::{CostMatrix, CostModel};
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 6.0, 8.0),
/// ];
/// let mut cm = CostMatrix::from_cities(&cities);
/// assert_eq!(cm.cost(0, 1), Cost::Finite(5.0));
/// cm.forbid(1, 2);
/// assert_eq!(cm.cost(1, 2), Cost::Unreachable);
/// assert_eq!(cm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<Cost>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with every edge unreachable.
    pub fn unreachable(size: usize) -> Self {
        Self {
            data: vec![Cost::Unreachable; size * size],
            size,
        }
    }

    /// Computes a symmetric Euclidean cost matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut cm = Self::unreachable(n);
        for i in 0..n {
            cm.set(i, i, Cost::ZERO);
            for j in (i + 1)..n {
                let d = Cost::new(cities[i].distance_to(&cities[j]));
                cm.set(i, j, d);
                cm.set(j, i, d);
            }
        }
        cm
    }

    /// Builds a matrix from explicit rows, `f64::INFINITY` marking a missing
    /// edge.
    ///
    /// Rejects non-square input and negative or NaN entries.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TspError::MalformedScenario(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &v) in row.iter().enumerate() {
                if v.is_nan() || v < 0.0 {
                    return Err(TspError::MalformedScenario(format!(
                        "cost ({i}, {j}) = {v} is not a non-negative value"
                    )));
                }
                data.push(Cost::new(v));
            }
        }
        Ok(Self { data, size: n })
    }

    /// Samples every pair of an arbitrary cost model into a dense matrix.
    ///
    /// Non-finite values reported as `Finite` are stored as `Unreachable`.
    pub fn from_model<C: CostModel + ?Sized>(model: &C) -> Self {
        let n = model.num_cities();
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(normalize(model.cost(i, j)));
            }
        }
        Self { data, size: n }
    }

    /// Checks that every finite entry is a non-negative number.
    pub fn validate(&self) -> Result<()> {
        for (idx, cost) in self.data.iter().enumerate() {
            if let Cost::Finite(v) = *cost {
                if !v.is_finite() || v < 0.0 {
                    return Err(TspError::MalformedScenario(format!(
                        "cost ({}, {}) = {v} is not a non-negative value",
                        idx / self.size,
                        idx % self.size
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.data[from * self.size + to]
    }

    /// Sets the cost from `from` to `to`. A non-finite `Finite` value is
    /// stored as `Unreachable`.
    pub fn set(&mut self, from: usize, to: usize, cost: Cost) {
        self.data[from * self.size + to] = normalize(cost);
    }

    /// Removes the directed edge `from → to`.
    pub fn forbid(&mut self, from: usize, to: usize) {
        self.set(from, to, Cost::Unreachable);
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Unreachable entries must be mirrored by unreachable entries.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                match (self.get(i, j), self.get(j, i)) {
                    (Cost::Finite(a), Cost::Finite(b)) if (a - b).abs() <= tol => {}
                    (Cost::Unreachable, Cost::Unreachable) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

fn normalize(cost: Cost) -> Cost {
    match cost {
        Cost::Finite(v) => Cost::new(v),
        Cost::Unreachable => Cost::Unreachable,
    }
}

impl CostModel for CostMatrix {
    fn num_cities(&self) -> usize {
        self.size
    }

    fn cost(&self, from: usize, to: usize) -> Cost {
        self.get(from, to)
    }
}
