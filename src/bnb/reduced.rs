//! Reduced cost matrix.
//!
//! Subtracting each row's minimum and then each column's minimum from a
//! cost matrix leaves every completion's cost unchanged up to the total
//! subtracted, so that total is an admissible lower bound.

use crate::distance::CostModel;
use crate::models::Cost;

/// A dense n×n matrix of reduced costs owned by one search state.
#[derive(Debug, Clone)]
pub(crate) struct ReducedMatrix {
    data: Vec<Cost>,
    size: usize,
}

impl ReducedMatrix {
    /// Copies the scenario costs with self-loops forbidden.
    pub(crate) fn from_model<C: CostModel + ?Sized>(costs: &C) -> Self {
        let n = costs.num_cities();
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(if i == j { Cost::Unreachable } else { costs.cost(i, j) });
            }
        }
        Self { data, size: n }
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> Cost {
        self.data[row * self.size + col]
    }

    pub(crate) fn forbid(&mut self, row: usize, col: usize) {
        self.data[row * self.size + col] = Cost::Unreachable;
    }

    pub(crate) fn forbid_row(&mut self, row: usize) {
        let start = row * self.size;
        self.data[start..start + self.size].fill(Cost::Unreachable);
    }

    pub(crate) fn forbid_col(&mut self, col: usize) {
        for row in 0..self.size {
            self.forbid(row, col);
        }
    }

    /// Reduces `rows`, then `cols`, so each has a zero entry. Returns the
    /// total subtracted, or `Unreachable` if one of them has no finite
    /// entry left (no completion exists).
    pub(crate) fn reduce(&mut self, rows: &[usize], cols: &[usize]) -> Cost {
        let mut total = 0.0;

        for &r in rows {
            let row_min = (0..self.size).map(|c| self.get(r, c)).min();
            let Some(Cost::Finite(min)) = row_min else {
                return Cost::Unreachable;
            };
            if min != 0.0 {
                let start = r * self.size;
                for entry in &mut self.data[start..start + self.size] {
                    *entry = entry.minus(min);
                }
                total += min;
            }
        }

        for &c in cols {
            let col_min = (0..self.size).map(|r| self.get(r, c)).min();
            let Some(Cost::Finite(min)) = col_min else {
                return Cost::Unreachable;
            };
            if min != 0.0 {
                for r in 0..self.size {
                    let idx = r * self.size + c;
                    self.data[idx] = self.data[idx].minus(min);
                }
                total += min;
            }
        }

        Cost::Finite(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CostMatrix;

    const INF: f64 = f64::INFINITY;

    fn classic() -> CostMatrix {
        // Standard 4-city textbook instance.
        CostMatrix::from_rows(&[
            vec![INF, 10.0, 15.0, 20.0],
            vec![5.0, INF, 9.0, 10.0],
            vec![6.0, 13.0, INF, 12.0],
            vec![8.0, 8.0, 9.0, INF],
        ])
        .expect("valid")
    }

    #[test]
    fn test_root_reduction() {
        let mut m = ReducedMatrix::from_model(&classic());
        let all: Vec<usize> = (0..4).collect();
        // Row minima 10 + 5 + 6 + 8 = 29; then column 2 has min 1 and
        // column 3 has min 5 (the others already contain a zero).
        assert_eq!(m.reduce(&all, &all), Cost::Finite(35.0));
        for r in 0..4 {
            assert!((0..4).any(|c| m.get(r, c) == Cost::ZERO));
        }
        for c in 0..4 {
            assert!((0..4).any(|r| m.get(r, c) == Cost::ZERO));
        }
    }

    #[test]
    fn test_diagonal_forbidden() {
        let cities = vec![
            crate::models::City::new(0, 0.0, 0.0),
            crate::models::City::new(1, 1.0, 0.0),
        ];
        let m = ReducedMatrix::from_model(&CostMatrix::from_cities(&cities));
        assert_eq!(m.get(0, 0), Cost::Unreachable);
        assert_eq!(m.get(1, 1), Cost::Unreachable);
        assert_eq!(m.get(0, 1), Cost::Finite(1.0));
    }

    #[test]
    fn test_empty_row_is_infeasible() {
        let cm = CostMatrix::from_rows(&[
            vec![0.0, 1.0, 1.0],
            vec![INF, 0.0, INF],
            vec![1.0, 1.0, 0.0],
        ])
        .expect("valid");
        let mut m = ReducedMatrix::from_model(&cm);
        assert_eq!(m.reduce(&[0, 1, 2], &[0, 1, 2]), Cost::Unreachable);
    }

    #[test]
    fn test_forbid_row_and_col() {
        let mut m = ReducedMatrix::from_model(&classic());
        m.forbid_row(1);
        m.forbid_col(2);
        assert!((0..4).all(|c| m.get(1, c).is_unreachable()));
        assert!((0..4).all(|r| m.get(r, 2).is_unreachable()));
        assert_eq!(m.get(0, 1), Cost::Finite(10.0));
    }
}
