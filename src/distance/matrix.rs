//! Dense integer cost matrix.

use crate::error::{Error, Result};

/// A dense n×n arc cost matrix stored in row-major order.
///
/// Costs are non-negative integers (meters, seconds, or any uniform cost
/// unit). The matrix is immutable for the duration of a solve.
///
/// # Examples
///
/// ```
/// use span_routing::distance::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 20],
///     vec![15, 20, 0],
/// ]).expect("square matrix");
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.arc(0, 2), 15);
/// assert_eq!(matrix.route_cost(&[1, 2], 0), 45);
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<i64>,
    size: usize,
}

impl CostMatrix {
    /// Builds a matrix from nested rows, validating squareness and
    /// non-negative entries.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::InvalidInput(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            for (j, cost) in row.into_iter().enumerate() {
                if cost < 0 {
                    return Err(Error::InvalidInput(format!(
                        "negative cost {cost} at ({i}, {j})"
                    )));
                }
                data.push(cost);
            }
        }
        Ok(Self { data, size })
    }

    /// Builds a matrix from a flat row-major buffer.
    pub fn from_data(size: usize, data: Vec<i64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::InvalidInput(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        if let Some(&cost) = data.iter().find(|&&c| c < 0) {
            return Err(Error::InvalidInput(format!("negative cost {cost}")));
        }
        Ok(Self { data, size })
    }

    /// Returns the arc cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds. Use [`try_arc`](Self::try_arc)
    /// for checked access.
    pub fn arc(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Returns the arc cost, or [`Error::IndexOutOfRange`] if either index
    /// falls outside `[0, size)`.
    pub fn try_arc(&self, from: usize, to: usize) -> Result<i64> {
        for index in [from, to] {
            if index >= self.size {
                return Err(Error::IndexOutOfRange {
                    index,
                    size: self.size,
                });
            }
        }
        Ok(self.arc(from, to))
    }

    /// Number of nodes covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cost of `depot → nodes[0] → ... → nodes[last] → depot`.
    ///
    /// Recomputed from consecutive arc costs; both depot legs included.
    pub fn route_cost(&self, nodes: &[usize], depot: usize) -> i64 {
        if nodes.is_empty() {
            return 0;
        }
        let mut cost = self.arc(depot, nodes[0]);
        for w in nodes.windows(2) {
            cost += self.arc(w[0], w[1]);
        }
        cost + self.arc(nodes[nodes.len() - 1], depot)
    }

    /// Cumulative distance at each stop of the route, ending with the
    /// return to the depot.
    ///
    /// The result has `nodes.len() + 1` entries: the running total after
    /// arriving at each node, then after the final depot leg. These are
    /// the values of the Distance dimension along the route.
    pub fn prefix_costs(&self, nodes: &[usize], depot: usize) -> Vec<i64> {
        if nodes.is_empty() {
            return Vec::new();
        }
        let mut prefixes = Vec::with_capacity(nodes.len() + 1);
        let mut running = self.arc(depot, nodes[0]);
        prefixes.push(running);
        for w in nodes.windows(2) {
            running += self.arc(w[0], w[1]);
            prefixes.push(running);
        }
        running += self.arc(nodes[nodes.len() - 1], depot);
        prefixes.push(running);
        prefixes
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.arc(i, j) != self.arc(j, i) {
                    return false;
                }
            }
        }
        true
    }
}
