//! Fairness count matrices.
//!
//! A dense, row-major matrix of non-negative counters. Used for the
//! partner (`N×N`), opponent (`N×N`) and court (`N×C`) tallies that the
//! scheduler scores against and reports after a run.
//!
//! Counters only ever grow during a run; a fresh matrix is built per run.

use serde::{Deserialize, Serialize};

/// Dense `rows × cols` matrix of counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl CountMatrix {
    /// Creates a zero-filled matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Creates a zero-filled square matrix.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Counter at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.offset(row, col)]
    }

    /// Adds one to `(row, col)`.
    #[inline]
    pub fn increment(&mut self, row: usize, col: usize) {
        let idx = self.offset(row, col);
        self.cells[idx] += 1;
    }

    /// Adds one to both `(a, b)` and `(b, a)`.
    pub fn increment_pair(&mut self, a: usize, b: usize) {
        self.increment(a, b);
        self.increment(b, a);
    }

    /// Borrows one row.
    pub fn row(&self, row: usize) -> &[u32] {
        debug_assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Sum of one row.
    pub fn row_sum(&self, row: usize) -> u32 {
        self.row(row).iter().sum()
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Largest counter, ignoring the diagonal when `skip_diagonal` is set.
    pub fn max_value(&self, skip_diagonal: bool) -> u32 {
        self.off_diagonal(skip_diagonal)
            .map(|(_, _, v)| v)
            .max()
            .unwrap_or(0)
    }

    /// Whether `m[i][j] == m[j][i]` for every cell. Non-square matrices are
    /// never symmetric.
    pub fn is_symmetric(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        (0..self.rows).all(|i| (i + 1..self.cols).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Unordered pairs `(i, j)`, `i < j`, whose counter exceeds `threshold`.
    ///
    /// Only meaningful on square, symmetric matrices.
    pub fn pairs_above(&self, threshold: u32) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.rows {
            for j in (i + 1)..self.cols {
                if self.get(i, j) > threshold {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    fn off_diagonal(&self, skip_diagonal: bool) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.rows).flat_map(move |i| {
            (0..self.cols)
                .filter(move |&j| !(skip_diagonal && i == j))
                .map(move |j| (i, j, self.get(i, j)))
        })
    }
}
