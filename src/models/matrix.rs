//! Dense cost and solution matrices.

use serde::{Deserialize, Serialize};

/// A dense S×D unit cost matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use transport_solver::models::CostMatrix;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![8.0, 6.0],
///     vec![9.0, 12.0],
/// ])
/// .expect("rectangular");
/// assert_eq!(costs.get(1, 0), 9.0);
/// assert_eq!((costs.rows(), costs.cols()), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Builds a cost matrix from nested rows.
    ///
    /// Returns `None` if there are no rows, the first row is empty, or any
    /// row has a different length than the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            data.extend(row);
        }
        Some(Self {
            data,
            rows: height,
            cols: width,
        })
    }

    /// Unit cost of shipping from source `row` to destination `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Number of sources.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of destinations.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if every entry is finite and non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.data.iter().all(|&c| c.is_finite() && c >= 0.0)
    }

    /// Appends a zero-cost column (dummy destination).
    pub(crate) fn push_zero_column(&mut self) {
        let mut data = Vec::with_capacity(self.rows * (self.cols + 1));
        for row in self.data.chunks(self.cols) {
            data.extend_from_slice(row);
            data.push(0.0);
        }
        self.data = data;
        self.cols += 1;
    }

    /// Appends a zero-cost row (dummy source).
    pub(crate) fn push_zero_row(&mut self) {
        self.data.extend(std::iter::repeat(0.0).take(self.cols));
        self.rows += 1;
    }
}

/// An S×D shipment plan where each cell is either an allocated quantity or
/// empty (not part of the current basis).
///
/// An empty cell is distinct from an explicit zero allocation: `Some(0.0)`
/// is a valid degenerate basic cell, while `None` is outside the basis and
/// contributes nothing to row/column sums.
///
/// # Examples
///
/// ```
/// use transport_solver::models::SolutionMatrix;
///
/// let mut solution = SolutionMatrix::new(2, 3);
/// assert_eq!(solution.basic_count(), 0);
/// solution.set(0, 1, 5.0);
/// solution.set(1, 2, 0.0); // degenerate basic cell
/// assert_eq!(solution.basic_count(), 2);
/// assert_eq!(solution.get(0, 1), Some(5.0));
/// assert_eq!(solution.get(0, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionMatrix {
    cells: Vec<Option<f64>>,
    rows: usize,
    cols: usize,
}

impl SolutionMatrix {
    /// Creates a solution matrix with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![None; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of source rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of destination columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Allocation at `(row, col)`, or `None` if the cell is not basic.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[row * self.cols + col]
    }

    /// Returns `true` if the cell belongs to the current basis.
    pub fn is_basic(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col].is_some()
    }

    /// Makes `(row, col)` basic with the given allocation.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * self.cols + col] = Some(value);
    }

    /// Removes `(row, col)` from the basis.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = None;
    }

    /// Adds `delta` to the allocation of a basic cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is empty.
    pub fn add(&mut self, row: usize, col: usize, delta: f64) {
        let cell = &mut self.cells[row * self.cols + col];
        *cell = Some(cell.expect("cell must be basic") + delta);
    }

    /// Number of basic (non-empty) cells.
    pub fn basic_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates over basic cells as `(row, col, value)` in row-major order.
    pub fn basic_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| {
                cell.map(|value| (idx / self.cols, idx % self.cols, value))
            })
    }

    /// Row sums over allocated cells (empty contributes 0).
    pub fn row_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.rows];
        for (row, _, value) in self.basic_cells() {
            sums[row] += value;
        }
        sums
    }

    /// Column sums over allocated cells (empty contributes 0).
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.cols];
        for (_, col, value) in self.basic_cells() {
            sums[col] += value;
        }
        sums
    }

    /// Total shipment cost: `Σ value · cost` over basic cells.
    pub fn total_cost(&self, costs: &CostMatrix) -> f64 {
        self.basic_cells()
            .map(|(row, col, value)| value * costs.get(row, col))
            .sum()
    }
}
