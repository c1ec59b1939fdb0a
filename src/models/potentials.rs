//! Dual potentials for a basic feasible solution.

use serde::{Deserialize, Serialize};

/// Row and column potentials `(u, v)` of one particular solution matrix.
///
/// Each entry is either resolved to a value or still unknown. The
/// potentials certify optimality: for every basic cell of the solution
/// they satisfy `u[i] + v[j] = cost[i][j]`.
///
/// Potentials are valid only for the matrix they were computed against and
/// are recomputed from scratch every iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualPotentials {
    rows: Vec<Option<f64>>,
    columns: Vec<Option<f64>>,
}

impl DualPotentials {
    /// Creates fully-unresolved potentials for an S×D solution.
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            rows: vec![None; num_rows],
            columns: vec![None; num_columns],
        }
    }

    /// Row potential `u[row]`, if resolved.
    pub fn row(&self, row: usize) -> Option<f64> {
        self.rows[row]
    }

    /// Column potential `v[col]`, if resolved.
    pub fn column(&self, col: usize) -> Option<f64> {
        self.columns[col]
    }

    /// Resolves `u[row]`.
    pub fn set_row(&mut self, row: usize, value: f64) {
        self.rows[row] = Some(value);
    }

    /// Resolves `v[col]`.
    pub fn set_column(&mut self, col: usize, value: f64) {
        self.columns[col] = Some(value);
    }

    /// `u[row] + v[col]`, if both sides are resolved.
    pub fn sum_at(&self, row: usize, col: usize) -> Option<f64> {
        Some(self.rows[row]? + self.columns[col]?)
    }

    /// Number of resolved entries across both sides.
    pub fn resolved_count(&self) -> usize {
        self.rows.iter().flatten().count() + self.columns.iter().flatten().count()
    }

    /// `true` iff every row and column potential is resolved.
    pub fn is_complete(&self) -> bool {
        self.resolved_count() == self.rows.len() + self.columns.len()
    }
}
