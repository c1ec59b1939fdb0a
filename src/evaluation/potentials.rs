//! Dual potential calculator.

use std::collections::VecDeque;

use crate::models::{DualPotentials, ProblemInstance, SolutionMatrix};

/// Computes the dual potentials of a basic feasible solution.
///
/// Fixes `u[0] = 0` and breadth-first-traverses the basic cells, seeded
/// from every basic cell of row 0. Visiting `(row, col)` resolves the
/// unknown side of `u[row] + v[col] = cost[row][col]` and enqueues every
/// unvisited basic cell sharing that row or column. No cell is processed
/// twice.
///
/// The result is complete ([`DualPotentials::is_complete`]) iff the basis
/// graph is connected; an incomplete result signals a degenerate basis that
/// must be repaired before the potentials can certify anything.
///
/// # Examples
///
/// ```
/// use transport_solver::models::{ProblemInstance, SolutionMatrix};
/// use transport_solver::evaluation::calculate_potentials;
///
/// let problem = ProblemInstance::new(
///     vec![vec![2.0, 3.0], vec![4.0, 1.0]],
///     vec![5.0, 5.0],
///     vec![5.0, 5.0],
/// )
/// .expect("well-formed");
/// let mut solution = SolutionMatrix::new(2, 2);
/// solution.set(0, 0, 5.0);
/// solution.set(0, 1, 0.0);
/// solution.set(1, 1, 5.0);
///
/// let potentials = calculate_potentials(&problem, &solution);
/// assert!(potentials.is_complete());
/// assert_eq!(potentials.row(0), Some(0.0));
/// assert_eq!(potentials.column(0), Some(2.0));
/// assert_eq!(potentials.column(1), Some(3.0));
/// assert_eq!(potentials.row(1), Some(-2.0));
/// ```
pub fn calculate_potentials(
    problem: &ProblemInstance,
    solution: &SolutionMatrix,
) -> DualPotentials {
    let (rows, cols) = (solution.rows(), solution.cols());
    let costs = problem.costs();
    let mut potentials = DualPotentials::new(rows, cols);
    potentials.set_row(0, 0.0);

    let mut visited = vec![false; rows * cols];
    let mut queue: VecDeque<(usize, usize)> = (0..cols)
        .filter(|&col| solution.is_basic(0, col))
        .map(|col| (0, col))
        .collect();

    while let Some((row, col)) = queue.pop_front() {
        if visited[row * cols + col] {
            continue;
        }
        visited[row * cols + col] = true;

        match (potentials.row(row), potentials.column(col)) {
            (Some(u), None) => potentials.set_column(col, costs.get(row, col) - u),
            (None, Some(v)) => potentials.set_row(row, costs.get(row, col) - v),
            _ => {}
        }

        for other_row in 0..rows {
            if other_row != row
                && solution.is_basic(other_row, col)
                && !visited[other_row * cols + col]
            {
                queue.push_back((other_row, col));
            }
        }
        for other_col in 0..cols {
            if other_col != col
                && solution.is_basic(row, other_col)
                && !visited[row * cols + other_col]
            {
                queue.push_back((row, other_col));
            }
        }
    }

    potentials
}
