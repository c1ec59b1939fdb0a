//! Optimality check and entering-cell selection.

use crate::models::{DualPotentials, ProblemInstance, SolutionMatrix};

/// Tolerance below which a positive reduced cost is treated as zero.
const REDUCED_COST_EPS: f64 = 1e-9;

/// Scans non-basic cells for potential violations and selects the entering
/// cell.
///
/// For every empty cell `(i, j)` the reduced cost is
/// `u[i] + v[j] - cost[i][j]`; a positive value means the current solution
/// is not optimal. Among violating cells the one with the largest
/// `cost[i][j] - (u[i] + v[j])`, that is the smallest positive reduced
/// cost, wins, ties going to the first found in row-major order. `None`
/// means no violation: the solution is optimal and the loop terminates.
///
/// The potentials must be complete; this is the caller's invariant
/// (enforced by the degeneracy resolver before each iteration).
pub fn select_pivot(
    problem: &ProblemInstance,
    solution: &SolutionMatrix,
    potentials: &DualPotentials,
) -> Option<(usize, usize)> {
    let costs = problem.costs();
    let mut best: Option<((usize, usize), f64)> = None;

    for row in 0..solution.rows() {
        for col in 0..solution.cols() {
            if solution.is_basic(row, col) {
                continue;
            }
            let Some(sum) = potentials.sum_at(row, col) else {
                continue;
            };
            let reduced = sum - costs.get(row, col);
            if reduced <= REDUCED_COST_EPS {
                continue;
            }
            match best {
                Some((_, best_reduced)) if reduced >= best_reduced => {}
                _ => best = Some(((row, col), reduced)),
            }
        }
    }

    best.map(|(cell, _)| cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::calculate_potentials;

    fn staircase() -> (ProblemInstance, SolutionMatrix) {
        let problem = ProblemInstance::new(
            vec![
                vec![8.0, 6.0, 10.0, 9.0],
                vec![9.0, 12.0, 13.0, 7.0],
                vec![14.0, 9.0, 16.0, 5.0],
            ],
            vec![20.0, 30.0, 25.0],
            vec![10.0, 25.0, 15.0, 25.0],
        )
        .expect("valid");
        let mut solution = SolutionMatrix::new(3, 4);
        solution.set(0, 0, 10.0);
        solution.set(0, 1, 10.0);
        solution.set(1, 1, 15.0);
        solution.set(1, 2, 15.0);
        solution.set(1, 3, 0.0);
        solution.set(2, 3, 25.0);
        (problem, solution)
    }

    #[test]
    fn test_selects_smallest_violation() {
        let (problem, solution) = staircase();
        let potentials = calculate_potentials(&problem, &solution);
        // Reduced costs of empty cells: (1,0)=5, (2,1)=1, others <= 0.
        // The smaller violation wins.
        assert_eq!(select_pivot(&problem, &solution, &potentials), Some((2, 1)));
    }

    #[test]
    fn test_equal_violations_break_row_major() {
        let problem = ProblemInstance::new(
            vec![vec![1.0, 1.0, 0.0], vec![0.0, 1.0, 1.0]],
            vec![5.0, 5.0],
            vec![4.0, 3.0, 3.0],
        )
        .expect("valid");
        let mut solution = SolutionMatrix::new(2, 3);
        solution.set(0, 0, 4.0);
        solution.set(0, 1, 1.0);
        solution.set(1, 1, 2.0);
        solution.set(1, 2, 3.0);
        let potentials = calculate_potentials(&problem, &solution);
        // u=[0,0], v=[1,1,1]: (0,2) and (1,0) both have reduced cost 1.
        assert_eq!(select_pivot(&problem, &solution, &potentials), Some((0, 2)));
    }

    #[test]
    fn test_optimal_solution_has_no_pivot() {
        let problem = ProblemInstance::new(
            vec![vec![1.0, 2.0], vec![2.0, 1.0]],
            vec![5.0, 5.0],
            vec![5.0, 5.0],
        )
        .expect("valid");
        let mut solution = SolutionMatrix::new(2, 2);
        solution.set(0, 0, 5.0);
        solution.set(0, 1, 0.0);
        solution.set(1, 1, 5.0);
        let potentials = calculate_potentials(&problem, &solution);
        assert_eq!(select_pivot(&problem, &solution, &potentials), None);
    }

    #[test]
    fn test_zero_reduced_cost_is_not_a_violation() {
        // Alternative optima: a non-basic cell with reduced cost exactly 0
        // must not be selected.
        let problem = ProblemInstance::new(
            vec![vec![1.0, 1.0], vec![1.0, 1.0]],
            vec![5.0, 5.0],
            vec![5.0, 5.0],
        )
        .expect("valid");
        let mut solution = SolutionMatrix::new(2, 2);
        solution.set(0, 0, 5.0);
        solution.set(0, 1, 0.0);
        solution.set(1, 1, 5.0);
        let potentials = calculate_potentials(&problem, &solution);
        assert_eq!(select_pivot(&problem, &solution, &potentials), None);
    }
}
