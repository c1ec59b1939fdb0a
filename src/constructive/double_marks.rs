//! Double Marks constructive heuristic.

use crate::models::{CostMatrix, ProblemInstance, SolutionMatrix};

use super::Remaining;

/// Builds an initial feasible solution with the Double Marks rule.
///
/// Every row marks the column holding its minimum cost, and every column
/// marks the row holding its minimum cost, so a cell accumulates 0, 1, or 2
/// marks. A doubly-marked cell is locally optimal from both its row's and
/// its column's perspective. Marked cells are allocated first, sorted by
/// descending mark count then ascending cost; the remaining cells follow in
/// ascending cost order.
///
/// # Examples
///
/// ```
/// use transport_solver::models::ProblemInstance;
/// use transport_solver::constructive::double_marks;
///
/// let problem = ProblemInstance::new(
///     vec![vec![4.0, 1.0], vec![2.0, 3.0]],
///     vec![6.0, 4.0],
///     vec![5.0, 5.0],
/// )
/// .expect("well-formed");
/// let solution = double_marks(&problem);
/// // (0, 1) is both row 0's and column 1's minimum: allocated first.
/// assert_eq!(solution.get(0, 1), Some(5.0));
/// ```
pub fn double_marks(problem: &ProblemInstance) -> SolutionMatrix {
    let (rows, cols) = (problem.num_sources(), problem.num_destinations());
    let costs = problem.costs();
    let mut solution = SolutionMatrix::new(rows, cols);
    let mut remaining = Remaining::from_problem(problem);

    let marks = mark_minimal_cells(costs);

    let mut marked: Vec<(usize, usize)> = Vec::new();
    let mut unmarked: Vec<(usize, usize)> = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if marks[row * cols + col] > 0 {
                marked.push((row, col));
            } else {
                unmarked.push((row, col));
            }
        }
    }
    marked.sort_by(|&(r1, c1), &(r2, c2)| {
        marks[r2 * cols + c2].cmp(&marks[r1 * cols + c1]).then(
            costs
                .get(r1, c1)
                .partial_cmp(&costs.get(r2, c2))
                .expect("costs are finite"),
        )
    });
    unmarked.sort_by(|&(r1, c1), &(r2, c2)| {
        costs
            .get(r1, c1)
            .partial_cmp(&costs.get(r2, c2))
            .expect("costs are finite")
    });

    for (row, col) in marked.into_iter().chain(unmarked) {
        if remaining.supply[row] != 0.0 && remaining.demand[col] != 0.0 {
            remaining.invest(&mut solution, row, col);
        }
    }
    solution
}

/// Row-major mark counts: +1 from each row for its min-cost column, +1 from
/// each column for its min-cost row (first minimum wins on ties).
fn mark_minimal_cells(costs: &CostMatrix) -> Vec<u8> {
    let (rows, cols) = (costs.rows(), costs.cols());
    let mut marks = vec![0u8; rows * cols];
    for row in 0..rows {
        let mut min_col = 0;
        for col in 1..cols {
            if costs.get(row, col) < costs.get(row, min_col) {
                min_col = col;
            }
        }
        marks[row * cols + min_col] += 1;
    }
    for col in 0..cols {
        let mut min_row = 0;
        for row in 1..rows {
            if costs.get(row, col) < costs.get(min_row, col) {
                min_row = row;
            }
        }
        marks[min_row * cols + col] += 1;
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks() {
        let costs =
            CostMatrix::from_rows(vec![vec![4.0, 1.0], vec![2.0, 3.0]]).expect("valid");
        let marks = mark_minimal_cells(&costs);
        // (0,1): row 0 min and column 1 min -> 2 marks.
        // (1,0): row 1 min and column 0 min -> 2 marks.
        assert_eq!(marks, vec![0, 2, 2, 0]);
    }

    #[test]
    fn test_textbook_instance() {
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
        let solution = double_marks(&problem);
        assert_eq!(solution.basic_count(), 5);
        assert!((solution.total_cost(problem.costs()) - 590.0).abs() < 1e-9);
    }

    #[test]
    fn test_feasibility() {
        let problem = ProblemInstance::new(
            vec![vec![5.0, 3.0, 8.0], vec![2.0, 9.0, 4.0]],
            vec![12.0, 8.0],
            vec![6.0, 6.0, 8.0],
        )
        .expect("valid");
        let solution = double_marks(&problem);
        for (sum, &expected) in solution.row_sums().iter().zip(problem.supply()) {
            assert!((sum - expected).abs() < 1e-9);
        }
        for (sum, &expected) in solution.column_sums().iter().zip(problem.demand()) {
            assert!((sum - expected).abs() < 1e-9);
        }
    }
}
