//! Minimum Cost constructive heuristic.

use crate::models::{ProblemInstance, SolutionMatrix};

use super::Remaining;

/// Builds an initial feasible solution with the Minimum Cost rule.
///
/// Generates every `(row, col)` pair, stable-sorts ascending by unit cost
/// (ties keep row-major order), then greedily allocates
/// `min(remaining supply, remaining demand)` at each pair in turn, skipping
/// pairs whose row or column is already exhausted.
///
/// # Examples
///
/// ```
/// use transport_solver::models::ProblemInstance;
/// use transport_solver::constructive::minimum_cost;
///
/// let problem = ProblemInstance::new(
///     vec![vec![4.0, 1.0], vec![2.0, 3.0]],
///     vec![6.0, 4.0],
///     vec![5.0, 5.0],
/// )
/// .expect("well-formed");
/// let solution = minimum_cost(&problem);
/// // Cheapest cell (0, 1) is filled to its limit first.
/// assert_eq!(solution.get(0, 1), Some(5.0));
/// assert_eq!(solution.get(1, 0), Some(4.0));
/// assert_eq!(solution.get(0, 0), Some(1.0));
/// ```
pub fn minimum_cost(problem: &ProblemInstance) -> SolutionMatrix {
    let (rows, cols) = (problem.num_sources(), problem.num_destinations());
    let costs = problem.costs();
    let mut solution = SolutionMatrix::new(rows, cols);
    let mut remaining = Remaining::from_problem(problem);

    let mut queue: Vec<(usize, usize)> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .collect();
    queue.sort_by(|&(r1, c1), &(r2, c2)| {
        costs
            .get(r1, c1)
            .partial_cmp(&costs.get(r2, c2))
            .expect("costs are finite")
    });

    for (row, col) in queue {
        if remaining.supply[row] != 0.0 && remaining.demand[col] != 0.0 {
            remaining.invest(&mut solution, row, col);
        }
    }
    solution
}
