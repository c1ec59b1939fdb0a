//! North-West Corner constructive heuristic.
//!
//! Walks the matrix from the top-left corner, allocating as much as both
//! the current row's supply and the current column's demand allow, then
//! advancing past whichever was exhausted. Produces a staircase pattern and
//! ignores costs entirely: it is a feasibility-only construction.

use crate::models::{ProblemInstance, SolutionMatrix};

use super::Remaining;

/// Builds an initial feasible solution with the North-West Corner rule.
///
/// Starting at `(0, 0)`, allocates `min(remaining supply, remaining
/// demand)`, then advances the destination index when the column is
/// exhausted and the source index when the row is exhausted. When both run
/// out at once the destination advances first, so the next column receives
/// an explicit zero allocation and the staircase stays connected.
///
/// # Examples
///
/// ```
/// use transport_solver::models::ProblemInstance;
/// use transport_solver::constructive::north_west;
///
/// let problem = ProblemInstance::new(
///     vec![vec![4.0, 1.0], vec![2.0, 3.0]],
///     vec![6.0, 4.0],
///     vec![5.0, 5.0],
/// )
/// .expect("well-formed");
/// let solution = north_west(&problem);
/// // Cost is ignored: the top-left cell is filled first.
/// assert_eq!(solution.get(0, 0), Some(5.0));
/// assert_eq!(solution.get(0, 1), Some(1.0));
/// assert_eq!(solution.get(1, 1), Some(4.0));
/// assert_eq!(solution.get(1, 0), None);
/// ```
pub fn north_west(problem: &ProblemInstance) -> SolutionMatrix {
    let (rows, cols) = (problem.num_sources(), problem.num_destinations());
    let mut solution = SolutionMatrix::new(rows, cols);
    let mut remaining = Remaining::from_problem(problem);

    let mut row = 0;
    let mut col = 0;
    while row < rows && col < cols {
        remaining.invest(&mut solution, row, col);
        let supply_left = remaining.supply[row];
        let demand_left = remaining.demand[col];
        if demand_left == 0.0 && supply_left > 0.0 {
            col += 1;
        } else if supply_left == 0.0 && demand_left > 0.0 {
            row += 1;
        } else {
            // Both exhausted: advance the destination first.
            col += 1;
        }
    }
    solution
}
