//! Vogel approximation constructive heuristic.
//!
//! Greedy-regret principle: the line (row or column) that would pay the
//! highest price for not using its cheapest cell is served first.

use crate::models::{CostMatrix, ProblemInstance, SolutionMatrix};

use super::Remaining;

/// A row or column still holding resource, with its regret penalty.
struct PenaltyLine {
    index: usize,
    penalty: f64,
    is_row: bool,
}

/// Builds an initial feasible solution with the Vogel approximation.
///
/// Each round computes, for every row and column with nonzero remaining
/// resource, the penalty of its eligible cells (second-smallest cost minus
/// smallest; zero when a single cell is eligible). The line with the
/// maximum penalty wins — ties go to the first found, scanning rows before
/// columns — and its minimum-cost eligible cell receives a greedy
/// allocation. Rounds repeat until no line has resource left.
///
/// # Examples
///
/// ```
/// use transport_solver::models::ProblemInstance;
/// use transport_solver::constructive::vogel;
///
/// let problem = ProblemInstance::new(
///     vec![vec![4.0, 1.0], vec![2.0, 3.0]],
///     vec![6.0, 4.0],
///     vec![5.0, 5.0],
/// )
/// .expect("well-formed");
/// let solution = vogel(&problem);
/// assert_eq!(solution.basic_count(), 3);
/// assert_eq!(solution.row_sums(), vec![6.0, 4.0]);
/// ```
pub fn vogel(problem: &ProblemInstance) -> SolutionMatrix {
    let (rows, cols) = (problem.num_sources(), problem.num_destinations());
    let costs = problem.costs();
    let mut solution = SolutionMatrix::new(rows, cols);
    let mut remaining = Remaining::from_problem(problem);

    while let Some(line) = best_penalty_line(costs, &remaining) {
        let (row, col) = cheapest_eligible_cell(costs, &remaining, &line);
        remaining.invest(&mut solution, row, col);
    }
    solution
}

/// The maximum-penalty line, or `None` when every line is exhausted.
fn best_penalty_line(costs: &CostMatrix, remaining: &Remaining) -> Option<PenaltyLine> {
    let mut best: Option<PenaltyLine> = None;

    for row in 0..costs.rows() {
        if remaining.supply[row] == 0.0 {
            continue;
        }
        let eligible = (0..costs.cols())
            .filter(|&col| remaining.demand[col] != 0.0)
            .map(|col| costs.get(row, col));
        if let Some(penalty) = line_penalty(eligible) {
            if best.as_ref().map_or(true, |b| penalty > b.penalty) {
                best = Some(PenaltyLine {
                    index: row,
                    penalty,
                    is_row: true,
                });
            }
        }
    }

    for col in 0..costs.cols() {
        if remaining.demand[col] == 0.0 {
            continue;
        }
        let eligible = (0..costs.rows())
            .filter(|&row| remaining.supply[row] != 0.0)
            .map(|row| costs.get(row, col));
        if let Some(penalty) = line_penalty(eligible) {
            if best.as_ref().map_or(true, |b| penalty > b.penalty) {
                best = Some(PenaltyLine {
                    index: col,
                    penalty,
                    is_row: false,
                });
            }
        }
    }

    best
}

/// Second-smallest minus smallest cost; 0 for a single eligible cell;
/// `None` when the line has no eligible cell.
fn line_penalty(eligible: impl Iterator<Item = f64>) -> Option<f64> {
    let mut smallest = f64::INFINITY;
    let mut second = f64::INFINITY;
    let mut count = 0usize;
    for cost in eligible {
        count += 1;
        if cost < smallest {
            second = smallest;
            smallest = cost;
        } else if cost < second {
            second = cost;
        }
    }
    match count {
        0 => None,
        1 => Some(0.0),
        _ => Some(second - smallest),
    }
}

/// Minimum-cost eligible cell within the winning line (first on ties).
fn cheapest_eligible_cell(
    costs: &CostMatrix,
    remaining: &Remaining,
    line: &PenaltyLine,
) -> (usize, usize) {
    if line.is_row {
        let row = line.index;
        let col = (0..costs.cols())
            .filter(|&col| remaining.demand[col] != 0.0)
            .min_by(|&a, &b| {
                costs
                    .get(row, a)
                    .partial_cmp(&costs.get(row, b))
                    .expect("costs are finite")
            })
            .expect("winning line has an eligible cell");
        (row, col)
    } else {
        let col = line.index;
        let row = (0..costs.rows())
            .filter(|&row| remaining.supply[row] != 0.0)
            .min_by(|&a, &b| {
                costs
                    .get(a, col)
                    .partial_cmp(&costs.get(b, col))
                    .expect("costs are finite")
            })
            .expect("winning line has an eligible cell");
        (row, col)
    }
}
