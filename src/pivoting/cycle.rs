//! Cycle search through the basis.

use std::collections::HashSet;

use crate::models::SolutionMatrix;

/// Which way the search walks from the current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Try other basic cells in the current cell's row.
    ByRow,
    /// Try other basic cells in the current cell's column.
    ByColumn,
}

/// One frame of the iterative depth-first search.
struct Frame {
    cell: (usize, usize),
    direction: Direction,
    next_candidate: usize,
}

/// What the top frame did with its next candidate.
enum StepOutcome {
    /// A row step landed in the entering cell's column: cycle closed.
    Close((usize, usize)),
    /// Walk on from a fresh neighbor.
    Descend((usize, usize)),
    /// No candidates left: backtrack.
    Exhausted,
}

/// Finds the closed cycle through `entering` using only basic cells.
///
/// The search leaves the entering cell along its row, then alternates
/// column and row walks over basic cells until some row step lands back in
/// the entering cell's column, closing the cycle. For a correctly
/// maintained basis (a spanning tree plus the entering cell) exactly one
/// such cycle exists.
///
/// Returns the cycle as a path starting at `entering`, alternating
/// row-neighbors and column-neighbors, with an even number of cells; or
/// `None` when no cycle closes, which indicates a corrupted basis.
///
/// The entering cell itself must already be basic (the rebuilder sets it
/// to an explicit zero before searching).
pub fn find_cycle(
    solution: &SolutionMatrix,
    entering: (usize, usize),
) -> Option<Vec<(usize, usize)>> {
    let (rows, cols) = (solution.rows(), solution.cols());
    let (_, entering_col) = entering;

    let mut path = vec![entering];
    let mut on_path: HashSet<(usize, usize)> = HashSet::from([entering]);
    let mut stack = vec![Frame {
        cell: entering,
        direction: Direction::ByRow,
        next_candidate: 0,
    }];

    while !stack.is_empty() {
        let outcome = {
            let frame = stack.last_mut().expect("stack is non-empty");
            let (row, col) = frame.cell;
            let mut outcome = StepOutcome::Exhausted;
            match frame.direction {
                Direction::ByRow => {
                    while frame.next_candidate < cols {
                        let candidate = frame.next_candidate;
                        frame.next_candidate += 1;
                        if candidate == col || !solution.is_basic(row, candidate) {
                            continue;
                        }
                        let next = (row, candidate);
                        if on_path.contains(&next) {
                            continue;
                        }
                        if candidate == entering_col {
                            outcome = StepOutcome::Close(next);
                            break;
                        }
                        outcome = StepOutcome::Descend(next);
                        break;
                    }
                }
                Direction::ByColumn => {
                    while frame.next_candidate < rows {
                        let candidate = frame.next_candidate;
                        frame.next_candidate += 1;
                        if candidate == row || !solution.is_basic(candidate, col) {
                            continue;
                        }
                        let next = (candidate, col);
                        if on_path.contains(&next) {
                            continue;
                        }
                        outcome = StepOutcome::Descend(next);
                        break;
                    }
                }
            }
            outcome
        };

        match outcome {
            StepOutcome::Close(next) => {
                path.push(next);
                return Some(path);
            }
            StepOutcome::Descend(next) => {
                let direction = match stack.last().expect("stack is non-empty").direction {
                    Direction::ByRow => Direction::ByColumn,
                    Direction::ByColumn => Direction::ByRow,
                };
                path.push(next);
                on_path.insert(next);
                stack.push(Frame {
                    cell: next,
                    direction,
                    next_candidate: 0,
                });
            }
            StepOutcome::Exhausted => {
                stack.pop();
                if let Some(dead_end) = path.pop() {
                    on_path.remove(&dead_end);
                }
            }
        }
    }

    None
}
