//! Stepping-stone rebasing around the cycle.

use crate::error::SolveError;
use crate::models::SolutionMatrix;

use super::find_cycle;

/// Rebases the solution around the cycle through `entering`.
///
/// The entering cell joins the basis at zero, the unique cycle through it
/// is marked alternately +1/−1 starting with +1 at the entering cell, and
/// every marked cell moves by `mark · min`, where `min` is the smallest
/// allocation among −1 cells (first such cell in row-major order on ties).
/// That minimum cell leaves the basis; tied −1 cells stay behind as
/// explicit zeros, preserving the basis size.
///
/// Total cost never increases; it strictly decreases unless the leaving
/// allocation was already zero (the degenerate case).
///
/// # Errors
///
/// [`SolveError::NoCycleFound`] when no cycle closes through `entering`.
/// This cannot happen for a correctly maintained basis and indicates the
/// degeneracy resolver was skipped or a prior step corrupted the basis;
/// the entering cell is left basic at zero in that case, mirroring the
/// aborted pivot.
pub fn rebuild_solution(
    solution: &mut SolutionMatrix,
    entering: (usize, usize),
) -> Result<(), SolveError> {
    solution.set(entering.0, entering.1, 0.0);
    let cycle = find_cycle(solution, entering).ok_or(SolveError::NoCycleFound)?;

    // Even positions (entering first) gain, odd positions give away. The
    // smallest giving cell leaves, first in row-major order on ties.
    let mut giving: Vec<(usize, usize)> = cycle
        .iter()
        .skip(1)
        .step_by(2)
        .copied()
        .collect();
    giving.sort_unstable();
    let mut leaving: Option<((usize, usize), f64)> = None;
    for &(row, col) in &giving {
        let value = solution.get(row, col).expect("cycle cells are basic");
        if leaving.map_or(true, |(_, min)| value < min) {
            leaving = Some(((row, col), value));
        }
    }
    let ((leaving_row, leaving_col), shift) =
        leaving.expect("cycle has at least one giving cell");

    for (position, &(row, col)) in cycle.iter().enumerate() {
        let mark = if position % 2 == 0 { 1.0 } else { -1.0 };
        solution.add(row, col, mark * shift);
    }
    solution.clear(leaving_row, leaving_col);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staircase() -> SolutionMatrix {
        let mut solution = SolutionMatrix::new(3, 4);
        solution.set(0, 0, 10.0);
        solution.set(0, 1, 10.0);
        solution.set(1, 1, 15.0);
        solution.set(1, 2, 15.0);
        solution.set(1, 3, 0.0);
        solution.set(2, 3, 25.0);
        solution
    }

    #[test]
    fn test_shifts_allocations_around_cycle() {
        let mut solution = staircase();
        // Cycle: (1,0) +, (1,1) −, (0,1) +, (0,0) −; min of − cells is 10
        // at (0,0).
        rebuild_solution(&mut solution, (1, 0)).expect("cycle exists");
        assert_eq!(solution.get(1, 0), Some(10.0));
        assert_eq!(solution.get(1, 1), Some(5.0));
        assert_eq!(solution.get(0, 1), Some(20.0));
        assert_eq!(solution.get(0, 0), None);
        // Feasibility and basis size are preserved.
        assert_eq!(solution.basic_count(), 6);
        assert_eq!(solution.row_sums(), vec![20.0, 30.0, 25.0]);
        assert_eq!(solution.column_sums(), vec![10.0, 25.0, 15.0, 25.0]);
    }

    #[test]
    fn test_second_cycle_shape() {
        let mut solution = staircase();
        // Cycle: (0,2) +, (0,1) −, (1,1) +, (1,2) −; min 10 at (0,1).
        rebuild_solution(&mut solution, (0, 2)).expect("cycle exists");
        assert_eq!(solution.get(0, 2), Some(10.0));
        assert_eq!(solution.get(0, 1), None);
        assert_eq!(solution.get(1, 1), Some(25.0));
        assert_eq!(solution.get(1, 2), Some(5.0));
        assert_eq!(solution.basic_count(), 6);
    }

    #[test]
    fn test_zero_shift_keeps_values() {
        let mut solution = staircase();
        // Entering (2,1) has cycle (2,1) +, (2,3) −, (1,3) +, (1,1) −.
        // With (1,1) forced to zero the shift is zero: a degenerate pivot
        // that swaps basis membership without moving any allocation.
        solution.set(1, 1, 0.0);
        rebuild_solution(&mut solution, (2, 1)).expect("cycle exists");
        assert_eq!(solution.get(2, 1), Some(0.0));
        assert_eq!(solution.get(1, 1), None);
        assert_eq!(solution.get(2, 3), Some(25.0));
        assert_eq!(solution.get(1, 3), Some(0.0));
        assert_eq!(solution.basic_count(), 6);
    }

    #[test]
    fn test_no_cycle_is_an_error() {
        let mut solution = SolutionMatrix::new(2, 2);
        solution.set(0, 0, 1.0);
        solution.set(1, 1, 1.0);
        assert_eq!(
            rebuild_solution(&mut solution, (0, 1)),
            Err(SolveError::NoCycleFound)
        );
    }

    #[test]
    fn test_tie_leaves_explicit_zero_behind() {
        let mut solution = SolutionMatrix::new(2, 2);
        solution.set(0, 0, 5.0);
        solution.set(0, 1, 5.0);
        solution.set(1, 1, 5.0);
        // Cycle (1,0) +, (1,1) −, (0,1) +, (0,0) −: both − cells hold 5;
        // the first in row-major order, (0,0), leaves and (1,1) stays at 0.
        rebuild_solution(&mut solution, (1, 0)).expect("cycle exists");
        assert_eq!(solution.get(0, 0), None);
        assert_eq!(solution.get(1, 1), Some(0.0));
        assert_eq!(solution.get(1, 0), Some(5.0));
        assert_eq!(solution.get(0, 1), Some(10.0));
        assert_eq!(solution.basic_count(), 3);
    }
}
