//! Basis repair for degenerate feasible solutions.
//!
//! A basic feasible solution needs exactly `S + D - 1` basic cells for the
//! potential calculator to resolve every `u` and `v`. Constructive
//! heuristics that exhaust a row and a column with a single allocation
//! leave fewer, and the resulting basis graph falls apart into
//! disconnected components.

use rand::Rng;

use crate::error::SolveError;
use crate::evaluation::calculate_potentials;
use crate::models::{ProblemInstance, SolutionMatrix};

/// Repairs a deficient basis by injecting zero-valued basic cells.
///
/// While the basic-cell count is below `S + D - 1` or the potentials do
/// not fully resolve, samples random empty cells (deterministic for a
/// given `rng` state), tentatively sets one to an explicit zero, and keeps
/// it iff it lets the potential calculation reach strictly more rows and
/// columns — that is, iff it reconnects a separated component of the
/// basis. Cells that do not help are reverted and not tried again until
/// the next successful injection.
///
/// Does nothing when the solution already has `S + D - 1` or more basic
/// cells — only deficiency is repaired, never excess — so running the
/// resolver twice is a no-op.
///
/// # Errors
///
/// [`SolveError::DegenerateBasis`] when every untried empty cell has been
/// exhausted without progress. This is fatal and not retried. For a
/// solution with any empty cell in row 0 that cell always progresses
/// toward an unresolved column (`u[0]` is the fixed seed of the potential
/// calculation), so the error guards against corrupted bases rather than
/// a state normal construction can reach.
pub fn resolve_degeneracy<R: Rng>(
    problem: &ProblemInstance,
    solution: &mut SolutionMatrix,
    rng: &mut R,
) -> Result<(), SolveError> {
    let (rows, cols) = (solution.rows(), solution.cols());
    let target = problem.basis_size();
    if solution.basic_count() >= target {
        // Only deficiency is repaired, never excess; a full-size basis
        // that still fails to resolve is reported by the solve loop.
        return Ok(());
    }

    loop {
        let resolved = calculate_potentials(problem, solution).resolved_count();
        if solution.basic_count() >= target && resolved == rows + cols {
            return Ok(());
        }

        let mut candidates: Vec<(usize, usize)> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&(row, col)| !solution.is_basic(row, col))
            .collect();

        let mut progressed = false;
        while !candidates.is_empty() {
            let pick = rng.random_range(0..candidates.len());
            let (row, col) = candidates.swap_remove(pick);
            solution.set(row, col, 0.0);
            if calculate_potentials(problem, solution).resolved_count() > resolved {
                progressed = true;
                break;
            }
            solution.clear(row, col);
        }
        if !progressed {
            return Err(SolveError::DegenerateBasis);
        }
    }
}
