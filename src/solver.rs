//! The optimize-to-convergence loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constructive::Method;
use crate::degeneracy::resolve_degeneracy;
use crate::error::SolveError;
use crate::evaluation::{calculate_potentials, select_pivot};
use crate::models::{ProblemInstance, SolutionStep, SolutionTrace};
use crate::pivoting::rebuild_solution;

/// Solves the problem to proven optimality, recording every iteration.
///
/// Builds the initial feasible solution with `method`, repairs any
/// degeneracy, then loops: compute potentials, snapshot the step, select
/// the entering cell, rebase around its cycle, and re-check degeneracy —
/// until no non-basic cell violates the potentials. The final trace step
/// carries no pivot, which is the optimality certificate.
///
/// The random source drives only the degeneracy resolver's candidate
/// sampling; pass a seeded generator for reproducible runs.
///
/// # Errors
///
/// Any [`SolveError`] aborts the run; no partial trace is returned.
pub fn solve<R: Rng>(
    problem: &ProblemInstance,
    method: Method,
    rng: &mut R,
) -> Result<SolutionTrace, SolveError> {
    let mut solution = method.build(problem);
    resolve_degeneracy(problem, &mut solution, rng)?;

    let mut trace = SolutionTrace::new();
    loop {
        let potentials = calculate_potentials(problem, &solution);
        if !potentials.is_complete() {
            return Err(SolveError::UnresolvablePotentials);
        }
        let pivot = select_pivot(problem, &solution, &potentials);
        trace.push_step(SolutionStep {
            matrix: solution.clone(),
            potentials,
            pivot,
        });
        let Some(entering) = pivot else {
            return Ok(trace);
        };
        rebuild_solution(&mut solution, entering)?;
        resolve_degeneracy(problem, &mut solution, rng)?;
    }
}

/// [`solve`] with a seeded [`StdRng`], for reproducible runs.
pub fn solve_seeded(
    problem: &ProblemInstance,
    method: Method,
    seed: u64,
) -> Result<SolutionTrace, SolveError> {
    let mut rng = StdRng::seed_from_u64(seed);
    solve(problem, method, &mut rng)
}
