//! Parallel execution of every heuristic on an explicitly owned thread pool.
//!
//! Each heuristic's solve run is a pure function of the problem and its
//! seed, so the runs share nothing but the immutable problem instance.
//! The pool is constructed and owned here — never the process-wide global
//! pool — and every run is joined before results are returned.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::constructive::Method;
use crate::error::SolveError;
use crate::models::{ProblemInstance, SolutionTrace};
use crate::solver::solve_seeded;

/// The outcome of running one heuristic to convergence.
#[derive(Debug, Clone)]
pub struct MethodRun {
    /// Which heuristic produced this run.
    pub method: Method,
    /// The full trace, or the error that aborted the run. A failed
    /// heuristic yields no partial result.
    pub outcome: Result<SolutionTrace, SolveError>,
    /// Wall time of the run.
    pub elapsed: Duration,
}

/// Runs all four heuristics to convergence in parallel.
///
/// Builds a dedicated pool with `threads` workers (one per heuristic is a
/// natural choice), gives every run its own seed derived from `seed`, and
/// blocks until all runs finish. Results come back in [`Method::ALL`]
/// order regardless of completion order.
///
/// # Examples
///
/// ```
/// use transport_solver::models::ProblemInstance;
/// use transport_solver::runner::run_all_methods;
///
/// let problem = ProblemInstance::new(
///     vec![vec![1.0, 2.0], vec![3.0, 4.0]],
///     vec![5.0, 5.0],
///     vec![4.0, 6.0],
/// )
/// .expect("well-formed");
///
/// let runs = run_all_methods(&problem, 42, 4);
/// assert_eq!(runs.len(), 4);
/// let optimum = runs[0].outcome.as_ref().expect("solvable").final_cost(problem.costs());
/// for run in &runs {
///     let trace = run.outcome.as_ref().expect("solvable");
///     assert!((trace.final_cost(problem.costs()) - optimum).abs() < 1e-9);
/// }
/// ```
pub fn run_all_methods(problem: &ProblemInstance, seed: u64, threads: usize) -> Vec<MethodRun> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .expect("thread pool construction only fails on invalid configuration");

    pool.install(|| {
        Method::ALL
            .par_iter()
            .enumerate()
            .map(|(index, &method)| {
                let run_seed = seed.wrapping_add(index as u64);
                let started = Instant::now();
                let outcome = solve_seeded(problem, method, run_seed);
                MethodRun {
                    method,
                    outcome,
                    elapsed: started.elapsed(),
                }
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_problem() -> ProblemInstance {
        ProblemInstance::new(
            vec![
                vec![8.0, 6.0, 10.0, 9.0],
                vec![9.0, 12.0, 13.0, 7.0],
                vec![14.0, 9.0, 16.0, 5.0],
            ],
            vec![20.0, 30.0, 25.0],
            vec![10.0, 25.0, 15.0, 25.0],
        )
        .expect("valid")
    }

    #[test]
    fn test_runs_cover_all_methods_in_order() {
        let runs = run_all_methods(&textbook_problem(), 42, 4);
        let methods: Vec<Method> = runs.iter().map(|run| run.method).collect();
        assert_eq!(methods, Method::ALL);
    }

    #[test]
    fn test_all_runs_agree_on_the_optimum() {
        let problem = textbook_problem();
        for run in run_all_methods(&problem, 42, 2) {
            let trace = run.outcome.expect("solvable");
            assert!((trace.final_cost(problem.costs()) - 585.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_thread_pool_still_completes() {
        let runs = run_all_methods(&textbook_problem(), 42, 1);
        assert_eq!(runs.len(), 4);
        assert!(runs.iter().all(|run| run.outcome.is_ok()));
    }

    #[test]
    fn test_matches_sequential_solve() {
        let problem = textbook_problem();
        let runs = run_all_methods(&problem, 42, 4);
        for run in runs {
            let sequential = solve_seeded(
                &problem,
                run.method,
                42u64.wrapping_add(
                    Method::ALL.iter().position(|&m| m == run.method).expect("known") as u64,
                ),
            )
            .expect("solvable");
            assert_eq!(run.outcome.expect("solvable"), sequential);
        }
    }
}
