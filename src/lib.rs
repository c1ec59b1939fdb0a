//! # transport-solver
//!
//! Transportation problem optimization library: given per-route unit costs,
//! supply at each source, and demand at each destination, build an initial
//! basic feasible solution with one of four constructive heuristics and
//! improve it with MODI (potential method) pivoting until optimality is
//! proven.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (CostMatrix, SolutionMatrix, ProblemInstance, DualPotentials, SolutionTrace)
//! - [`constructive`] — Constructive heuristics (North-West Corner, Minimum Cost, Vogel, Double Marks)
//! - [`degeneracy`] — Basis repair for degenerate feasible solutions
//! - [`evaluation`] — Dual potentials and optimality checking
//! - [`pivoting`] — Basis cycle search and stepping-stone rebasing
//! - [`solver`] — The optimize-to-convergence loop producing a solution trace
//! - [`runner`] — Parallel execution of all heuristics on an owned thread pool
//!
//! ## Example
//!
//! ```
//! use transport_solver::models::ProblemInstance;
//! use transport_solver::constructive::Method;
//! use transport_solver::solver::solve_seeded;
//!
//! let problem = ProblemInstance::new(
//!     vec![
//!         vec![8.0, 6.0, 10.0, 9.0],
//!         vec![9.0, 12.0, 13.0, 7.0],
//!         vec![14.0, 9.0, 16.0, 5.0],
//!     ],
//!     vec![20.0, 30.0, 25.0],
//!     vec![10.0, 25.0, 15.0, 25.0],
//! )
//! .expect("well-formed problem");
//!
//! let trace = solve_seeded(&problem, Method::Vogel, 42).expect("solvable");
//! assert!((trace.final_cost(problem.costs()) - 585.0).abs() < 1e-9);
//! ```

pub mod constructive;
pub mod degeneracy;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod pivoting;
pub mod runner;
pub mod solver;

pub use error::SolveError;
