//! Domain model types for the transportation problem.
//!
//! Provides the core abstractions: a dense cost matrix, a solution matrix
//! whose cells are either allocated quantities or empty (outside the basis),
//! a balanced problem instance, dual potentials, and the per-iteration
//! solution trace.

mod matrix;
mod potentials;
mod problem;
mod trace;

pub use matrix::{CostMatrix, SolutionMatrix};
pub use potentials::DualPotentials;
pub use problem::{BalanceState, ProblemInstance};
pub use trace::{SolutionStep, SolutionTrace};
