//! Basis cycle search and stepping-stone rebasing.
//!
//! - [`find_cycle`] — iterative alternating row/column DFS through the basis
//! - [`rebuild_solution`] — shifts allocations around the cycle and swaps the entering cell for the leaving one

mod cycle;
mod rebuild;

pub use cycle::find_cycle;
pub use rebuild::rebuild_solution;
