//! Dual potential computation and optimality checking.
//!
//! - [`calculate_potentials`] — breadth-first resolution of `(u, v)` over the basis
//! - [`select_pivot`] — reduced-cost scan of non-basic cells for the entering cell

mod optimality;
mod potentials;

pub use optimality::select_pivot;
pub use potentials::calculate_potentials;
