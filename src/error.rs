//! Error types for solver runs.

use thiserror::Error;

/// A terminal failure of one heuristic's solve run.
///
/// None of these are retried internally; each aborts the run it occurred in
/// and propagates to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Malformed input rejected before any computation starts.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),

    /// Degeneracy repair exhausted every untried empty cell without
    /// reaching a basis with fully resolvable potentials.
    #[error("degenerate basis: repair exhausted all candidate cells")]
    DegenerateBasis,

    /// The potential calculator could not resolve every row and column
    /// potential for a solution inside the optimization loop.
    #[error("dual potentials could not be fully resolved")]
    UnresolvablePotentials,

    /// The cycle search failed to close through the entering cell,
    /// indicating a corrupted basis.
    #[error("no basis cycle found through the entering cell")]
    NoCycleFound,
}
