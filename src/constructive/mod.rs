//! Constructive heuristics for building an initial basic feasible solution.
//!
//! - [`north_west`] — North-West Corner staircase walk, cost-blind, O(S + D)
//! - [`minimum_cost`] — Greedy allocation in ascending cost order, O(SD log SD)
//! - [`vogel`] — Vogel approximation (greedy regret), O((S + D)·SD)
//! - [`double_marks`] — Row/column minimum double-marking, O(SD log SD)
//!
//! Each heuristic is a pure function of the problem instance with the same
//! signature; [`Method`] is the closed set of choices for dispatch.

mod double_marks;
mod minimum_cost;
mod north_west;
mod vogel;

pub use double_marks::double_marks;
pub use minimum_cost::minimum_cost;
pub use north_west::north_west;
pub use vogel::vogel;

use serde::{Deserialize, Serialize};

use crate::models::{ProblemInstance, SolutionMatrix};

/// The initial-solution heuristic to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// North-West Corner rule.
    NorthWest,
    /// Minimum cost rule.
    MinimumCost,
    /// Vogel approximation.
    Vogel,
    /// Double marks rule.
    DoubleMarks,
}

impl Method {
    /// All heuristics, in comparison-table order.
    pub const ALL: [Method; 4] = [
        Method::NorthWest,
        Method::MinimumCost,
        Method::Vogel,
        Method::DoubleMarks,
    ];

    /// Display name of the heuristic.
    pub fn name(self) -> &'static str {
        match self {
            Method::NorthWest => "North-west corner",
            Method::MinimumCost => "Minimum cost",
            Method::Vogel => "Vogel approximation",
            Method::DoubleMarks => "Double marks",
        }
    }

    /// Builds an initial feasible solution with this heuristic.
    pub fn build(self, problem: &ProblemInstance) -> SolutionMatrix {
        match self {
            Method::NorthWest => north_west(problem),
            Method::MinimumCost => minimum_cost(problem),
            Method::Vogel => vogel(problem),
            Method::DoubleMarks => double_marks(problem),
        }
    }
}

/// Remaining supply and demand during greedy construction.
pub(crate) struct Remaining {
    pub supply: Vec<f64>,
    pub demand: Vec<f64>,
}

impl Remaining {
    pub fn from_problem(problem: &ProblemInstance) -> Self {
        Self {
            supply: problem.supply().to_vec(),
            demand: problem.demand().to_vec(),
        }
    }

    /// Allocates `min(remaining demand, remaining supply)` at `(row, col)`,
    /// decrementing both sides atomically so neither is over-allocated.
    pub fn invest(&mut self, solution: &mut SolutionMatrix, row: usize, col: usize) {
        let amount = self.demand[col].min(self.supply[row]);
        solution.set(row, col, amount);
        self.supply[row] -= amount;
        self.demand[col] -= amount;
    }
}
