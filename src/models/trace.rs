//! Solution trace: the chronological record of an optimization run.

use std::mem;

use serde::{Deserialize, Serialize};

use super::{CostMatrix, DualPotentials, SolutionMatrix};

/// One iteration of the optimization loop: the feasible matrix at that
/// point, its dual potentials, and the pivot cell used to reach the next
/// iteration (`None` on the final step, signalling optimality).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionStep {
    /// Feasible solution at this iteration.
    pub matrix: SolutionMatrix,
    /// Dual potentials computed for `matrix`.
    pub potentials: DualPotentials,
    /// Entering cell chosen for the next rebasing, if any.
    pub pivot: Option<(usize, usize)>,
}

/// Chronologically ordered iterations of one heuristic's solve run.
///
/// Each step owns a value copy of the solution matrix, so earlier
/// iterations remain inspectable after later pivots.
///
/// # Examples
///
/// ```
/// use transport_solver::models::ProblemInstance;
/// use transport_solver::constructive::Method;
/// use transport_solver::solver::solve_seeded;
///
/// let problem = ProblemInstance::new(
///     vec![vec![1.0, 2.0], vec![3.0, 4.0]],
///     vec![5.0, 5.0],
///     vec![4.0, 6.0],
/// )
/// .expect("well-formed");
/// let trace = solve_seeded(&problem, Method::NorthWest, 7).expect("solvable");
///
/// assert!(trace.iterations() >= 1);
/// assert!(trace.last().expect("non-empty").pivot.is_none());
/// assert_eq!(trace.step_description(0), "Formed initial feasible solution");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SolutionTrace {
    steps: Vec<SolutionStep>,
}

impl SolutionTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one iteration snapshot.
    pub fn push_step(&mut self, step: SolutionStep) {
        self.steps.push(step);
    }

    /// All recorded steps, in chronological order.
    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    /// The final step, if the trace is non-empty.
    pub fn last(&self) -> Option<&SolutionStep> {
        self.steps.last()
    }

    /// Number of recorded iterations.
    pub fn iterations(&self) -> usize {
        self.steps.len()
    }

    /// Total shipment cost of the matrix at the given step.
    ///
    /// # Panics
    ///
    /// Panics if `step` is out of range.
    pub fn cost_at(&self, step: usize, costs: &CostMatrix) -> f64 {
        self.steps[step].matrix.total_cost(costs)
    }

    /// Total shipment cost of the final matrix.
    ///
    /// # Panics
    ///
    /// Panics if the trace is empty.
    pub fn final_cost(&self, costs: &CostMatrix) -> f64 {
        self.cost_at(self.steps.len() - 1, costs)
    }

    /// Estimated bytes retained by the trace.
    pub fn memory_bytes(&self) -> usize {
        let mut total = mem::size_of::<Self>();
        for step in &self.steps {
            total += mem::size_of::<SolutionStep>();
            total += step.matrix.rows() * step.matrix.cols() * mem::size_of::<Option<f64>>();
            total += (step.matrix.rows() + step.matrix.cols()) * mem::size_of::<Option<f64>>();
        }
        total
    }

    /// Human-readable description of the given step.
    ///
    /// # Panics
    ///
    /// Panics if `step` is out of range.
    pub fn step_description(&self, step: usize) -> String {
        if step == 0 {
            return "Formed initial feasible solution".to_string();
        }
        // The pivot that produced step N is recorded on step N-1.
        match self.steps[step - 1].pivot {
            Some((row, col)) => {
                format!("Got solution {step} after rebuilding matrix with pivot at [{row}, {col}]")
            }
            None => format!("Got solution {step}"),
        }
    }

    /// One line per allocated, nonzero cell of the final matrix, 1-based.
    pub fn distribution_summary(&self) -> Vec<String> {
        let Some(step) = self.steps.last() else {
            return Vec::new();
        };
        step.matrix
            .basic_cells()
            .filter(|&(_, _, value)| value != 0.0)
            .map(|(row, col, value)| {
                format!(
                    "ship {value} units from source {} to destination {}",
                    row + 1,
                    col + 1
                )
            })
            .collect()
    }
}
