//! Balanced problem instance.

use serde::{Deserialize, Serialize};

use crate::error::SolveError;

use super::CostMatrix;

/// Whether (and how) the instance was balanced during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceState {
    /// Total supply already equalled total demand.
    Balanced,
    /// Supply exceeded demand; a zero-cost dummy destination absorbs the
    /// surplus.
    Overflow,
    /// Demand exceeded supply; a zero-cost dummy source covers the deficit.
    Shortage,
}

/// A normalized transportation problem: unit costs, supply per source,
/// demand per destination, with total supply equal to total demand.
///
/// Construction validates the raw input and balances it by appending a
/// single zero-cost dummy row or column when the totals differ. The
/// instance is immutable afterwards.
///
/// # Examples
///
/// ```
/// use transport_solver::models::{BalanceState, ProblemInstance};
///
/// // Demand 25 exceeds supply 20: a dummy source with supply 5 is added.
/// let problem = ProblemInstance::new(
///     vec![vec![1.0], vec![3.0]],
///     vec![10.0, 10.0],
///     vec![25.0],
/// )
/// .expect("well-formed");
///
/// assert_eq!(problem.balance_state(), BalanceState::Shortage);
/// assert_eq!(problem.num_sources(), 3);
/// assert_eq!(problem.supply(), &[10.0, 10.0, 5.0]);
/// assert_eq!(problem.costs().get(2, 0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    costs: CostMatrix,
    supply: Vec<f64>,
    demand: Vec<f64>,
    balance: BalanceState,
}

impl ProblemInstance {
    /// Normalizes raw input into a balanced instance.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidProblem`] when the supply or demand
    /// vector is empty, the cost matrix does not measure
    /// `supply.len() × demand.len()`, or any entry is negative or
    /// non-finite. This is a precondition check, not an algorithmic
    /// failure.
    pub fn new(
        costs: Vec<Vec<f64>>,
        supply: Vec<f64>,
        demand: Vec<f64>,
    ) -> Result<Self, SolveError> {
        if supply.is_empty() {
            return Err(SolveError::InvalidProblem("supply vector is empty".into()));
        }
        if demand.is_empty() {
            return Err(SolveError::InvalidProblem("demand vector is empty".into()));
        }
        let (rows, cols) = (supply.len(), demand.len());
        let costs = CostMatrix::from_rows(costs).ok_or_else(|| {
            SolveError::InvalidProblem("cost matrix rows have inconsistent lengths".into())
        })?;
        if costs.rows() != rows || costs.cols() != cols {
            return Err(SolveError::InvalidProblem(format!(
                "cost matrix is {}x{}, expected {rows}x{cols}",
                costs.rows(),
                costs.cols(),
            )));
        }
        if !costs.is_well_formed() {
            return Err(SolveError::InvalidProblem(
                "cost entries must be finite and non-negative".into(),
            ));
        }
        if !is_valid_quantities(&supply) || !is_valid_quantities(&demand) {
            return Err(SolveError::InvalidProblem(
                "supply and demand entries must be finite and non-negative".into(),
            ));
        }

        Ok(Self::balance(costs, supply, demand))
    }

    fn balance(mut costs: CostMatrix, mut supply: Vec<f64>, mut demand: Vec<f64>) -> Self {
        let total_supply: f64 = supply.iter().sum();
        let total_demand: f64 = demand.iter().sum();
        let balance = if total_supply > total_demand {
            demand.push(total_supply - total_demand);
            costs.push_zero_column();
            BalanceState::Overflow
        } else if total_demand > total_supply {
            supply.push(total_demand - total_supply);
            costs.push_zero_row();
            BalanceState::Shortage
        } else {
            BalanceState::Balanced
        };
        Self {
            costs,
            supply,
            demand,
            balance,
        }
    }

    /// The balanced unit cost matrix (dummy row/column included).
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Supply per source, dummy source included when present.
    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    /// Demand per destination, dummy destination included when present.
    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Number of sources after balancing.
    pub fn num_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations after balancing.
    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Target basis size for a basic feasible solution: `S + D - 1`.
    pub fn basis_size(&self) -> usize {
        self.num_sources() + self.num_destinations() - 1
    }

    /// How the instance was balanced.
    pub fn balance_state(&self) -> BalanceState {
        self.balance
    }

    /// A caller-facing note about the synthetic row/column, if any.
    pub fn balance_note(&self) -> Option<&'static str> {
        match self.balance {
            BalanceState::Balanced => None,
            BalanceState::Overflow => {
                Some("last destination is fictive and indicates unused resources")
            }
            BalanceState::Shortage => {
                Some("last source is fictive and indicates sufficient resources")
            }
        }
    }
}

fn is_valid_quantities(values: &[f64]) -> bool {
    values.iter().all(|&v| v.is_finite() && v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_instance_untouched() {
        let problem = ProblemInstance::new(
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![5.0, 5.0],
            vec![4.0, 6.0],
        )
        .expect("valid");
        assert_eq!(problem.balance_state(), BalanceState::Balanced);
        assert_eq!(problem.balance_note(), None);
        assert_eq!(problem.num_sources(), 2);
        assert_eq!(problem.num_destinations(), 2);
        assert_eq!(problem.basis_size(), 3);
    }

    #[test]
    fn test_overflow_appends_dummy_destination() {
        let problem = ProblemInstance::new(
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![10.0, 10.0],
            vec![4.0, 6.0],
        )
        .expect("valid");
        assert_eq!(problem.balance_state(), BalanceState::Overflow);
        assert_eq!(problem.demand(), &[4.0, 6.0, 10.0]);
        assert_eq!(problem.costs().get(0, 2), 0.0);
        assert_eq!(problem.costs().get(1, 2), 0.0);
        assert_eq!(
            problem.balance_note(),
            Some("last destination is fictive and indicates unused resources")
        );
        let total_supply: f64 = problem.supply().iter().sum();
        let total_demand: f64 = problem.demand().iter().sum();
        assert_eq!(total_supply, total_demand);
    }

    #[test]
    fn test_shortage_appends_dummy_source() {
        let problem =
            ProblemInstance::new(vec![vec![1.0], vec![3.0]], vec![10.0, 10.0], vec![25.0])
                .expect("valid");
        assert_eq!(problem.balance_state(), BalanceState::Shortage);
        assert_eq!(problem.supply(), &[10.0, 10.0, 5.0]);
        assert_eq!(problem.costs().get(2, 0), 0.0);
        assert_eq!(
            problem.balance_note(),
            Some("last source is fictive and indicates sufficient resources")
        );
    }

    #[test]
    fn test_rejects_empty_vectors() {
        assert!(matches!(
            ProblemInstance::new(vec![], vec![], vec![1.0]),
            Err(SolveError::InvalidProblem(_))
        ));
        assert!(matches!(
            ProblemInstance::new(vec![vec![1.0]], vec![1.0], vec![]),
            Err(SolveError::InvalidProblem(_))
        ));
    }

    #[test]
    fn test_rejects_mismatched_dimensions() {
        assert!(matches!(
            ProblemInstance::new(vec![vec![1.0, 2.0]], vec![1.0], vec![1.0]),
            Err(SolveError::InvalidProblem(_))
        ));
        assert!(matches!(
            ProblemInstance::new(vec![vec![1.0], vec![2.0]], vec![1.0], vec![1.0]),
            Err(SolveError::InvalidProblem(_))
        ));
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(matches!(
            ProblemInstance::new(vec![vec![-1.0]], vec![1.0], vec![1.0]),
            Err(SolveError::InvalidProblem(_))
        ));
        assert!(matches!(
            ProblemInstance::new(vec![vec![1.0]], vec![f64::INFINITY], vec![1.0]),
            Err(SolveError::InvalidProblem(_))
        ));
    }
}
