//! LP oracle abstraction and the default simplex-backed implementation.

mod lp;

pub use lp::MicrolpOracle;

use crate::problem::ProblemInstance;

/// Status of an oracle solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleStatus {
    /// Optimal solution found.
    Optimal,

    /// The constraint system is infeasible.
    Infeasible,

    /// The solver failed (unbounded subproblem, numerical breakdown, ...).
    SolverError,
}

/// Result from a single oracle call.
#[derive(Debug, Clone)]
pub struct OracleSolution {
    /// Solve status. Callers treat both non-optimal statuses uniformly
    /// as a failure signal.
    pub status: OracleStatus,

    /// Primal solution x (length n, empty unless status is optimal).
    pub x: Vec<f64>,

    /// Objective value at the solution (infinity unless optimal).
    pub obj_val: f64,
}

impl OracleSolution {
    /// Create an optimal result.
    pub fn optimal(x: Vec<f64>, obj_val: f64) -> Self {
        Self {
            status: OracleStatus::Optimal,
            x,
            obj_val,
        }
    }

    /// Create an infeasible result.
    pub fn infeasible() -> Self {
        Self {
            status: OracleStatus::Infeasible,
            x: Vec::new(),
            obj_val: f64::INFINITY,
        }
    }

    /// Create a solver-error result.
    pub fn solver_error() -> Self {
        Self {
            status: OracleStatus::SolverError,
            x: Vec::new(),
            obj_val: f64::INFINITY,
        }
    }
}

/// Capability interface for the weighted-ℓ1 linear program.
///
/// An oracle solves `minimize Σ_i w_i·|x_i| subject to A·x ≤ b` and
/// reports the optimal point or a failure status. The plain ℓ1 objective
/// is the unit-weight special case. Abstracting the solver behind this
/// trait keeps the sparsification logic backend-agnostic and lets tests
/// drive the engine with scripted results.
pub trait LpOracle {
    /// Solve the weighted-ℓ1 subproblem.
    ///
    /// `weights` must have length `prob.num_vars()` with every entry
    /// strictly positive.
    fn solve_weighted_l1(&self, prob: &ProblemInstance, weights: &[f64]) -> OracleSolution;
}
