//! Simplex-backed LP oracle.
//!
//! Lowers the weighted-ℓ1 objective to a plain linear program by the
//! standard splitting: auxiliary variables `u_i ≥ x_i`, `u_i ≥ -x_i`
//! and objective `Σ w_i·u_i`, then solves it with the `microlp` simplex.

use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use super::{LpOracle, OracleSolution};
use crate::problem::ProblemInstance;

/// LP oracle backed by the `microlp` simplex solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpOracle;

impl MicrolpOracle {
    /// Create a new oracle.
    pub fn new() -> Self {
        Self
    }
}

impl LpOracle for MicrolpOracle {
    fn solve_weighted_l1(&self, prob: &ProblemInstance, weights: &[f64]) -> OracleSolution {
        let n = prob.num_vars();
        let m = prob.num_constraints();
        debug_assert_eq!(weights.len(), n);

        let mut lp = Problem::new(OptimizationDirection::Minimize);

        // x_j free, u_j >= 0 carrying the weighted objective.
        let xs: Vec<_> = (0..n)
            .map(|_| lp.add_var(0.0, (f64::NEG_INFINITY, f64::INFINITY)))
            .collect();
        let us: Vec<_> = weights
            .iter()
            .map(|&w| lp.add_var(w, (0.0, f64::INFINITY)))
            .collect();

        // A x <= b. A is CSC, so gather each row while walking columns.
        let mut rows: Vec<Vec<(microlp::Variable, f64)>> = vec![Vec::new(); m];
        for (j, col) in prob.a().outer_iterator().enumerate() {
            for (i, &val) in col.iter() {
                rows[i].push((xs[j], val));
            }
        }
        for (row, &rhs) in rows.into_iter().zip(prob.b()) {
            let mut expr = LinearExpr::empty();
            for (var, coeff) in row {
                expr.add(var, coeff);
            }
            lp.add_constraint(expr, ComparisonOp::Le, rhs);
        }

        // Splitting constraints: x_j - u_j <= 0 and -x_j - u_j <= 0.
        for (&x, &u) in xs.iter().zip(&us) {
            let mut upper = LinearExpr::empty();
            upper.add(x, 1.0);
            upper.add(u, -1.0);
            lp.add_constraint(upper, ComparisonOp::Le, 0.0);

            let mut lower = LinearExpr::empty();
            lower.add(x, -1.0);
            lower.add(u, -1.0);
            lp.add_constraint(lower, ComparisonOp::Le, 0.0);
        }

        match lp.solve() {
            Ok(solution) => {
                let x = xs.iter().map(|&v| *solution.var_value(v)).collect();
                OracleSolution::optimal(x, solution.objective())
            }
            Err(microlp::Error::Infeasible) => OracleSolution::infeasible(),
            Err(e) => {
                log::warn!("weighted-l1 LP solve failed: {}", e);
                OracleSolution::solver_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::OracleStatus;
    use crate::problem::triplets_to_csc;

    #[test]
    fn test_zero_feasible_gives_zero() {
        // x <= 1: the origin is feasible, so the l1 minimum is x = 0.
        let a = triplets_to_csc(1, 2, &[(0, 0, 1.0), (0, 1, 1.0)]);
        let prob = ProblemInstance::new(a, vec![1.0]).unwrap();

        let sol = MicrolpOracle::new().solve_weighted_l1(&prob, &[1.0, 1.0]);
        assert_eq!(sol.status, OracleStatus::Optimal);
        assert!(sol.obj_val.abs() < 1e-9);
        assert!(sol.x.iter().all(|xi| xi.abs() < 1e-9));
    }

    #[test]
    fn test_shifted_feasible_region() {
        // -x0 <= -3 means x0 >= 3; minimum of |x0| + |x1| is (3, 0).
        let a = triplets_to_csc(1, 2, &[(0, 0, -1.0)]);
        let prob = ProblemInstance::new(a, vec![-3.0]).unwrap();

        let sol = MicrolpOracle::new().solve_weighted_l1(&prob, &[1.0, 1.0]);
        assert_eq!(sol.status, OracleStatus::Optimal);
        assert!((sol.x[0] - 3.0).abs() < 1e-9);
        assert!(sol.x[1].abs() < 1e-9);
        assert!((sol.obj_val - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_weights_steer_the_solution() {
        // x0 + x1 >= 2 (as -x0 - x1 <= -2). With a heavy weight on x0 the
        // optimum puts all mass on x1, and vice versa.
        let a = triplets_to_csc(1, 2, &[(0, 0, -1.0), (0, 1, -1.0)]);
        let prob = ProblemInstance::new(a, vec![-2.0]).unwrap();

        let sol = MicrolpOracle::new().solve_weighted_l1(&prob, &[100.0, 1.0]);
        assert_eq!(sol.status, OracleStatus::Optimal);
        assert!(sol.x[0].abs() < 1e-9);
        assert!((sol.x[1] - 2.0).abs() < 1e-9);

        let sol = MicrolpOracle::new().solve_weighted_l1(&prob, &[1.0, 100.0]);
        assert!((sol.x[0] - 2.0).abs() < 1e-9);
        assert!(sol.x[1].abs() < 1e-9);
    }

    #[test]
    fn test_infeasible_detected() {
        // 0·x <= -1 is unsatisfiable.
        let a = triplets_to_csc(1, 1, &[]);
        let prob = ProblemInstance::new(a, vec![-1.0]).unwrap();

        let sol = MicrolpOracle::new().solve_weighted_l1(&prob, &[1.0]);
        assert_eq!(sol.status, OracleStatus::Infeasible);
        assert!(sol.x.is_empty());
    }
}
