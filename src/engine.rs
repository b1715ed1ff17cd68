//! Reweighted-ℓ1 sparsification engine and the plain ℓ1 heuristic.
//!
//! The engine approximates cardinality minimization over `A·x ≤ b` by a
//! majorize-minimize scheme: `Σ log(δ + |x_i|)` is concave, so each
//! iteration minimizes its first-order majorizer at the current iterate,
//! which is the convex weighted-ℓ1 subproblem with weights
//! `w_i = 1/(δ + |x_i|)`. The recurrence is inherently sequential: each
//! solve depends on the weights produced from the previous solution.

use crate::error::{SparsifyError, SparsifyResult};
use crate::oracle::{LpOracle, MicrolpOracle, OracleStatus};
use crate::problem::ProblemInstance;
use crate::settings::SparsifySettings;
use crate::support::support;

/// One completed iteration: iteration index and support size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryPoint {
    /// Iteration index k (0-based).
    pub iteration: usize,

    /// Support size `|{i : |x*_i| > δ}|` of that iteration's solution.
    pub nnz: usize,
}

/// Result of a sparsification run.
#[derive(Debug, Clone)]
pub struct SparsifySolution {
    /// Solution from the final completed iteration.
    pub x: Vec<f64>,

    /// Weighted-ℓ1 objective value of the final solve.
    pub obj_val: f64,

    /// Support of `x` under the configured threshold.
    pub support: Vec<usize>,

    /// One `(k, nnz_k)` entry per completed iteration.
    pub trajectory: Vec<TrajectoryPoint>,

    /// Number of iterations completed.
    pub iterations: usize,

    /// Whether the early-stop criterion fired before the budget ran out.
    pub converged_early: bool,
}

/// Result of the plain ℓ1 heuristic.
#[derive(Debug, Clone)]
pub struct L1Solution {
    /// The ℓ1-minimal feasible point.
    pub x: Vec<f64>,

    /// `‖x‖₁` at the solution.
    pub obj_val: f64,

    /// Support of `x` under the given threshold.
    pub support: Vec<usize>,
}

/// Reweighted-ℓ1 sparsification engine.
///
/// Owns the weight vector across iterations. Each run starts from uniform
/// weights, issues one blocking oracle call per iteration, records the
/// support size, and refits the weights from the returned solution.
pub struct ReweightedEngine<'a, O: LpOracle> {
    oracle: &'a O,
    settings: SparsifySettings,
}

impl<'a, O: LpOracle> ReweightedEngine<'a, O> {
    /// Create an engine, validating the settings.
    pub fn new(oracle: &'a O, settings: SparsifySettings) -> SparsifyResult<Self> {
        settings.validate()?;
        Ok(Self { oracle, settings })
    }

    /// Run the reweighting loop on a problem instance.
    ///
    /// Fails with [`SparsifyError::SolverDidNotConverge`] as soon as any
    /// oracle call returns a non-optimal status; the error carries the
    /// failing iteration index, the weights that drove it, and the
    /// trajectory collected so far. No weight update happens on failure.
    pub fn run(&self, prob: &ProblemInstance) -> SparsifyResult<SparsifySolution> {
        let n = prob.num_vars();
        let delta = self.settings.zero_threshold;

        let mut weights = vec![1.0; n];
        let mut trajectory: Vec<TrajectoryPoint> = Vec::with_capacity(self.settings.max_iters);
        let mut last = None;
        let mut converged_early = false;

        for k in 0..self.settings.max_iters {
            let sol = self.oracle.solve_weighted_l1(prob, &weights);

            if sol.status != OracleStatus::Optimal {
                return Err(SparsifyError::SolverDidNotConverge {
                    iteration: k,
                    weights,
                    trajectory,
                });
            }

            let supp = support(&sol.x, delta);
            trajectory.push(TrajectoryPoint {
                iteration: k,
                nnz: supp.len(),
            });

            if self.settings.verbose {
                log::info!(
                    "iter {:>3} | nnz: {:>5} | obj: {:.6e}",
                    k,
                    supp.len(),
                    sol.obj_val
                );
            }

            // w_i <- 1/(delta + |x_i|): the linearization of log(delta + |x_i|)
            // at the current solution. Positive for every i since delta > 0.
            for (w, xi) in weights.iter_mut().zip(&sol.x) {
                *w = 1.0 / (delta + xi.abs());
            }

            last = Some(sol);

            if let Some(stable) = self.settings.stable_iters {
                if trajectory.len() >= stable
                    && trajectory[trajectory.len() - stable..]
                        .iter()
                        .all(|p| p.nnz == trajectory[trajectory.len() - 1].nnz)
                {
                    converged_early = true;
                    break;
                }
            }
        }

        // max_iters >= 1, so at least one iteration completed.
        let sol = last.expect("iteration budget is positive");
        let support = support(&sol.x, delta);
        let iterations = trajectory.len();

        Ok(SparsifySolution {
            x: sol.x,
            obj_val: sol.obj_val,
            support,
            trajectory,
            iterations,
            converged_early,
        })
    }
}

/// Run the reweighted-ℓ1 heuristic with a caller-supplied oracle.
pub fn sparsify_with<O: LpOracle>(
    oracle: &O,
    prob: &ProblemInstance,
    settings: &SparsifySettings,
) -> SparsifyResult<SparsifySolution> {
    ReweightedEngine::new(oracle, settings.clone())?.run(prob)
}

/// Run the reweighted-ℓ1 heuristic with the default simplex oracle.
pub fn sparsify(
    prob: &ProblemInstance,
    settings: &SparsifySettings,
) -> SparsifyResult<SparsifySolution> {
    sparsify_with(&MicrolpOracle::new(), prob, settings)
}

/// Solve `minimize ‖x‖₁ subject to A·x ≤ b` with a caller-supplied oracle.
///
/// One-shot unit-weight call; a non-optimal oracle status is terminal.
/// The support is evaluated under `threshold`.
pub fn minimize_l1_with<O: LpOracle>(
    oracle: &O,
    prob: &ProblemInstance,
    threshold: f64,
) -> SparsifyResult<L1Solution> {
    if !(threshold > 0.0) || !threshold.is_finite() {
        return Err(SparsifyError::InvalidSettings(format!(
            "threshold must be a positive finite value, got {}",
            threshold
        )));
    }

    let weights = vec![1.0; prob.num_vars()];
    let sol = oracle.solve_weighted_l1(prob, &weights);

    if sol.status != OracleStatus::Optimal {
        return Err(SparsifyError::SolverDidNotConverge {
            iteration: 0,
            weights,
            trajectory: Vec::new(),
        });
    }

    let support = support(&sol.x, threshold);
    Ok(L1Solution {
        x: sol.x,
        obj_val: sol.obj_val,
        support,
    })
}

/// Solve `minimize ‖x‖₁ subject to A·x ≤ b` with the default simplex oracle.
pub fn minimize_l1(prob: &ProblemInstance, threshold: f64) -> SparsifyResult<L1Solution> {
    minimize_l1_with(&MicrolpOracle::new(), prob, threshold)
}
