//! Sparse solutions of linear inequality systems via reweighted ℓ1.
//!
//! This library finds a sparse point satisfying a feasible system of
//! linear inequalities `A·x ≤ b`. Exact cardinality minimization is
//! NP-hard; the crate approximates it with two classical convex
//! relaxations:
//!
//! - **Plain ℓ1 heuristic**: a single solve of
//!   `minimize ‖x‖₁ subject to A·x ≤ b`.
//! - **Reweighted ℓ1 engine**: repeatedly solves the weighted problem
//!   `minimize Σ wᵢ·|xᵢ|` and refits `wᵢ ← 1/(δ + |xᵢ|)` from the
//!   previous solution — a majorize-minimize scheme for the concave
//!   log-sum sparsity surrogate `Σ log(δ + |xᵢ|)`.
//!
//! The LP solves go through the [`LpOracle`] trait; the default backend
//! lowers the weighted-ℓ1 objective to a plain LP by variable splitting
//! and hands it to the `microlp` simplex solver. Alternative backends
//! (or scripted stubs for testing) can be substituted without touching
//! the sparsification logic.
//!
//! # Example
//!
//! ```ignore
//! use sparsel1::{random_feasible, sparsify, SparsifySettings};
//!
//! let prob = random_feasible(100, 50, 1)?;
//! let settings = SparsifySettings::default().with_max_iters(15);
//! let sol = sparsify(&prob, &settings)?;
//!
//! println!("nonzeros: {}", sol.support.len());
//! for point in &sol.trajectory {
//!     println!("iter {}: nnz {}", point.iteration, point.nnz);
//! }
//! ```
//!
//! # References
//!
//! - Candès, Wakin & Boyd, "Enhancing sparsity by reweighted ℓ1
//!   minimization", J. Fourier Anal. Appl. 14 (2008).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod generate;
pub mod oracle;
pub mod problem;
pub mod settings;
pub mod support;

// Re-export main types
pub use engine::{
    minimize_l1, minimize_l1_with, sparsify, sparsify_with, L1Solution, ReweightedEngine,
    SparsifySolution, TrajectoryPoint,
};
pub use error::{SparsifyError, SparsifyResult};
pub use generate::random_feasible;
pub use oracle::{LpOracle, MicrolpOracle, OracleSolution, OracleStatus};
pub use problem::ProblemInstance;
pub use settings::SparsifySettings;
pub use support::{cardinality, support};
