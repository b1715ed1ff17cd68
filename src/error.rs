//! Error types for the sparsification heuristics.

use thiserror::Error;

use crate::engine::TrajectoryPoint;

/// Errors that can occur while setting up or running a heuristic.
#[derive(Error, Debug)]
pub enum SparsifyError {
    /// Problem validation failed
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// Settings validation failed
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// The LP oracle returned a non-optimal status.
    ///
    /// Fatal to the current run. Carries the failing iteration index, the
    /// weight vector that drove the failing solve, and the partial
    /// trajectory collected before the failure.
    #[error("LP oracle did not reach an optimal point at iteration {iteration}")]
    SolverDidNotConverge {
        /// Iteration index of the failing oracle call (0-based).
        iteration: usize,

        /// Weight vector in effect for the failing solve.
        weights: Vec<f64>,

        /// Trajectory entries recorded before the failure.
        trajectory: Vec<TrajectoryPoint>,
    },
}

/// Result type for sparsification operations.
pub type SparsifyResult<T> = Result<T, SparsifyError>;
