//! Problem data and validation.

use sprs::{CsMat, TriMat};

use crate::error::{SparsifyError, SparsifyResult};

/// Sparse matrix in CSC format.
pub type SparseCsc = sprs::CsMatI<f64, usize>;

/// A system of linear inequalities `A·x ≤ b`.
///
/// The feasible region is `{x ∈ ℝⁿ : A·x ≤ b}` with `A` an m×n matrix.
/// Instances are validated once at construction and immutable afterwards,
/// so they can be shared read-only between heuristics.
///
/// # Dimensions
///
/// - `n`: number of variables (columns of A)
/// - `m`: number of inequality rows (length of b)
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    /// Constraint matrix A (m × n, CSC format)
    a: SparseCsc,

    /// Right-hand side b (length m)
    b: Vec<f64>,
}

impl ProblemInstance {
    /// Create a problem instance, validating dimensions.
    ///
    /// Fails with [`SparsifyError::InvalidProblem`] if `A` has no columns
    /// or the number of rows of `A` disagrees with the length of `b`.
    pub fn new(a: SparseCsc, b: Vec<f64>) -> SparsifyResult<Self> {
        if a.cols() == 0 {
            return Err(SparsifyError::InvalidProblem(
                "A must have at least one column".to_string(),
            ));
        }
        if a.rows() != b.len() {
            return Err(SparsifyError::InvalidProblem(format!(
                "A has {} rows but b has length {}",
                a.rows(),
                b.len()
            )));
        }
        Ok(Self { a, b })
    }

    /// Create a problem instance from a dense row-major coefficient slice.
    ///
    /// `coeffs` must have length `m * n`.
    pub fn from_dense(m: usize, n: usize, coeffs: &[f64], b: Vec<f64>) -> SparsifyResult<Self> {
        if coeffs.len() != m * n {
            return Err(SparsifyError::InvalidProblem(format!(
                "coefficient slice has length {}, expected {}",
                coeffs.len(),
                m * n
            )));
        }

        let mut tri = TriMat::new((m, n));
        for i in 0..m {
            for j in 0..n {
                let val = coeffs[i * n + j];
                if val != 0.0 {
                    tri.add_triplet(i, j, val);
                }
            }
        }
        Self::new(tri.to_csc(), b)
    }

    /// Get the number of variables (n)
    pub fn num_vars(&self) -> usize {
        self.a.cols()
    }

    /// Get the number of inequality rows (m)
    pub fn num_constraints(&self) -> usize {
        self.b.len()
    }

    /// The constraint matrix A.
    pub fn a(&self) -> &SparseCsc {
        &self.a
    }

    /// The right-hand side b.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Largest constraint violation `max_i (A·x − b)_i` at a point.
    ///
    /// Non-positive for feasible points; useful for checking oracle output
    /// against the solver's feasibility tolerance.
    pub fn max_violation(&self, x: &[f64]) -> f64 {
        assert_eq!(x.len(), self.num_vars());

        let mut ax = vec![0.0; self.num_constraints()];
        for (j, col) in self.a.outer_iterator().enumerate() {
            for (i, &val) in col.iter() {
                ax[i] += val * x[j];
            }
        }

        ax.iter()
            .zip(&self.b)
            .map(|(axi, bi)| axi - bi)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Convert triplets to a CSC sparse matrix.
pub(crate) fn triplets_to_csc(nrows: usize, ncols: usize, triplets: &[(usize, usize, f64)]) -> CsMat<f64> {
    let mut tri = TriMat::new((nrows, ncols));
    for &(row, col, val) in triplets {
        tri.add_triplet(row, col, val);
    }
    tri.to_csc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_instance() {
        // x0 + x1 <= 1, x0 - x1 <= 0
        let a = triplets_to_csc(2, 2, &[(0, 0, 1.0), (0, 1, 1.0), (1, 0, 1.0), (1, 1, -1.0)]);
        let prob = ProblemInstance::new(a, vec![1.0, 0.0]).unwrap();

        assert_eq!(prob.num_vars(), 2);
        assert_eq!(prob.num_constraints(), 2);
    }

    #[test]
    fn test_zero_vars_rejected() {
        let a = CsMat::empty(sprs::CompressedStorage::CSC, 0);
        let err = ProblemInstance::new(a, vec![]).unwrap_err();
        assert!(matches!(err, SparsifyError::InvalidProblem(_)));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let a = triplets_to_csc(2, 3, &[(0, 0, 1.0), (1, 2, -1.0)]);
        let err = ProblemInstance::new(a, vec![1.0]).unwrap_err();
        assert!(matches!(err, SparsifyError::InvalidProblem(_)));
    }

    #[test]
    fn test_from_dense() {
        let prob =
            ProblemInstance::from_dense(2, 2, &[1.0, 0.0, 0.0, 1.0], vec![2.0, 3.0]).unwrap();
        assert_eq!(prob.num_vars(), 2);

        // x <= (2, 3): the identity rows carry over
        assert!(prob.max_violation(&[2.0, 3.0]).abs() < 1e-12);
        assert!(prob.max_violation(&[0.0, 0.0]) < 0.0);
        assert!(prob.max_violation(&[4.0, 0.0]) > 0.0);
    }

    #[test]
    fn test_from_dense_bad_length() {
        let err = ProblemInstance::from_dense(2, 2, &[1.0, 0.0, 0.0], vec![2.0, 3.0]).unwrap_err();
        assert!(matches!(err, SparsifyError::InvalidProblem(_)));
    }

    #[test]
    fn test_max_violation() {
        // -x0 <= -1 means x0 >= 1
        let a = triplets_to_csc(1, 1, &[(0, 0, -1.0)]);
        let prob = ProblemInstance::new(a, vec![-1.0]).unwrap();

        assert!(prob.max_violation(&[2.0]) < 0.0);
        assert!((prob.max_violation(&[1.0])).abs() < 1e-12);
        assert!((prob.max_violation(&[0.0]) - 1.0).abs() < 1e-12);
    }
}
