//! Random feasible instance generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use sprs::TriMat;

use crate::error::SparsifyResult;
use crate::problem::ProblemInstance;

/// Generate a random instance that is strictly feasible by construction.
///
/// Entries of `A` and a seed point `x0` are sampled from the standard
/// normal distribution, then `b = A·x0 + ε` with `ε` strictly positive
/// componentwise. `x0` is therefore strictly interior, so every oracle
/// call on the instance has an optimal point.
pub fn random_feasible(m: usize, n: usize, seed: u64) -> SparsifyResult<ProblemInstance> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut tri = TriMat::new((m, n));
    let mut a_dense = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            let val: f64 = rng.sample(StandardNormal);
            a_dense[i * n + j] = val;
            tri.add_triplet(i, j, val);
        }
    }

    let x0: Vec<f64> = (0..n).map(|_| rng.sample::<f64, _>(StandardNormal)).collect();

    let b: Vec<f64> = (0..m)
        .map(|i| {
            let row_dot: f64 = (0..n).map(|j| a_dense[i * n + j] * x0[j]).sum();
            row_dot + rng.gen_range(0.1..1.0)
        })
        .collect();

    ProblemInstance::new(tri.to_csc(), b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let prob = random_feasible(20, 10, 7).unwrap();
        assert_eq!(prob.num_constraints(), 20);
        assert_eq!(prob.num_vars(), 10);
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = random_feasible(10, 5, 42).unwrap();
        let b = random_feasible(10, 5, 42).unwrap();
        assert_eq!(a.b(), b.b());
        assert_eq!(a.a().to_dense(), b.a().to_dense());

        let c = random_feasible(10, 5, 43).unwrap();
        assert_ne!(a.b(), c.b());
    }

    #[test]
    fn test_origin_not_always_feasible() {
        // The generator guarantees feasibility of x0, not of the origin;
        // with m >> n some row of A·0 <= b is typically violated.
        let prob = random_feasible(100, 5, 1).unwrap();
        let zeros = vec![0.0; 5];
        assert!(prob.max_violation(&zeros) > 0.0);
    }

    #[test]
    fn test_zero_vars_rejected() {
        assert!(random_feasible(10, 0, 1).is_err());
    }
}
