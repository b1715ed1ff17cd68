//! Support evaluation: which coordinates of a vector count as non-zero.

/// Indices `i` with `|x_i| > threshold`.
///
/// Pure function of its inputs. Must be applied with the same threshold
/// used for the weight updates, otherwise reported cardinality and the
/// weighting dynamics diverge.
pub fn support(x: &[f64], threshold: f64) -> Vec<usize> {
    x.iter()
        .enumerate()
        .filter(|(_, xi)| xi.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Number of coordinates with `|x_i| > threshold`.
pub fn cardinality(x: &[f64], threshold: f64) -> usize {
    x.iter().filter(|xi| xi.abs() > threshold).count()
}
