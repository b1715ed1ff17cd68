//! Configuration settings for the sparsification engine.

use crate::error::{SparsifyError, SparsifyResult};

/// Settings for the reweighted-ℓ1 sparsification engine.
#[derive(Debug, Clone)]
pub struct SparsifySettings {
    /// Number of reweighting iterations (the iteration budget K).
    pub max_iters: usize,

    /// Threshold δ below which a coordinate counts as zero.
    ///
    /// The same δ feeds the weight-update denominator `1/(δ + |x_i|)`;
    /// reported cardinality and the weighting dynamics are deliberately
    /// coupled through this one value.
    pub zero_threshold: f64,

    /// Stop early once the support size has been unchanged for this many
    /// consecutive iterations (None = always run the full budget).
    ///
    /// Off by default: the fixed iteration budget is the reference
    /// behavior, early stopping is an opt-in refinement.
    pub stable_iters: Option<usize>,

    /// Print per-iteration progress via `log::info!`.
    pub verbose: bool,
}

impl Default for SparsifySettings {
    fn default() -> Self {
        Self {
            max_iters: 15,
            zero_threshold: 1e-8,
            stable_iters: None,
            verbose: false,
        }
    }
}

impl SparsifySettings {
    /// Set the iteration budget.
    pub fn with_max_iters(mut self, iters: usize) -> Self {
        self.max_iters = iters;
        self
    }

    /// Set the zero threshold δ.
    pub fn with_zero_threshold(mut self, threshold: f64) -> Self {
        self.zero_threshold = threshold;
        self
    }

    /// Enable early stopping on a stable support.
    pub fn with_stable_iters(mut self, iters: usize) -> Self {
        self.stable_iters = Some(iters);
        self
    }

    /// Create settings with verbose output enabled.
    pub fn verbose() -> Self {
        let mut s = Self::default();
        s.verbose = true;
        s
    }

    /// Validate the settings.
    pub fn validate(&self) -> SparsifyResult<()> {
        if self.max_iters == 0 {
            return Err(SparsifyError::InvalidSettings(
                "max_iters must be positive".to_string(),
            ));
        }
        if !(self.zero_threshold > 0.0) || !self.zero_threshold.is_finite() {
            return Err(SparsifyError::InvalidSettings(format!(
                "zero_threshold must be a positive finite value, got {}",
                self.zero_threshold
            )));
        }
        if self.stable_iters == Some(0) {
            return Err(SparsifyError::InvalidSettings(
                "stable_iters must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}
