use ndarray::{Array1, ArrayView2};

use crate::error::Result;
use crate::feature_selection::top_k::KBudget;
use crate::math::partition::ClassSizes;

/// Score vector produced by a [`FeatureScorer`] together with the clamped k.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScores {
    /// One score per column of the input. NaN marks an undefined score.
    pub scores: Array1<f64>,
    pub k: KBudget,
}

impl FeatureScores {
    pub fn num_features(&self) -> usize {
        self.scores.len()
    }

    /// Number of features whose score is undefined.
    pub fn num_undefined(&self) -> usize {
        self.scores.iter().filter(|s| s.is_nan()).count()
    }
}

/// A two-class, per-feature scoring statistic.
///
/// Implementors only provide the formula in [`FeatureScorer::score_classes`];
/// validation of the class sizes and the k clamp are shared.
pub trait FeatureScorer: Send + Sync {
    /// Human readable name, used in logs.
    fn name(&self) -> &str;

    /// Per-feature scores for `data` whose rows are split as `sizes`.
    ///
    /// A zero denominator yields NaN for that feature rather than an error.
    fn score_classes(&self, data: ArrayView2<f64>, sizes: ClassSizes) -> Result<Array1<f64>>;

    /// Validate `class_sizes`, clamp `top_k` to the column count and score every feature.
    fn score(&self, data: ArrayView2<f64>, class_sizes: &[usize], top_k: isize) -> Result<FeatureScores> {
        let sizes = ClassSizes::from_slice(class_sizes)?;
        let k = KBudget::clamp(top_k, data.ncols())?;

        log::debug!(
            "Scoring {} features over {}+{} instances with {}",
            data.ncols(),
            sizes.n1,
            sizes.n2,
            self.name()
        );
        let scores = self.score_classes(data, sizes)?;

        let result = FeatureScores { scores, k };
        let undefined = result.num_undefined();
        if undefined > 0 {
            log::warn!(
                "{}: {} of {} features have an undefined score (zero spread) and rank last",
                self.name(),
                undefined,
                result.num_features()
            );
        }
        Ok(result)
    }
}
