//! The three two-class scoring statistics.
//!
//! Every statistic is computed column-wise from the moments of the two class
//! blocks. Where the denominator of a feature is exactly zero the score is NaN,
//! which the top-k ranking always places last.

use ndarray::{Array1, ArrayView2, Zip};

use crate::error::Result;
use crate::feature_selection::scorer_trait::{FeatureScorer, FeatureScores};
use crate::math::moments::{moments, Moments};
use crate::math::partition::{split_classes, ClassSizes};

/// Element-wise `numerator / denominator`, NaN where the denominator is zero.
fn ratio_or_nan(numerator: &Array1<f64>, denominator: &Array1<f64>) -> Array1<f64> {
    Zip::from(numerator)
        .and(denominator)
        .map_collect(|&n, &d| if d == 0.0 { f64::NAN } else { n / d })
}

fn class_moments(data: ArrayView2<f64>, sizes: ClassSizes) -> Result<(Moments, Moments)> {
    let (class1, class2) = split_classes(&data, sizes)?;
    Ok((moments(&class1)?, moments(&class2)?))
}

/// Fisher discriminant ratio, `|m1 - m2| / (s1 + s2)`.
///
/// A feature that is constant within each class has `s1 + s2 == 0` and scores
/// NaN even when the two class values differ, so it ranks below every defined
/// score, including 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fisher;

impl FeatureScorer for Fisher {
    fn name(&self) -> &str {
        "fisher"
    }

    fn score_classes(&self, data: ArrayView2<f64>, sizes: ClassSizes) -> Result<Array1<f64>> {
        let (c1, c2) = class_moments(data, sizes)?;
        let separation = (&c1.mean - &c2.mean).mapv(f64::abs);
        let spread = &c1.std + &c2.std;
        Ok(ratio_or_nan(&separation, &spread))
    }
}

/// Between-class variance over total variance,
/// `[(m1 - m)^2 + (m2 - m)^2] / (2 * s^2)` where `m` and `s` are taken over all rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationWithClass;

impl FeatureScorer for CorrelationWithClass {
    fn name(&self) -> &str {
        "correlation_with_class"
    }

    fn score_classes(&self, data: ArrayView2<f64>, sizes: ClassSizes) -> Result<Array1<f64>> {
        let (c1, c2) = class_moments(data, sizes)?;
        let all = moments(&data)?;

        let between = (&c1.mean - &all.mean).mapv(|d| d * d) + (&c2.mean - &all.mean).mapv(|d| d * d);
        let total = all.variance() * 2.0;
        Ok(ratio_or_nan(&between, &total))
    }
}

/// Welch two-sample t-statistic magnitude with population variances,
/// `|m1 - m2| / sqrt(s1^2 / n1 + s2^2 / n2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TTest;

impl FeatureScorer for TTest {
    fn name(&self) -> &str {
        "t_test"
    }

    fn score_classes(&self, data: ArrayView2<f64>, sizes: ClassSizes) -> Result<Array1<f64>> {
        let (c1, c2) = class_moments(data, sizes)?;
        let separation = (&c1.mean - &c2.mean).mapv(f64::abs);
        let standard_error =
            (c1.variance() / sizes.n1 as f64 + c2.variance() / sizes.n2 as f64).mapv(f64::sqrt);
        Ok(ratio_or_nan(&separation, &standard_error))
    }
}

/// Fisher scores of every feature; `top_k` is only clamped to the column count.
pub fn fisher(data: ArrayView2<f64>, class_sizes: &[usize], top_k: isize) -> Result<FeatureScores> {
    Fisher.score(data, class_sizes, top_k)
}

/// Correlation-with-class scores of every feature.
pub fn feature_correlation_with_class(
    data: ArrayView2<f64>,
    class_sizes: &[usize],
    top_k: isize,
) -> Result<FeatureScores> {
    CorrelationWithClass.score(data, class_sizes, top_k)
}

/// Welch t-statistic scores of every feature.
pub fn t_test(data: ArrayView2<f64>, class_sizes: &[usize], top_k: isize) -> Result<FeatureScores> {
    TTest.score(data, class_sizes, top_k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;
    use ndarray::array;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_fisher_known_values() {
        // class1 = {[2,3]}, class2 = {[4,1],[6,5]}
        // m1 = [2,3], s1 = [0,0]; m2 = [5,3], s2 = [1,2]
        let x = array![[2.0, 3.0], [4.0, 1.0], [6.0, 5.0]];
        let res = fisher(x.view(), &[1, 2], 2).unwrap();
        assert!(close(res.scores[0], 3.0));
        assert!(close(res.scores[1], 0.0));
    }

    #[test]
    fn test_correlation_known_values() {
        // feature 0: m = 4, m1 = 2, m2 = 5, var = 8/3
        // [(2-4)^2 + (5-4)^2] / (2 * 8/3) = 5 / (16/3) = 15/16
        let x = array![[2.0, 3.0], [4.0, 1.0], [6.0, 5.0]];
        let res = feature_correlation_with_class(x.view(), &[1, 2], 2).unwrap();
        assert!(close(res.scores[0], 15.0 / 16.0));
        // feature 1: m = m1 = m2 = 3
        assert!(close(res.scores[1], 0.0));
    }

    #[test]
    fn test_t_test_known_values() {
        // feature 0: |2 - 5| / sqrt(0/1 + 1/2)
        let x = array![[2.0, 3.0], [4.0, 1.0], [6.0, 5.0]];
        let res = t_test(x.view(), &[1, 2], 2).unwrap();
        assert!(close(res.scores[0], 3.0 / 0.5f64.sqrt()));
        assert!(close(res.scores[1], 0.0));
    }

    #[test]
    fn test_zero_spread_is_nan() {
        let x = array![[1.0, 7.0], [1.0, 8.0], [1.0, 2.0], [1.0, 3.0]];
        for scores in [
            fisher(x.view(), &[2, 2], 2).unwrap(),
            feature_correlation_with_class(x.view(), &[2, 2], 2).unwrap(),
            t_test(x.view(), &[2, 2], 2).unwrap(),
        ] {
            assert!(scores.scores[0].is_nan());
            assert!(scores.scores[1].is_finite());
            assert_eq!(scores.num_undefined(), 1);
        }
    }

    #[test]
    fn test_fisher_constant_classes_rank_below_zero_score() {
        // feature 0 separates the classes perfectly but has no within-class spread
        let x = array![[1.0, 0.1], [1.0, 0.9], [5.0, 0.2], [5.0, 0.8]];
        let res = fisher(x.view(), &[2, 2], 2).unwrap();
        assert!(res.scores[0].is_nan());
        assert!(close(res.scores[1], 0.0));

        let selection = crate::feature_selection::top_k::top_k(&res.scores, 2).unwrap();
        assert_eq!(selection.indices, vec![1, 0]);
    }

    #[test]
    fn test_top_k_is_clamped() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let res = fisher(x.view(), &[1, 1], 10).unwrap();
        assert_eq!(res.k.requested, 10);
        assert_eq!(res.k.effective, 2);
    }

    #[test]
    fn test_empty_class_is_shape_error() {
        let x = array![[1.0], [2.0]];
        assert!(matches!(
            t_test(x.view(), &[0, 2], 1),
            Err(SelectionError::Shape(_))
        ));
    }
}
