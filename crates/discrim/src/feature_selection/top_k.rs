//! Ranking of score vectors and the explicit k clamp.
//!
//! Ordering rule used everywhere in the crate: higher scores first, ties broken
//! by ascending feature index, NaN scores after every other score (again in
//! ascending index order).
use std::cmp::Ordering;

use ndarray::{Array1, ArrayBase, Data, Ix1};

use crate::error::{Result, SelectionError};

/// The number of features a caller asked for next to the number actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KBudget {
    pub requested: usize,
    pub effective: usize,
}

impl KBudget {
    /// Clamp a requested k to the available feature count.
    ///
    /// Asking for more features than exist is not an error; every feature is
    /// then selected. A negative request is a [`SelectionError::Range`].
    pub fn clamp(requested: isize, num_features: usize) -> Result<Self> {
        if requested < 0 {
            return Err(SelectionError::Range(requested));
        }
        let requested = requested as usize;
        let effective = requested.min(num_features);
        if effective < requested {
            log::info!(
                "Requested {} features but only {} are available; selecting all of them",
                requested,
                num_features
            );
        }
        Ok(KBudget {
            requested,
            effective,
        })
    }

    pub fn is_clamped(&self) -> bool {
        self.effective < self.requested
    }
}

/// The k best scores in descending order with their column indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub scores: Array1<f64>,
    pub indices: Vec<usize>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Descending by score with NaN last. Equal keys compare `Equal` so a stable
/// sort keeps them in index order.
fn rank_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Full ranking of `scores`: feature indices ordered best first.
pub fn rank<S>(scores: &ArrayBase<S, Ix1>) -> Vec<usize>
where
    S: Data<Elem = f64>,
{
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    // sort_by is stable, so ties stay in ascending index order
    indices.sort_by(|&i, &j| rank_order(scores[i], scores[j]));
    indices
}

/// Select the `k` largest scores. `k` beyond the vector length returns every entry.
pub fn largest<S>(scores: &ArrayBase<S, Ix1>, k: usize) -> Selection
where
    S: Data<Elem = f64>,
{
    let mut indices = rank(scores);
    indices.truncate(k);
    let top_scores = indices.iter().map(|&i| scores[i]).collect::<Array1<f64>>();

    Selection {
        scores: top_scores,
        indices,
    }
}

/// Return the `k` highest scores in descending order with their original indices.
///
/// # Errors
///
/// [`SelectionError::Range`] if `k` is negative. `k == 0` yields an empty selection.
///
/// # Examples
///
/// ```rust
/// use ndarray::array;
/// use discrim::feature_selection::top_k::top_k;
///
/// let scores = array![0.9, f64::NAN, 0.4, 0.9];
/// let selection = top_k(&scores, 2).unwrap();
/// assert_eq!(selection.indices, vec![0, 3]);
/// ```
pub fn top_k<S>(scores: &ArrayBase<S, Ix1>, k: isize) -> Result<Selection>
where
    S: Data<Elem = f64>,
{
    if k < 0 {
        return Err(SelectionError::Range(k));
    }
    Ok(largest(scores, k as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_top_k_ties_and_nan() {
        let scores = array![0.9, f64::NAN, 0.4, 0.9];
        let sel = top_k(&scores, 2).unwrap();
        assert_eq!(sel.indices, vec![0, 3]);
        assert_eq!(sel.scores.to_vec(), vec![0.9, 0.9]);
    }

    #[test]
    fn test_nan_ranked_last_in_index_order() {
        let scores = array![f64::NAN, 1.0, f64::NAN, -3.0];
        assert_eq!(rank(&scores), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_infinity_ranks_above_finite() {
        let scores = array![1.0, f64::INFINITY, f64::NAN];
        assert_eq!(rank(&scores), vec![1, 0, 2]);
    }

    #[test]
    fn test_top_k_zero_and_negative() {
        let scores = array![3.0, 1.0];
        assert!(top_k(&scores, 0).unwrap().is_empty());
        assert_eq!(top_k(&scores, -1).unwrap_err(), SelectionError::Range(-1));
    }

    #[test]
    fn test_top_k_beyond_length() {
        let scores = array![1.0, 2.0];
        let sel = top_k(&scores, 5).unwrap();
        assert_eq!(sel.indices, vec![1, 0]);
    }

    #[test]
    fn test_kbudget_clamp() {
        let k = KBudget::clamp(10, 5).unwrap();
        assert_eq!(k.requested, 10);
        assert_eq!(k.effective, 5);
        assert!(k.is_clamped());

        let k = KBudget::clamp(3, 5).unwrap();
        assert_eq!(k.effective, 3);
        assert!(!k.is_clamped());

        assert_eq!(KBudget::clamp(-4, 5).unwrap_err(), SelectionError::Range(-4));
    }
}
