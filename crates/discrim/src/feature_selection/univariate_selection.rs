//! Univariate two-class feature selection.
//!
//! `select` scores every feature with a [`FeatureScorer`], keeps the k best and
//! gathers those columns from the input. `SelectKBest` wraps the same flow
//! behind a configured scoring method, and `rank_all_methods` compares the
//! rankings of every method on one dataset.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use rayon::prelude::*;

use crate::config::{ScoringMethod, SelectionConfig};
use crate::error::{Result, SelectionError};
use crate::feature_selection::factory::build_scorer;
use crate::feature_selection::scorer_trait::FeatureScorer;
use crate::feature_selection::top_k::{largest, KBudget, Selection};

/// Output of a selection run.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    /// Scores of the selected features, descending.
    pub scores: Array1<f64>,
    /// Column indices of the selected features in the input, aligned with `scores`.
    pub indices: Vec<usize>,
    /// The input restricted to the selected columns, in `indices` order.
    pub reduced: Array2<f64>,
    pub k: KBudget,
}

/// Score, rank and project `data` onto its most discriminative features.
///
/// # Parameters
///
/// * `data` - Matrix of shape (n_instances, n_features); the first `class_sizes[0]`
///   rows belong to the first class, the rest to the second.
/// * `class_sizes` - Instance counts of the two classes.
/// * `method` - Scoring statistic to rank features by.
/// * `num_features` - Number of features to keep. When `None`, it is the column
///   count of `data`, i.e. every feature is kept in ranked order. Values above
///   the column count are clamped.
///
/// # Returns
///
/// The selected scores in descending order and the reduced matrix. The input is
/// never modified.
///
/// # Errors
///
/// [`SelectionError::MissingInput`] without data, [`SelectionError::MissingMethod`]
/// without a method, plus any error of the scorer (class sizes, empty classes)
/// or [`SelectionError::Range`] for a negative `num_features`.
pub fn select(
    data: Option<ArrayView2<f64>>,
    class_sizes: &[usize],
    method: Option<&dyn FeatureScorer>,
    num_features: Option<isize>,
) -> Result<SelectionOutcome> {
    let data = data.ok_or(SelectionError::MissingInput)?;
    let method = method.ok_or(SelectionError::MissingMethod)?;

    let num_features = num_features.unwrap_or(data.ncols() as isize);
    let scored = method.score(data, class_sizes, num_features)?;
    let selection = largest(&scored.scores, scored.k.effective);

    log::debug!(
        "{} selected features {:?} out of {}",
        method.name(),
        selection.indices,
        data.ncols()
    );

    let reduced = data.select(Axis(1), &selection.indices);
    Ok(SelectionOutcome {
        scores: selection.scores,
        indices: selection.indices,
        reduced,
        k: scored.k,
    })
}

/// Ranking of one scoring method, as produced by [`rank_all_methods`].
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRanking {
    pub method: ScoringMethod,
    /// Scores of every feature, index-aligned with the input columns.
    pub scores: Array1<f64>,
    pub selection: Selection,
    pub k: KBudget,
}

/// Score `data` with every [`ScoringMethod`] and rank the features of each.
///
/// Methods are evaluated in parallel; the result is in [`ScoringMethod::ALL`] order.
pub fn rank_all_methods(
    data: ArrayView2<f64>,
    class_sizes: &[usize],
    num_features: Option<isize>,
) -> Result<Vec<MethodRanking>> {
    let num_features = num_features.unwrap_or(data.ncols() as isize);

    ScoringMethod::ALL[..]
        .par_iter()
        .map(|&method| -> Result<MethodRanking> {
            let scored = build_scorer(method).score(data, class_sizes, num_features)?;
            let selection = largest(&scored.scores, scored.k.effective);
            Ok(MethodRanking {
                method,
                scores: scored.scores,
                selection,
                k: scored.k,
            })
        })
        .collect()
}

/// Selects the k best features of a two-class dataset for a fixed scoring method.
///
/// Mirrors scikit-learn's `SelectKBest`, with the class partition given as
/// instance counts instead of a label vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectKBest {
    method: ScoringMethod,
    /// `None` keeps every feature.
    k: Option<isize>,
}

impl SelectKBest {
    /// Creates a selector that keeps every feature, ranked by `method`.
    pub fn new(method: ScoringMethod) -> Self {
        SelectKBest { method, k: None }
    }

    /// Limit the selection to the `k` best features.
    pub fn with_k(mut self, k: isize) -> Self {
        self.k = Some(k);
        self
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        SelectKBest {
            method: config.method,
            k: config.num_features,
        }
    }

    pub fn method(&self) -> ScoringMethod {
        self.method
    }

    /// Indices of the k best features, best first.
    pub fn fit(&self, x: &Array2<f64>, class_sizes: &[usize]) -> Result<Vec<usize>> {
        let scorer = build_scorer(self.method);
        let num_features = self.k.unwrap_or(x.ncols() as isize);
        let scored = scorer.score(x.view(), class_sizes, num_features)?;
        Ok(largest(&scored.scores, scored.k.effective).indices)
    }

    /// Select the k best features and return them with the reduced matrix.
    pub fn fit_transform(&self, x: &Array2<f64>, class_sizes: &[usize]) -> Result<SelectionOutcome> {
        let scorer = build_scorer(self.method);
        select(Some(x.view()), class_sizes, Some(scorer.as_ref()), self.k)
    }
}
