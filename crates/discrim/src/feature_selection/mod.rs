//! Feature selection utilities.
//!
//! This module contains the two-class scoring statistics, the top-k ranking and
//! the selection wrapper that projects a matrix onto its best columns.
pub mod factory;
pub mod scorer_trait;
pub mod scoring;
pub mod top_k;
pub mod univariate_selection;

pub use factory::build_scorer;
pub use scorer_trait::{FeatureScorer, FeatureScores};
pub use top_k::{top_k, KBudget, Selection};
