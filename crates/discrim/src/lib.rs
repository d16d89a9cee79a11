//! discrim: two-class discriminative feature ranking.
//!
//! Scores every column of a class-partitioned feature matrix with one of three
//! statistics (Fisher ratio, correlation with class, Welch t-statistic), keeps
//! the top-k columns and projects the data onto them.
//!
//! Rows are expected to be grouped by class: the first `n1` rows belong to the
//! first class and the remaining `n2` rows to the second.
pub mod config;
pub mod error;
pub mod feature_selection;
pub mod math;

pub use config::{ScoringMethod, SelectionConfig};
pub use error::{Result, SelectionError};
pub use feature_selection::univariate_selection::{select, SelectKBest, SelectionOutcome};
