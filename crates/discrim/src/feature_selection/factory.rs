use crate::config::ScoringMethod;
use crate::feature_selection::scorer_trait::FeatureScorer;
use crate::feature_selection::scoring::{CorrelationWithClass, Fisher, TTest};

/// Build a boxed scorer for a configured `ScoringMethod`.
pub fn build_scorer(method: ScoringMethod) -> Box<dyn FeatureScorer> {
    match method {
        ScoringMethod::Fisher => Box::new(Fisher),
        ScoringMethod::CorrelationWithClass => Box::new(CorrelationWithClass),
        ScoringMethod::TTest => Box::new(TTest),
    }
}
