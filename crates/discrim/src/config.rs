use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported two-class scoring statistics.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    /// `|m1 - m2| / (s1 + s2)`
    #[default]
    Fisher,
    /// `[(m1 - m)^2 + (m2 - m)^2] / (2 * s^2)`
    CorrelationWithClass,
    /// `|m1 - m2| / sqrt(s1^2 / n1 + s2^2 / n2)`
    TTest,
}

impl ScoringMethod {
    /// Every method, in the order used when comparing rankings.
    pub const ALL: [ScoringMethod; 3] = [
        ScoringMethod::Fisher,
        ScoringMethod::CorrelationWithClass,
        ScoringMethod::TTest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::Fisher => "fisher",
            ScoringMethod::CorrelationWithClass => "correlation_with_class",
            ScoringMethod::TTest => "t_test",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fisher" => Ok(ScoringMethod::Fisher),
            "correlation" | "correlation_with_class" => Ok(ScoringMethod::CorrelationWithClass),
            "t_test" | "ttest" => Ok(ScoringMethod::TTest),
            _ => Err(format!(
                "Unknown scoring method: {}. Expected one of: fisher, correlation_with_class, t_test",
                s
            )),
        }
    }
}

/// Parameters for a single selection run.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    pub method: ScoringMethod,
    /// Number of features to keep. `None` keeps every column, ranked.
    pub num_features: Option<isize>,
}

impl SelectionConfig {
    pub fn new(method: ScoringMethod, num_features: Option<isize>) -> Self {
        Self {
            method,
            num_features,
        }
    }
}
