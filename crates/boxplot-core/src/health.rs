// File: crates/boxplot-core/src/health.rs
// Summary: Self-reported health status categories and their fixed axis order.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthStatus {
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl HealthStatus {
    /// Fixed category order used for the band domain.
    pub const ALL: [HealthStatus; 5] = [
        HealthStatus::Poor,
        HealthStatus::Fair,
        HealthStatus::Good,
        HealthStatus::VeryGood,
        HealthStatus::Excellent,
    ];

    /// Label as it appears in the `Health` column. Matching is exact.
    pub const fn label(self) -> &'static str {
        match self {
            HealthStatus::Poor => "Poor",
            HealthStatus::Fair => "Fair",
            HealthStatus::Good => "Good",
            HealthStatus::VeryGood => "Very good",
            HealthStatus::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown health status label {0:?}")]
pub struct UnknownHealthLabel(pub String);

impl FromStr for HealthStatus {
    type Err = UnknownHealthLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HealthStatus::ALL
            .into_iter()
            .find(|h| h.label() == s)
            .ok_or_else(|| UnknownHealthLabel(s.to_string()))
    }
}
