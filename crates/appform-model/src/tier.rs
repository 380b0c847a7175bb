use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expertise level chosen in the selector field.
///
/// The tier is not validated itself; it routes which other field becomes
/// conditionally required. The absence of a selection is modelled as
/// `Option<ExpertiseTier>::None`, which installs no conditional validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseTier {
    Junior,
    Mid,
    Senior,
}

impl ExpertiseTier {
    /// Wire value as it appears in the selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertiseTier::Junior => "junior",
            ExpertiseTier::Mid => "mid",
            ExpertiseTier::Senior => "senior",
        }
    }

    /// Interpret a raw selector value. Empty or unknown strings mean
    /// "no selection" rather than an error: an unknown tier leaves every
    /// conditional field optional.
    pub fn parse_selection(raw: &str) -> Option<ExpertiseTier> {
        raw.parse().ok()
    }
}

impl fmt::Display for ExpertiseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpertiseTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "junior" => Ok(ExpertiseTier::Junior),
            "mid" => Ok(ExpertiseTier::Mid),
            "senior" => Ok(ExpertiseTier::Senior),
            _ => Err(format!("Unknown expertise tier: {s}")),
        }
    }
}
