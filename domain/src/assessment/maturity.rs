//! Maturity level classification

use super::score::MaturityScore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named maturity band for a score.
///
/// | Level     | Score       |
/// |-----------|-------------|
/// | Optimized | `>= 4.5`    |
/// | Managed   | `>= 3.5`    |
/// | Defined   | `>= 2.5`    |
/// | Basic     | `>= 1.5`    |
/// | Initial   | below `1.5` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityLevel {
    Initial,
    Basic,
    Defined,
    Managed,
    Optimized,
}

impl MaturityLevel {
    pub fn classify(score: MaturityScore) -> Self {
        match score.tenths() {
            t if t >= 45 => MaturityLevel::Optimized,
            t if t >= 35 => MaturityLevel::Managed,
            t if t >= 25 => MaturityLevel::Defined,
            t if t >= 15 => MaturityLevel::Basic,
            _ => MaturityLevel::Initial,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Basic => "Basic",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Managed => "Managed",
            MaturityLevel::Optimized => "Optimized",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
