//! Maturity domain value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed maturity categories a question belongs to.
///
/// Domains are both the grouping key of the question catalog and the
/// scoring bucket of the aggregation. The set is closed; declaration
/// order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Governance,
    Management,
    Operations,
    Resources,
}

impl Domain {
    /// All domains in display order
    pub const ALL: [Domain; 4] = [
        Domain::Governance,
        Domain::Management,
        Domain::Operations,
        Domain::Resources,
    ];

    /// Number of domains
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase identifier, as used in persisted data and config
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Governance => "governance",
            Domain::Management => "management",
            Domain::Operations => "operations",
            Domain::Resources => "resources",
        }
    }

    /// Capitalized name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Governance => "Governance",
            Domain::Management => "Management",
            Domain::Operations => "Operations",
            Domain::Resources => "Resources",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "governance" | "gov" => Ok(Domain::Governance),
            "management" | "mgmt" => Ok(Domain::Management),
            "operations" | "ops" => Ok(Domain::Operations),
            "resources" | "res" => Ok(Domain::Resources),
            _ => Err(DomainError::UnknownDomain(s.to_string())),
        }
    }
}
