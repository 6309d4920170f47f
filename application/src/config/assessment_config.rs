//! Assessment parameters: engine behavior control.
//!
//! [`AssessmentConfig`] groups the static parameters that control how
//! [`AssessmentEngine`](crate::use_cases::assessment_engine::AssessmentEngine)
//! treats caller input. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How `set_answer` treats its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreValidation {
    /// Reject unknown question ids and scores outside the question's options.
    #[default]
    Strict,
    /// Store any integer for any id. Unknown ids are kept but never scored.
    Permissive,
}

impl fmt::Display for ScoreValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValidation::Strict => write!(f, "strict"),
            ScoreValidation::Permissive => write!(f, "permissive"),
        }
    }
}

impl FromStr for ScoreValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ScoreValidation::Strict),
            "permissive" | "lenient" => Ok(ScoreValidation::Permissive),
            other => Err(format!("unknown validation mode '{}'", other)),
        }
    }
}

/// Engine parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Input validation mode for `set_answer`.
    pub validation: ScoreValidation,
}

impl AssessmentConfig {
    // ==================== Builder Methods ====================

    pub fn with_validation(mut self, validation: ScoreValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn permissive() -> Self {
        Self::default().with_validation(ScoreValidation::Permissive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(AssessmentConfig::default().validation, ScoreValidation::Strict);
    }

    #[test]
    fn test_builder() {
        let config = AssessmentConfig::default().with_validation(ScoreValidation::Permissive);
        assert_eq!(config, AssessmentConfig::permissive());
    }

    #[test]
    fn test_parse_validation() {
        assert_eq!("Strict".parse::<ScoreValidation>().unwrap(), ScoreValidation::Strict);
        assert_eq!(
            "lenient".parse::<ScoreValidation>().unwrap(),
            ScoreValidation::Permissive
        );
        assert!("loose".parse::<ScoreValidation>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ScoreValidation::Permissive).unwrap();
        assert_eq!(json, "\"permissive\"");
    }
}
