//! Assessment configuration from TOML (`[assessment]` section)

use maturity_application::{AssessmentConfig, ScoreValidation};
use serde::{Deserialize, Serialize};

/// Raw assessment configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssessmentConfig {
    /// Input validation mode: "strict" (default) or "permissive"
    pub validation: ScoreValidation,
}

impl FileAssessmentConfig {
    /// Convert to the application-layer engine parameters
    pub fn to_assessment_config(&self) -> AssessmentConfig {
        AssessmentConfig::default().with_validation(self.validation)
    }
}
