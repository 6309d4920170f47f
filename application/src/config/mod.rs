//! Application-level configuration.
//!
//! - [`AssessmentConfig`]: engine behavior (input validation mode)

pub mod assessment_config;

pub use assessment_config::{AssessmentConfig, ScoreValidation};
