//! Application layer for pki-maturity
//!
//! This crate contains the assessment engine, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AssessmentConfig, ScoreValidation};
pub use ports::{
    answer_store::{ANSWERS_RECORD_KEY, AnswerStore, NoAnswerStore, StoreError},
    assessment_observer::{AssessmentChange, AssessmentObserver, NoAssessmentObserver},
};
pub use use_cases::assessment_engine::{AssessmentEngine, AssessmentError, Durability};
