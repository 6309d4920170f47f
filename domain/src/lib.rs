//! Domain layer for pki-maturity
//!
//! This crate contains the question catalog, the assessment entities and
//! value objects, and the scoring algorithm. It has no dependencies on
//! persistence or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Domains and Questions
//!
//! Every question belongs to one of four fixed [`Domain`]s and offers an
//! ordered set of scored [`AnswerOption`]s. The [`QuestionBank`] is the
//! immutable, compiled-in catalog.
//!
//! ## Scores
//!
//! - **Domain score**: mean of the answered scores in a domain, rounded to
//!   one decimal place; `0` means "not yet assessed"
//! - **Overall score**: mean of the four domain scores, rounded to one
//!   decimal place

pub mod assessment;
pub mod bank;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use assessment::{
    aggregation::{aggregate, completion, overall_completion},
    answer::{Answer, dedup_answers, upsert_answer},
    domain::Domain,
    maturity::MaturityLevel,
    question::{AnswerOption, Question},
    score::{Completion, DomainScores, MaturityScore, ScoreSummary},
    snapshot::{AssessmentSnapshot, DomainProgress},
};
pub use bank::QuestionBank;
pub use config::OutputFormat;
pub use core::error::DomainError;
