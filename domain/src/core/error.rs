//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Duplicate question id in catalog: {0}")]
    DuplicateQuestionId(String),

    #[error("Question {0} has no answer options")]
    EmptyOptions(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}

impl DomainError {
    /// Check if this error originates from the question catalog itself
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            DomainError::DuplicateQuestionId(_) | DomainError::EmptyOptions(_)
        )
    }
}
