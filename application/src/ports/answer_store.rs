//! Port for durable answer storage.
//!
//! The assessment keeps a single record holding the full answer set. The
//! engine is its only writer; adapters decide where the record lives.
//!
//! # Built-in Implementations
//!
//! - [`NoAnswerStore`] - keeps nothing; answers last for the session only
//!
//! File-backed and in-memory adapters live in the infrastructure layer.

use maturity_domain::Answer;
use thiserror::Error;

/// Fixed key of the persisted answer record.
pub const ANSWERS_RECORD_KEY: &str = "pki-assessment-answers";

/// Errors reported by an [`AnswerStore`].
///
/// None of these are fatal to the engine: a failed load starts an empty
/// assessment, a failed write only loses durability.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed answer record: {0}")]
    Malformed(String),

    #[error("Failed to encode answers: {0}")]
    Encode(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage for the answer set.
pub trait AnswerStore: Send + Sync {
    /// Read the persisted answers.
    ///
    /// `Ok(None)` means no record exists. A record that exists but cannot be
    /// decoded as a list of answers is [`StoreError::Malformed`].
    fn load(&self) -> Result<Option<Vec<Answer>>, StoreError>;

    /// Replace the persisted record with `answers`.
    fn save(&self, answers: &[Answer]) -> Result<(), StoreError>;

    /// Remove the persisted record. Clearing an absent record succeeds.
    fn clear(&self) -> Result<(), StoreError>;

    /// Whether this store survives a restart
    fn is_durable(&self) -> bool {
        true
    }

    /// Human-readable location, for logs
    fn location(&self) -> String {
        ANSWERS_RECORD_KEY.to_string()
    }
}

/// Store that keeps nothing. Every load finds no record.
pub struct NoAnswerStore;

impl AnswerStore for NoAnswerStore {
    fn load(&self) -> Result<Option<Vec<Answer>>, StoreError> {
        Ok(None)
    }

    fn save(&self, _answers: &[Answer]) -> Result<(), StoreError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn location(&self) -> String {
        "session only".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_store_never_finds_a_record() {
        let store = NoAnswerStore;
        store.save(&[Answer::new("gov1", 3)]).unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(!store.is_durable());
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Malformed("expected a list".to_string());
        assert_eq!(err.to_string(), "Malformed answer record: expected a list");
    }
}
