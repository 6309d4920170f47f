//! In-memory answer store.
//!
//! Holds the raw serialized record, so it exercises the same codec as the
//! file store and can be seeded with arbitrary (even malformed) payloads.
//! Share one instance through an `Arc` to simulate a restart.

use super::codec::{decode_answers, encode_answers};
use maturity_application::{AnswerStore, StoreError};
use maturity_domain::Answer;
use std::sync::{Mutex, MutexGuard};

/// Answer store backed by a string in memory.
#[derive(Debug, Default)]
pub struct InMemoryAnswerStore {
    payload: Mutex<Option<String>>,
}

impl InMemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `payload` as the persisted record.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }

    /// Current raw record, if any
    pub fn payload(&self) -> Option<String> {
        self.lock().ok().and_then(|p| p.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>, StoreError> {
        self.payload
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store poisoned".to_string()))
    }
}

impl AnswerStore for InMemoryAnswerStore {
    fn load(&self) -> Result<Option<Vec<Answer>>, StoreError> {
        match self.lock()?.as_deref() {
            Some(payload) => decode_answers(payload).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, answers: &[Answer]) -> Result<(), StoreError> {
        let encoded = encode_answers(answers)?;
        *self.lock()? = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.lock()? = None;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
