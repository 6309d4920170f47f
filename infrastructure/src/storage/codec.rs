//! Wire format of the persisted answer record.
//!
//! The record is a JSON array of `{"questionId": string, "score": integer}`
//! with no version field. Anything else is malformed.

use maturity_application::StoreError;
use maturity_domain::Answer;

/// Serialize the answer set as it is persisted.
pub fn encode_answers(answers: &[Answer]) -> Result<String, StoreError> {
    serde_json::to_string(answers).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Parse a persisted answer record.
pub fn decode_answers(payload: &str) -> Result<Vec<Answer>, StoreError> {
    serde_json::from_str(payload).map_err(|e| StoreError::Malformed(e.to_string()))
}
