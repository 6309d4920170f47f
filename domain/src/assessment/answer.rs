//! Answer entity

use serde::{Deserialize, Serialize};

/// The user's current selection for one question.
///
/// Serialized as `{"questionId": "...", "score": n}`, which is also the
/// shape of each element of the persisted answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub score: i32,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, score: i32) -> Self {
        Self {
            question_id: question_id.into(),
            score,
        }
    }
}

/// Upsert `answer` into `answers`, replacing any existing answer for the
/// same question in place. Returns the previous score if one existed.
pub fn upsert_answer(answers: &mut Vec<Answer>, answer: Answer) -> Option<i32> {
    match answers
        .iter_mut()
        .find(|a| a.question_id == answer.question_id)
    {
        Some(existing) => Some(std::mem::replace(&mut existing.score, answer.score)),
        None => {
            answers.push(answer);
            None
        }
    }
}

/// Collapse duplicate question ids, last write wins.
///
/// The surviving answer keeps the position of the first occurrence.
pub fn dedup_answers(answers: impl IntoIterator<Item = Answer>) -> Vec<Answer> {
    let mut unique = Vec::new();
    for answer in answers {
        upsert_answer(&mut unique, answer);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&Answer::new("gov1", 4)).unwrap();
        assert_eq!(json, r#"{"questionId":"gov1","score":4}"#);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let answer: Answer = serde_json::from_str(r#"{"questionId":"ops2","score":3}"#).unwrap();
        assert_eq!(answer, Answer::new("ops2", 3));
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut answers = vec![Answer::new("gov1", 2)];
        assert_eq!(upsert_answer(&mut answers, Answer::new("gov2", 5)), None);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut answers = vec![Answer::new("gov1", 2), Answer::new("gov2", 3)];
        assert_eq!(upsert_answer(&mut answers, Answer::new("gov1", 5)), Some(2));
        assert_eq!(answers, vec![Answer::new("gov1", 5), Answer::new("gov2", 3)]);
    }

    #[test]
    fn test_dedup_last_write_wins() {
        let answers = dedup_answers(vec![
            Answer::new("gov1", 1),
            Answer::new("mgmt1", 2),
            Answer::new("gov1", 4),
        ]);
        assert_eq!(answers, vec![Answer::new("gov1", 4), Answer::new("mgmt1", 2)]);
    }
}
