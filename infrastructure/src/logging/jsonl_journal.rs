//! JSONL file writer for assessment changes.
//!
//! Each [`AssessmentChange`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.
//! Unlike the answer record, the journal is append-only and is never read
//! back by the engine.

use maturity_application::{AssessmentChange, AssessmentObserver};
use maturity_domain::AssessmentSnapshot;
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Assessment journal that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAssessmentJournal {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAssessmentJournal {
    /// Open (or create) the journal at the given path for appending.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create journal directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open journal file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(change: &AssessmentChange, snapshot: &AssessmentSnapshot) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = json!({
            "type": change.kind(),
            "timestamp": timestamp,
            "overallScore": snapshot.overall_score(),
            "maturityLevel": snapshot.maturity_level,
            "answerCount": snapshot.answers.len(),
        });

        if let AssessmentChange::AnswerSet {
            question_id,
            score,
            previous,
        } = change
            && let Value::Object(map) = &mut record
        {
            map.insert("questionId".to_string(), json!(question_id));
            map.insert("score".to_string(), json!(score));
            map.insert("previous".to_string(), json!(previous));
        }

        record
    }
}

impl AssessmentObserver for JsonlAssessmentJournal {
    fn on_change(&self, change: &AssessmentChange, snapshot: &AssessmentSnapshot) {
        let Ok(line) = serde_json::to_string(&Self::record(change, snapshot)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush every record for crash safety; the journal is append-only
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAssessmentJournal {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maturity_domain::{Answer, QuestionBank, aggregate};
    use std::io::Read;

    fn snapshot_of(answers: &[Answer]) -> AssessmentSnapshot {
        let bank = QuestionBank::builtin();
        let scores = aggregate(answers, &bank);
        AssessmentSnapshot::capture(answers, &scores, &bank)
    }

    fn read_lines(path: &Path) -> Vec<Value> {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
            .trim()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_journal_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.jsonl");
        let journal = JsonlAssessmentJournal::open(&path).unwrap();

        let answers = vec![Answer::new("gov1", 4)];
        journal.on_change(
            &AssessmentChange::AnswerSet {
                question_id: "gov1".to_string(),
                score: 4,
                previous: None,
            },
            &snapshot_of(&answers),
        );
        journal.on_change(&AssessmentChange::Reset, &snapshot_of(&[]));

        // Flush
        drop(journal);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);

        for line in &lines {
            assert!(line.get("type").is_some());
            assert!(line.get("timestamp").is_some());
        }

        assert_eq!(lines[0]["type"], "answer_set");
        assert_eq!(lines[0]["questionId"], "gov1");
        assert_eq!(lines[0]["score"], 4);
        assert!(lines[0]["previous"].is_null());
        assert_eq!(lines[0]["overallScore"], 1.0);
        assert_eq!(lines[0]["answerCount"], 1);

        assert_eq!(lines[1]["type"], "assessment_reset");
        assert_eq!(lines[1]["answerCount"], 0);
        assert!(lines[1].get("questionId").is_none());
    }

    #[test]
    fn test_journal_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.jsonl");

        for _ in 0..2 {
            let journal = JsonlAssessmentJournal::open(&path).unwrap();
            journal.on_change(&AssessmentChange::Reset, &snapshot_of(&[]));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_journal_returns_none_for_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        assert!(JsonlAssessmentJournal::open(blocker.join("journal.jsonl")).is_none());
    }
}
