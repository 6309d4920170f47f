//! Logging infrastructure: structured assessment journal.
//!
//! Provides [`JsonlAssessmentJournal`], a JSONL file writer that implements
//! the [`AssessmentObserver`](maturity_application::AssessmentObserver) port.

mod jsonl_journal;

pub use jsonl_journal::JsonlAssessmentJournal;
