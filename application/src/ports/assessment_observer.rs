//! Port for observing assessment changes.
//!
//! Observers are notified synchronously after a mutation has been applied,
//! scored and persisted, so the snapshot they receive is always consistent.
//! Presentation uses this to re-render; the infrastructure journal uses it
//! to record an audit trail.

use maturity_domain::AssessmentSnapshot;

/// What changed in the assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentChange {
    /// An answer was recorded or replaced.
    AnswerSet {
        question_id: String,
        score: i32,
        previous: Option<i32>,
    },
    /// All answers were cleared.
    Reset,
}

impl AssessmentChange {
    /// Event type identifier (e.g., "answer_set", "assessment_reset").
    pub fn kind(&self) -> &'static str {
        match self {
            AssessmentChange::AnswerSet { .. } => "answer_set",
            AssessmentChange::Reset => "assessment_reset",
        }
    }
}

/// Callback for assessment changes.
///
/// `on_change` is non-fallible: an observer that cannot do its job must
/// not disturb the engine.
pub trait AssessmentObserver: Send + Sync {
    fn on_change(&self, change: &AssessmentChange, snapshot: &AssessmentSnapshot);
}

/// No-op observer
pub struct NoAssessmentObserver;

impl AssessmentObserver for NoAssessmentObserver {
    fn on_change(&self, _change: &AssessmentChange, _snapshot: &AssessmentSnapshot) {}
}
