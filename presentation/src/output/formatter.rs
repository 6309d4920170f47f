//! Output formatter trait

use super::listing::QuestionListing;
use maturity_domain::AssessmentSnapshot;

/// Trait for formatting assessment results
pub trait OutputFormatter {
    /// Format domain and overall scores
    fn format_status(&self, snapshot: &AssessmentSnapshot) -> String;

    /// Format the question catalog with current selections
    fn format_questions(&self, listing: &[QuestionListing]) -> String;

    /// Format the result of recording an answer
    fn format_answer(&self, listing: &QuestionListing, snapshot: &AssessmentSnapshot) -> String;

    /// Format the confirmation of a reset
    fn format_reset(&self, snapshot: &AssessmentSnapshot) -> String;
}
