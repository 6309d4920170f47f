//! JSON output formatter

use super::formatter::OutputFormatter;
use super::listing::QuestionListing;
use maturity_domain::AssessmentSnapshot;
use serde::Serialize;
use serde_json::json;

/// Formats assessment results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_status(&self, snapshot: &AssessmentSnapshot) -> String {
        Self::render(snapshot)
    }

    fn format_questions(&self, listing: &[QuestionListing]) -> String {
        Self::render(&listing)
    }

    fn format_answer(&self, listing: &QuestionListing, snapshot: &AssessmentSnapshot) -> String {
        Self::render(&json!({
            "question": listing,
            "assessment": snapshot,
        }))
    }

    fn format_reset(&self, snapshot: &AssessmentSnapshot) -> String {
        Self::render(snapshot)
    }
}
