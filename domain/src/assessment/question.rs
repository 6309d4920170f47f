//! Question and answer option value objects

use super::domain::Domain;
use serde::Serialize;

/// One selectable maturity level of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    value: i32,
    label: &'static str,
}

impl AnswerOption {
    pub const fn new(value: i32, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Score recorded when this option is selected
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// A catalog question (Value Object)
///
/// Questions are compiled into the binary and never mutated. Option order
/// is display order; values are conventionally 1..=5 but need not be
/// contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    id: &'static str,
    text: &'static str,
    domain: Domain,
    options: &'static [AnswerOption],
}

impl Question {
    pub const fn new(
        id: &'static str,
        text: &'static str,
        domain: Domain,
        options: &'static [AnswerOption],
    ) -> Self {
        Self {
            id,
            text,
            domain,
            options,
        }
    }

    /// Stable identifier, unique across the whole catalog
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn options(&self) -> &'static [AnswerOption] {
        self.options
    }

    /// Find the option carrying the given score
    pub fn option_for(&self, score: i32) -> Option<&'static AnswerOption> {
        self.options.iter().find(|o| o.value == score)
    }

    /// Whether `score` is one of this question's option values
    pub fn accepts(&self, score: i32) -> bool {
        self.option_for(score).is_some()
    }

    /// Sorted, deduplicated option values
    pub fn valid_scores(&self) -> Vec<i32> {
        let mut values: Vec<i32> = self.options.iter().map(|o| o.value).collect();
        values.sort_unstable();
        values.dedup();
        values
    }
}
