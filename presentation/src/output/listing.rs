//! Question rows prepared for display

use maturity_application::AssessmentEngine;
use maturity_domain::{AnswerOption, Domain, Question};
use serde::Serialize;

/// A catalog question together with the user's current answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListing {
    pub id: &'static str,
    pub domain: Domain,
    pub text: &'static str,
    pub options: &'static [AnswerOption],
    /// Current score; `None` when unanswered
    pub selected: Option<i32>,
}

impl QuestionListing {
    pub fn new(question: &Question, engine: &AssessmentEngine) -> Self {
        let score = engine.question_score(question.id());
        Self {
            id: question.id(),
            domain: question.domain(),
            text: question.text(),
            options: question.options(),
            selected: (score != 0).then_some(score),
        }
    }

    /// Rows for every catalog question, optionally limited to one domain
    pub fn collect(engine: &AssessmentEngine, domain: Option<Domain>) -> Vec<Self> {
        engine
            .bank()
            .all_questions()
            .iter()
            .filter(|q| domain.is_none_or(|d| q.domain() == d))
            .map(|q| Self::new(q, engine))
            .collect()
    }

    /// Label of the selected option, if the score matches one
    pub fn selected_label(&self) -> Option<&'static str> {
        let score = self.selected?;
        self.options
            .iter()
            .find(|o| o.value() == score)
            .map(|o| o.label())
    }
}
