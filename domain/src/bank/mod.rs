//! Question bank
//!
//! An immutable catalog of questions, compiled into the binary. Lookups
//! never fail: a missing id is reported as `None` and callers decide what
//! absence means.

mod catalog;

use crate::assessment::domain::Domain;
use crate::assessment::question::Question;
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Read-only question catalog.
///
/// Cheap to copy; the questions themselves live for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// Build a bank from a static question list.
    ///
    /// Fails if two questions share an id or a question has no options.
    pub fn new(questions: &'static [Question]) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in questions {
            if !seen.insert(question.id()) {
                return Err(DomainError::DuplicateQuestionId(question.id().to_string()));
            }
            if question.options().is_empty() {
                return Err(DomainError::EmptyOptions(question.id().to_string()));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in PKI maturity catalog
    pub fn builtin() -> Self {
        Self {
            questions: catalog::PKI_QUESTIONS,
        }
    }

    /// All questions in catalog order
    pub fn all_questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn questions_by_domain(&self, domain: Domain) -> impl Iterator<Item = &'static Question> {
        self.questions.iter().filter(move |q| q.domain() == domain)
    }

    pub fn find_question(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn count_in(&self, domain: Domain) -> usize {
        self.questions_by_domain(domain).count()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
