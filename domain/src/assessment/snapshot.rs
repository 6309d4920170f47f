//! Read-only view of an assessment's state

use super::aggregation::{completion, overall_completion};
use super::answer::Answer;
use super::domain::Domain;
use super::maturity::MaturityLevel;
use super::score::{Completion, MaturityScore, ScoreSummary};
use crate::bank::QuestionBank;
use serde::Serialize;

/// Progress of a single domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainProgress {
    pub domain: Domain,
    pub score: MaturityScore,
    pub level: MaturityLevel,
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
}

/// Everything presentation needs to render an assessment, captured at one
/// point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSnapshot {
    pub answers: Vec<Answer>,
    #[serde(flatten)]
    pub scores: ScoreSummary,
    pub maturity_level: MaturityLevel,
    pub domains: Vec<DomainProgress>,
    pub completion: Completion,
}

impl AssessmentSnapshot {
    /// Capture a snapshot from already computed scores.
    pub fn capture(answers: &[Answer], scores: &ScoreSummary, bank: &QuestionBank) -> Self {
        let domains = Domain::ALL
            .iter()
            .map(|&domain| {
                let score = scores.domain(domain);
                let progress = completion(answers, bank, domain);
                DomainProgress {
                    domain,
                    score,
                    level: MaturityLevel::classify(score),
                    answered: progress.answered,
                    total: progress.total,
                    percent: progress.percent(),
                }
            })
            .collect();

        Self {
            answers: answers.to_vec(),
            scores: scores.clone(),
            maturity_level: MaturityLevel::classify(scores.overall_score),
            domains,
            completion: overall_completion(answers, bank),
        }
    }

    pub fn overall_score(&self) -> MaturityScore {
        self.scores.overall_score
    }

    pub fn domain(&self, domain: Domain) -> Option<&DomainProgress> {
        self.domains.iter().find(|p| p.domain == domain)
    }
}
