//! Score aggregation
//!
//! 1. Partition answers by the domain of their question. Answers whose
//!    question is not in the catalog are dropped.
//! 2. Each domain with answers scores `round(sum / count, 1)`; the rest
//!    score the zero sentinel.
//! 3. The overall score is `round(sum of the four domain scores / 4, 1)`.
//!    Unanswered domains pull it toward zero.

use super::answer::Answer;
use super::domain::Domain;
use super::score::{Completion, DomainScores, MaturityScore, ScoreSummary};
use crate::bank::QuestionBank;

/// Compute domain and overall scores for `answers` against `bank`.
pub fn aggregate(answers: &[Answer], bank: &QuestionBank) -> ScoreSummary {
    let mut sums = [0i64; Domain::COUNT];
    let mut counts = [0usize; Domain::COUNT];

    for answer in answers {
        if let Some(question) = bank.find_question(&answer.question_id) {
            let i = question.domain().index();
            sums[i] += i64::from(answer.score);
            counts[i] += 1;
        }
    }

    let mut domain_scores = DomainScores::default();
    for domain in Domain::ALL {
        let i = domain.index();
        domain_scores.set(domain, MaturityScore::mean(sums[i], counts[i]), counts[i]);
    }

    let overall_score = MaturityScore::mean_of(domain_scores.as_slice());

    ScoreSummary {
        domain_scores,
        overall_score,
    }
}

/// Answered vs. total catalog questions in `domain`.
pub fn completion(answers: &[Answer], bank: &QuestionBank, domain: Domain) -> Completion {
    let total = bank.count_in(domain);
    let answered = bank
        .questions_by_domain(domain)
        .filter(|q| answers.iter().any(|a| a.question_id == q.id()))
        .count();
    Completion::new(answered, total)
}

/// Answered vs. total questions across the whole catalog.
pub fn overall_completion(answers: &[Answer], bank: &QuestionBank) -> Completion {
    Domain::ALL
        .iter()
        .map(|d| completion(answers, bank, *d))
        .fold(Completion::default(), |acc, c| {
            Completion::new(acc.answered + c.answered, acc.total + c.total)
        })
}
