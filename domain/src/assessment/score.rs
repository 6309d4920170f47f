//! Maturity score value objects
//!
//! Scores are held as whole tenths so that rounding to one decimal place is
//! exact integer arithmetic. Rounding is half up (toward positive infinity):
//! `2.25 → 2.3`, `3.333… → 3.3`.

use super::domain::Domain;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A score rounded to one decimal place.
///
/// Zero doubles as the "not yet assessed" sentinel; catalog option values
/// start at 1, so a legitimately answered domain never rounds to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaturityScore {
    tenths: i64,
}

impl MaturityScore {
    pub const UNASSESSED: Self = Self { tenths: 0 };

    pub const fn from_tenths(tenths: i64) -> Self {
        Self { tenths }
    }

    /// `round(numerator / denominator, 1)` with half-up rounding.
    ///
    /// A non-positive denominator yields [`MaturityScore::UNASSESSED`].
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        if denominator <= 0 {
            return Self::UNASSESSED;
        }
        // floor(n/d * 10 + 1/2) == floor((20n + d) / 2d)
        let tenths = (20 * numerator + denominator).div_euclid(2 * denominator);
        Self { tenths }
    }

    /// Rounded arithmetic mean of integer scores
    pub fn mean(sum: i64, count: usize) -> Self {
        Self::ratio(sum, count as i64)
    }

    /// Rounded mean of already rounded scores
    pub fn mean_of(scores: &[MaturityScore]) -> Self {
        let total: i64 = scores.iter().map(|s| s.tenths).sum();
        // total / 10 / len, expressed over a single denominator
        Self::ratio(total, 10 * scores.len() as i64)
    }

    pub fn tenths(self) -> i64 {
        self.tenths
    }

    pub fn value(self) -> f64 {
        self.tenths as f64 / 10.0
    }

    pub fn is_unassessed(self) -> bool {
        self.tenths == 0
    }
}

impl fmt::Display for MaturityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

impl Serialize for MaturityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// One score per [`Domain`], plus how many answers fed each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainScores {
    scores: [MaturityScore; Domain::COUNT],
    counts: [usize; Domain::COUNT],
}

impl DomainScores {
    pub(crate) fn set(&mut self, domain: Domain, score: MaturityScore, count: usize) {
        self.scores[domain.index()] = score;
        self.counts[domain.index()] = count;
    }

    pub fn get(&self, domain: Domain) -> MaturityScore {
        self.scores[domain.index()]
    }

    /// Number of aggregated answers in the domain
    pub fn answered(&self, domain: Domain) -> usize {
        self.counts[domain.index()]
    }

    /// Whether any answer contributed to the domain's score
    pub fn is_assessed(&self, domain: Domain) -> bool {
        self.answered(domain) > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Domain, MaturityScore)> + '_ {
        Domain::ALL.iter().map(|d| (*d, self.get(*d)))
    }

    pub fn as_slice(&self) -> &[MaturityScore] {
        &self.scores
    }
}

impl Serialize for DomainScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Domain::COUNT))?;
        for (domain, score) in self.iter() {
            map.serialize_entry(domain.as_str(), &score)?;
        }
        map.end()
    }
}

/// Derived scores of an assessment: the four domain scores and the overall score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub domain_scores: DomainScores,
    pub overall_score: MaturityScore,
}

impl ScoreSummary {
    pub fn domain(&self, domain: Domain) -> MaturityScore {
        self.domain_scores.get(domain)
    }

    /// True when at least one answer contributed to any domain
    pub fn any_recorded(&self) -> bool {
        Domain::ALL.iter().any(|d| self.domain_scores.is_assessed(*d))
    }
}

/// Share of a domain's catalog questions that have an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
}

impl Completion {
    pub fn new(answered: usize, total: usize) -> Self {
        Self { answered, total }
    }

    /// Whole percentage, rounded half up; 0 for an empty domain
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (200 * self.answered + self.total) / (2 * self.total);
        pct.min(100) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }
}
