//! Assessment domain.
//!
//! - [`domain::Domain`]: the four fixed maturity categories
//! - [`question::Question`] / [`question::AnswerOption`]: static catalog entries
//! - [`answer::Answer`]: the user's current selection for one question
//! - [`score::MaturityScore`] / [`score::ScoreSummary`]: derived scores
//! - [`aggregation`]: the scoring algorithm
//! - [`maturity::MaturityLevel`]: named bands over a score
//! - [`snapshot::AssessmentSnapshot`]: read-only view handed to presentation

pub mod aggregation;
pub mod answer;
pub mod domain;
pub mod maturity;
pub mod question;
pub mod score;
pub mod snapshot;
