//! Assessment engine use case.
//!
//! Owns the mutable answer set and keeps the derived scores consistent
//! with it. Every mutation runs the same sequence to completion before
//! returning:
//!
//! ```text
//! mutate answers → aggregate scores → persist answers → notify observers
//! ```
//!
//! Persistence is best effort. A failed write is logged and reported via
//! [`AssessmentEngine::durability`], but the in-memory state stays
//! authoritative and the mutation still succeeds.

use crate::config::{AssessmentConfig, ScoreValidation};
use crate::ports::answer_store::{AnswerStore, StoreError};
use crate::ports::assessment_observer::{AssessmentChange, AssessmentObserver};
use maturity_domain::{
    Answer, AnswerOption, AssessmentSnapshot, Completion, Domain, MaturityLevel, MaturityScore,
    QuestionBank, ScoreSummary, aggregate, completion, dedup_answers, overall_completion,
    upsert_answer,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned to the caller of a mutating operation.
///
/// Only raised in [`ScoreValidation::Strict`] mode. The engine state is
/// left untouched when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Invalid score {score} for question {question_id} (valid: {valid:?})")]
    InvalidScore {
        question_id: String,
        score: i32,
        valid: Vec<i32>,
    },
}

/// Outcome of the most recent interaction with the answer store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Durability {
    /// The store holds the current answer set.
    Persisted,
    /// The store keeps nothing across restarts.
    SessionOnly,
    /// The last store operation failed; answers may be lost on restart.
    Degraded { reason: String },
}

impl Durability {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Durability::Degraded { .. })
    }
}

/// The assessment state engine.
///
/// Construct once at the application root with
/// [`initialize`](Self::initialize) and pass it by reference to whatever
/// needs it. Mutation takes `&mut self`, so a reader never sees answers and
/// scores out of step.
pub struct AssessmentEngine {
    bank: QuestionBank,
    store: Arc<dyn AnswerStore>,
    config: AssessmentConfig,
    answers: Vec<Answer>,
    scores: ScoreSummary,
    durability: Durability,
    observers: Vec<Arc<dyn AssessmentObserver>>,
}

impl AssessmentEngine {
    /// Load the persisted answer set and compute its scores.
    ///
    /// A missing or malformed record starts an empty assessment.
    pub fn initialize(
        bank: QuestionBank,
        store: Arc<dyn AnswerStore>,
        config: AssessmentConfig,
    ) -> Self {
        let (answers, durability) = match store.load() {
            Ok(Some(stored)) => {
                let answers = dedup_answers(stored);
                info!(
                    "Restored {} answers from {}",
                    answers.len(),
                    store.location()
                );
                (answers, Self::baseline_durability(store.as_ref()))
            }
            Ok(None) => {
                debug!("No saved answers at {}", store.location());
                (Vec::new(), Self::baseline_durability(store.as_ref()))
            }
            Err(e) => {
                warn!(
                    "Ignoring saved answers at {}, starting empty: {}",
                    store.location(),
                    e
                );
                (Vec::new(), Self::degraded(&e))
            }
        };

        let scores = aggregate(&answers, &bank);

        Self {
            bank,
            store,
            config,
            answers,
            scores,
            durability,
            observers: Vec::new(),
        }
    }

    /// Register an observer (builder form).
    pub fn with_observer(mut self, observer: Arc<dyn AssessmentObserver>) -> Self {
        self.subscribe(observer);
        self
    }

    /// Register an observer, notified after every mutation.
    pub fn subscribe(&mut self, observer: Arc<dyn AssessmentObserver>) {
        self.observers.push(observer);
    }

    // ==================== Mutations ====================

    /// Record `score` for `question_id`, replacing any previous answer.
    ///
    /// Recomputes every domain score and the overall score, then persists
    /// the full answer set. In strict mode an unknown question or a score
    /// outside the question's options is rejected before anything changes.
    pub fn set_answer(&mut self, question_id: &str, score: i32) -> Result<(), AssessmentError> {
        if self.config.validation == ScoreValidation::Strict {
            self.validate(question_id, score)?;
        }

        let previous = upsert_answer(&mut self.answers, Answer::new(question_id, score));
        self.recompute();
        debug!(
            "Answer {} = {} (was {:?}), overall now {}",
            question_id, score, previous, self.scores.overall_score
        );

        let result = self.store.save(&self.answers);
        self.record_store_result("save answers", result);

        self.notify(&AssessmentChange::AnswerSet {
            question_id: question_id.to_string(),
            score,
            previous,
        });
        Ok(())
    }

    /// Clear every answer and erase the persisted record.
    pub fn reset_assessment(&mut self) {
        let cleared = self.answers.len();
        self.answers.clear();
        self.recompute();
        info!("Assessment reset ({} answers cleared)", cleared);

        let result = self.store.clear();
        self.record_store_result("clear answers", result);

        self.notify(&AssessmentChange::Reset);
    }

    // ==================== Read Surface ====================

    /// Score of the current answer for `question_id`, or 0 if unanswered.
    pub fn question_score(&self, question_id: &str) -> i32 {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map_or(0, |a| a.score)
    }

    /// The catalog option matching the current answer, if any
    pub fn answered_option(&self, question_id: &str) -> Option<&'static AnswerOption> {
        let question = self.bank.find_question(question_id)?;
        question.option_for(self.question_score(question_id))
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn scores(&self) -> &ScoreSummary {
        &self.scores
    }

    pub fn domain_score(&self, domain: Domain) -> MaturityScore {
        self.scores.domain(domain)
    }

    pub fn overall_score(&self) -> MaturityScore {
        self.scores.overall_score
    }

    pub fn maturity_level(&self) -> MaturityLevel {
        MaturityLevel::classify(self.scores.overall_score)
    }

    pub fn completion(&self, domain: Domain) -> Completion {
        completion(&self.answers, &self.bank, domain)
    }

    pub fn overall_completion(&self) -> Completion {
        overall_completion(&self.answers, &self.bank)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    pub fn durability(&self) -> &Durability {
        &self.durability
    }

    pub fn snapshot(&self) -> AssessmentSnapshot {
        AssessmentSnapshot::capture(&self.answers, &self.scores, &self.bank)
    }

    // ==================== Internals ====================

    fn validate(&self, question_id: &str, score: i32) -> Result<(), AssessmentError> {
        let question = self
            .bank
            .find_question(question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(question_id.to_string()))?;

        if !question.accepts(score) {
            return Err(AssessmentError::InvalidScore {
                question_id: question_id.to_string(),
                score,
                valid: question.valid_scores(),
            });
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.scores = aggregate(&self.answers, &self.bank);
    }

    fn record_store_result(&mut self, operation: &str, result: Result<(), StoreError>) {
        self.durability = match result {
            Ok(()) => Self::baseline_durability(self.store.as_ref()),
            Err(e) => {
                warn!(
                    "Failed to {} at {}; keeping in-memory state: {}",
                    operation,
                    self.store.location(),
                    e
                );
                Self::degraded(&e)
            }
        };
    }

    fn notify(&self, change: &AssessmentChange) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.on_change(change, &snapshot);
        }
    }

    fn baseline_durability(store: &dyn AnswerStore) -> Durability {
        if store.is_durable() {
            Durability::Persisted
        } else {
            Durability::SessionOnly
        }
    }

    fn degraded(error: &StoreError) -> Durability {
        Durability::Degraded {
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_store::NoAnswerStore;
    use std::sync::Mutex;

    // ==================== Test Doubles ====================

    /// Store backed by a shared vector; survives engine re-creation.
    #[derive(Default)]
    struct SharedStore {
        record: Mutex<Option<Vec<Answer>>>,
        saves: Mutex<usize>,
    }

    impl SharedStore {
        fn seeded(answers: Vec<Answer>) -> Self {
            Self {
                record: Mutex::new(Some(answers)),
                saves: Mutex::new(0),
            }
        }

        fn record(&self) -> Option<Vec<Answer>> {
            self.record.lock().unwrap().clone()
        }

        fn saves(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    impl AnswerStore for SharedStore {
        fn load(&self) -> Result<Option<Vec<Answer>>, StoreError> {
            Ok(self.record())
        }

        fn save(&self, answers: &[Answer]) -> Result<(), StoreError> {
            *self.record.lock().unwrap() = Some(answers.to_vec());
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }

        fn clear(&self) -> Result<(), StoreError> {
            *self.record.lock().unwrap() = None;
            Ok(())
        }
    }

    /// Store whose every operation fails.
    struct BrokenStore;

    impl AnswerStore for BrokenStore {
        fn load(&self) -> Result<Option<Vec<Answer>>, StoreError> {
            Err(StoreError::Malformed("expected a list of answers".to_string()))
        }

        fn save(&self, _answers: &[Answer]) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }

        fn clear(&self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<(AssessmentChange, f64)>>,
    }

    impl AssessmentObserver for RecordingObserver {
        fn on_change(&self, change: &AssessmentChange, snapshot: &AssessmentSnapshot) {
            self.events
                .lock()
                .unwrap()
                .push((change.clone(), snapshot.overall_score().value()));
        }
    }

    // ==================== Helpers ====================

    fn engine_with(store: Arc<dyn AnswerStore>) -> AssessmentEngine {
        AssessmentEngine::initialize(QuestionBank::builtin(), store, AssessmentConfig::default())
    }

    fn fresh() -> (AssessmentEngine, Arc<SharedStore>) {
        let store = Arc::new(SharedStore::default());
        (engine_with(store.clone()), store)
    }

    // ==================== Tests ====================

    #[test]
    fn test_initialize_empty() {
        let (engine, _) = fresh();
        assert!(engine.answers().is_empty());
        assert!(engine.overall_score().is_unassessed());
        assert_eq!(engine.durability(), &Durability::Persisted);
    }

    #[test]
    fn test_set_answer_replaces_previous() {
        let (mut engine, _) = fresh();
        engine.set_answer("gov1", 2).unwrap();
        engine.set_answer("gov1", 5).unwrap();

        let for_gov1: Vec<&Answer> = engine
            .answers()
            .iter()
            .filter(|a| a.question_id == "gov1")
            .collect();
        assert_eq!(for_gov1.len(), 1);
        assert_eq!(for_gov1[0].score, 5);
        assert_eq!(engine.question_score("gov1"), 5);
    }

    #[test]
    fn test_aggregation_after_set_answer() {
        let (mut engine, _) = fresh();
        engine.set_answer("gov1", 4).unwrap();
        engine.set_answer("gov2", 2).unwrap();

        assert_eq!(engine.domain_score(Domain::Governance).value(), 3.0);
        assert_eq!(engine.domain_score(Domain::Management).value(), 0.0);
        assert_eq!(engine.domain_score(Domain::Operations).value(), 0.0);
        assert_eq!(engine.domain_score(Domain::Resources).value(), 0.0);
        assert_eq!(engine.overall_score().value(), 0.8);
    }

    #[test]
    fn test_full_catalog_scores_five() {
        let (mut engine, _) = fresh();
        let ids: Vec<&str> = engine.bank().all_questions().iter().map(|q| q.id()).collect();
        for id in ids {
            engine.set_answer(id, 5).unwrap();
        }
        for domain in Domain::ALL {
            assert_eq!(engine.domain_score(domain).value(), 5.0);
        }
        assert_eq!(engine.overall_score().value(), 5.0);
        assert_eq!(engine.maturity_level(), MaturityLevel::Optimized);
        assert!(engine.overall_completion().is_complete());
    }

    #[test]
    fn test_rounding_boundary() {
        let (mut engine, _) = fresh();
        engine.set_answer("mgmt1", 3).unwrap();
        engine.set_answer("mgmt2", 3).unwrap();
        engine.set_answer("mgmt3", 4).unwrap();
        assert_eq!(engine.domain_score(Domain::Management).value(), 3.3);
    }

    #[test]
    fn test_question_score_unanswered_is_zero() {
        let (engine, _) = fresh();
        assert_eq!(engine.question_score("gov1"), 0);
        assert_eq!(engine.question_score("nope"), 0);
        assert!(engine.answered_option("gov1").is_none());
    }

    #[test]
    fn test_answered_option_label() {
        let (mut engine, _) = fresh();
        engine.set_answer("res2", 4).unwrap();
        assert_eq!(
            engine.answered_option("res2").map(|o| o.label()),
            Some("Comprehensive training program with regular updates")
        );
    }

    #[test]
    fn test_set_answer_persists_full_set() {
        let (mut engine, store) = fresh();
        engine.set_answer("gov1", 4).unwrap();
        engine.set_answer("ops1", 1).unwrap();
        assert_eq!(
            store.record(),
            Some(vec![Answer::new("gov1", 4), Answer::new("ops1", 1)])
        );
        assert_eq!(store.saves(), 2);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut engine, store) = fresh();
        engine.set_answer("gov1", 4).unwrap();
        engine.set_answer("res5", 2).unwrap();
        engine.reset_assessment();

        assert!(engine.answers().is_empty());
        for domain in Domain::ALL {
            assert!(engine.domain_score(domain).is_unassessed());
        }
        assert!(engine.overall_score().is_unassessed());
        assert!(store.record().is_none());
    }

    #[test]
    fn test_restart_round_trip() {
        let (mut engine, store) = fresh();
        engine.set_answer("gov1", 4).unwrap();
        engine.set_answer("mgmt2", 3).unwrap();
        engine.set_answer("gov1", 2).unwrap();

        let restarted = engine_with(store);
        assert_eq!(restarted.answers(), engine.answers());
        assert_eq!(restarted.scores(), engine.scores());
    }

    #[test]
    fn test_unknown_stored_question_not_scored() {
        let store = Arc::new(SharedStore::seeded(vec![
            Answer::new("gov1", 4),
            Answer::new("retired-question", 1),
        ]));
        let engine = engine_with(store);

        assert_eq!(engine.answers().len(), 2);
        assert_eq!(engine.domain_score(Domain::Governance).value(), 4.0);
        assert_eq!(engine.scores().domain_scores.answered(Domain::Governance), 1);
        assert_eq!(engine.overall_score().value(), 1.0);
    }

    #[test]
    fn test_stored_duplicates_collapse_last_wins() {
        let store = Arc::new(SharedStore::seeded(vec![
            Answer::new("gov1", 1),
            Answer::new("gov1", 5),
        ]));
        let engine = engine_with(store);
        assert_eq!(engine.answers(), &[Answer::new("gov1", 5)]);
    }

    #[test]
    fn test_strict_rejects_unknown_question() {
        let (mut engine, store) = fresh();
        let err = engine.set_answer("gov99", 3).unwrap_err();
        assert_eq!(err, AssessmentError::UnknownQuestion("gov99".to_string()));
        assert!(engine.answers().is_empty());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_strict_rejects_score_outside_options() {
        let (mut engine, _) = fresh();
        engine.set_answer("gov1", 3).unwrap();
        let err = engine.set_answer("gov1", 7).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidScore {
                question_id: "gov1".to_string(),
                score: 7,
                valid: vec![1, 2, 3, 4, 5],
            }
        );
        assert_eq!(engine.question_score("gov1"), 3);
        assert_eq!(engine.domain_score(Domain::Governance).value(), 3.0);
    }

    #[test]
    fn test_permissive_stores_anything() {
        let store = Arc::new(SharedStore::default());
        let mut engine = AssessmentEngine::initialize(
            QuestionBank::builtin(),
            store.clone(),
            AssessmentConfig::permissive(),
        );
        engine.set_answer("gov1", 9).unwrap();
        engine.set_answer("custom", 2).unwrap();

        assert_eq!(engine.question_score("gov1"), 9);
        assert_eq!(engine.question_score("custom"), 2);
        assert_eq!(engine.domain_score(Domain::Governance).value(), 9.0);
        assert_eq!(store.record().map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_failing_store_keeps_in_memory_state() {
        let mut engine = engine_with(Arc::new(BrokenStore));
        assert!(engine.answers().is_empty());
        assert!(engine.durability().is_degraded());

        engine.set_answer("ops1", 4).unwrap();
        assert_eq!(engine.question_score("ops1"), 4);
        assert_eq!(engine.domain_score(Domain::Operations).value(), 4.0);
        assert_eq!(
            engine.durability(),
            &Durability::Degraded {
                reason: "Storage unavailable: quota exceeded".to_string()
            }
        );

        engine.reset_assessment();
        assert!(engine.answers().is_empty());
        assert!(engine.durability().is_degraded());
    }

    #[test]
    fn test_durability_recovers_after_successful_write() {
        let store = Arc::new(SharedStore::default());
        let mut engine = engine_with(store);
        engine.durability = Durability::Degraded {
            reason: "earlier failure".to_string(),
        };
        engine.set_answer("gov1", 1).unwrap();
        assert_eq!(engine.durability(), &Durability::Persisted);
    }

    #[test]
    fn test_session_only_store() {
        let mut engine = engine_with(Arc::new(NoAnswerStore));
        engine.set_answer("gov1", 3).unwrap();
        assert_eq!(engine.durability(), &Durability::SessionOnly);
        assert_eq!(engine.question_score("gov1"), 3);
    }

    #[test]
    fn test_observers_notified_once_per_mutation() {
        let observer = Arc::new(RecordingObserver::default());
        let (engine, _) = fresh();
        let mut engine = engine.with_observer(observer.clone());

        engine.set_answer("gov1", 4).unwrap();
        engine.set_answer("gov1", 2).unwrap();
        let _ = engine.set_answer("gov1", 0);
        engine.reset_assessment();

        let events = observer.events.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            (
                AssessmentChange::AnswerSet {
                    question_id: "gov1".to_string(),
                    score: 4,
                    previous: None,
                },
                1.0
            )
        );
        assert_eq!(
            events[1].0,
            AssessmentChange::AnswerSet {
                question_id: "gov1".to_string(),
                score: 2,
                previous: Some(4),
            }
        );
        assert_eq!(events[1].1, 0.5);
        assert_eq!(events[2], (AssessmentChange::Reset, 0.0));
    }

    #[test]
    fn test_completion_tracks_answers() {
        let (mut engine, _) = fresh();
        engine.set_answer("res1", 3).unwrap();
        engine.set_answer("res2", 3).unwrap();
        assert_eq!(engine.completion(Domain::Resources).percent(), 40);
        assert_eq!(engine.completion(Domain::Governance).percent(), 0);
        assert_eq!(engine.overall_completion(), Completion::new(2, 20));
    }
}
