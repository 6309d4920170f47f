//! Engine lifecycle against the real storage adapters.

use maturity_application::{AssessmentConfig, AssessmentEngine, Durability};
use maturity_domain::{Answer, Domain, QuestionBank};
use maturity_infrastructure::{InMemoryAnswerStore, JsonFileAnswerStore, JsonlAssessmentJournal};
use std::fs;
use std::sync::Arc;

fn open_engine(store: Arc<JsonFileAnswerStore>) -> AssessmentEngine {
    AssessmentEngine::initialize(QuestionBank::builtin(), store, AssessmentConfig::default())
}

#[test]
fn test_restart_reproduces_answers_and_scores() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileAnswerStore::in_dir(dir.path()));

    let mut engine = open_engine(store.clone());
    engine.set_answer("gov1", 4).unwrap();
    engine.set_answer("gov2", 2).unwrap();
    engine.set_answer("ops3", 5).unwrap();
    engine.set_answer("gov2", 3).unwrap();
    assert_eq!(engine.durability(), &Durability::Persisted);

    let restarted = open_engine(store);
    assert_eq!(restarted.answers(), engine.answers());
    assert_eq!(restarted.scores(), engine.scores());
    assert_eq!(restarted.domain_score(Domain::Governance).value(), 3.5);
    assert_eq!(restarted.domain_score(Domain::Operations).value(), 5.0);
    // (3.5 + 0 + 5.0 + 0) / 4 = 2.125
    assert_eq!(restarted.overall_score().value(), 2.1);
}

#[test]
fn test_reset_erases_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileAnswerStore::in_dir(dir.path()));

    let mut engine = open_engine(store.clone());
    engine.set_answer("res1", 2).unwrap();
    assert!(store.path().exists());

    engine.reset_assessment();
    assert!(!store.path().exists());

    let restarted = open_engine(store);
    assert!(restarted.answers().is_empty());
    assert!(restarted.overall_score().is_unassessed());
}

#[test]
fn test_hand_edited_record_with_unknown_question() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileAnswerStore::in_dir(dir.path()));
    fs::write(
        store.path(),
        r#"[{"questionId":"mgmt1","score":3},{"questionId":"ghost","score":5}]"#,
    )
    .unwrap();

    let engine = open_engine(store);
    assert_eq!(engine.answers().len(), 2);
    assert_eq!(engine.domain_score(Domain::Management).value(), 3.0);
    for domain in [Domain::Governance, Domain::Operations, Domain::Resources] {
        assert!(engine.domain_score(domain).is_unassessed());
    }
    assert_eq!(engine.question_score("ghost"), 5);
}

#[test]
fn test_malformed_record_starts_empty_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileAnswerStore::in_dir(dir.path()));
    fs::write(store.path(), r#"{"answers": "oops"}"#).unwrap();

    let mut engine = open_engine(store.clone());
    assert!(engine.answers().is_empty());
    assert!(engine.durability().is_degraded());

    engine.set_answer("gov5", 1).unwrap();
    assert_eq!(engine.durability(), &Durability::Persisted);
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        r#"[{"questionId":"gov5","score":1}]"#
    );
}

#[test]
fn test_in_memory_store_survives_engine_restart() {
    let store = Arc::new(InMemoryAnswerStore::with_payload(
        r#"[{"questionId":"ops1","score":3},{"questionId":"ops2","score":3},{"questionId":"ops3","score":4}]"#,
    ));
    let mut engine = AssessmentEngine::initialize(
        QuestionBank::builtin(),
        store.clone(),
        AssessmentConfig::default(),
    );
    assert_eq!(engine.domain_score(Domain::Operations).value(), 3.3);
    assert_eq!(engine.durability(), &Durability::SessionOnly);

    engine.set_answer("ops4", 5).unwrap();
    let restarted =
        AssessmentEngine::initialize(QuestionBank::builtin(), store, AssessmentConfig::default());
    // 3 + 3 + 4 + 5 = 15 over 4 = 3.75
    assert_eq!(restarted.domain_score(Domain::Operations).value(), 3.8);
    assert_eq!(restarted.answers().last(), Some(&Answer::new("ops4", 5)));
}

#[test]
fn test_journal_records_engine_changes() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileAnswerStore::in_dir(dir.path()));
    let journal_path = dir.path().join("journal.jsonl");
    let journal = Arc::new(JsonlAssessmentJournal::open(&journal_path).unwrap());

    let mut engine = open_engine(store).with_observer(journal.clone());
    engine.set_answer("gov1", 4).unwrap();
    engine.set_answer("gov1", 5).unwrap();
    engine.reset_assessment();
    drop(engine);
    drop(journal);

    let content = fs::read_to_string(&journal_path).unwrap();
    let kinds: Vec<String> = content
        .lines()
        .map(|l| {
            let value: serde_json::Value = serde_json::from_str(l).unwrap();
            value["type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(kinds, vec!["answer_set", "answer_set", "assessment_reset"]);
}
