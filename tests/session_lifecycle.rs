use std::collections::HashSet;
use std::fs;

use quiz_bank::session::SessionPhase;
use quiz_bank::{
    LoadError, OptionLabel, QuestionRecord, QuestionSource, QuestionStore, QuizOption, Reference,
    SessionError, SessionRegistry, start_quiz,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

const BANK: &str = "\
question,option_a,option_b,option_c,option_d,option_e,answer,reference_document,reference_clause
Who approves the annual plan?,The board,The director,The council,,,B,Decree 15,Art. 4
How many days for an appeal?,10,15,30,45,,C,Law 2,Art. 7.1
Which form is used for returns?,Form 01,Form 02,,,,a,Circular 80,Annex I
Minimum quorum?,Half,Two thirds,Three quarters,All,None,b,Charter,Art. 12
Who signs the minutes?,Chair,Secretary,Both,,,c,Charter,Art. 14
";

fn write_bank(contents: &str) -> (TempDir, QuestionSource) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.csv");
    fs::write(&path, contents).unwrap();
    let source = QuestionSource::new(path);
    (dir, source)
}

fn correct(store: &QuestionStore, id: usize) -> String {
    store.get(id).unwrap().correct_value().unwrap().to_string()
}

#[test]
fn five_questions_three_drawn_two_right_one_blank() {
    let (_dir, source) = write_bank(BANK);
    let store = source.load().unwrap();
    assert_eq!(store.len(), 5);

    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = start_quiz(&store, 3, &mut rng).unwrap();
    let ids = session.selected_ids().to_vec();
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 3);

    session.record_answer(ids[0], correct(&store, ids[0])).unwrap();
    session.record_answer(ids[1], correct(&store, ids[1])).unwrap();
    session.submit().unwrap();
    assert_eq!(session.phase(), SessionPhase::Submitted);

    let report = session.score(&store).unwrap();
    assert_eq!(report.correct_count, 2);
    assert_eq!(report.total_count, 3);
    assert!(!report.verdicts[2].is_correct);
    assert_eq!(report.verdicts[2].user_value, None);
    assert_eq!(report, session.score(&store).unwrap());

    session.reset();
}

#[test]
fn invalid_counts_are_rejected() {
    let (_dir, source) = write_bank(BANK);
    let store = source.load().unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(
        start_quiz(&store, 0, &mut rng).unwrap_err(),
        SessionError::InvalidCount {
            requested: 0,
            available: 5
        }
    );
    assert_eq!(
        start_quiz(&store, 6, &mut rng).unwrap_err(),
        SessionError::InvalidCount {
            requested: 6,
            available: 5
        }
    );
}

#[test]
fn answer_letter_without_option_rejects_bank() {
    let bank = format!("{}Broken row,x,y,,,,C,Doc,Art. 1\n", BANK);
    let (_dir, source) = write_bank(&bank);

    match source.load() {
        Err(LoadError::Malformed { line, reason }) => {
            assert_eq!(line, 7);
            assert!(reason.contains("answer C"));
        }
        other => panic!("expected malformed bank, got {:?}", other),
    }
    assert!(!source.is_loaded());
}

#[test]
fn wrong_answers_and_locking() {
    let (_dir, source) = write_bank(BANK);
    let store = source.load().unwrap();
    let mut session = start_quiz(&store, 5, &mut StdRng::seed_from_u64(5)).unwrap();
    let id = session.selected_ids()[0];
    let question = store.get(id).unwrap();
    let wrong = question
        .options
        .iter()
        .find(|option| option.label != question.correct_label)
        .unwrap()
        .value
        .clone();

    session.record_answer(id, wrong.clone()).unwrap();
    session.submit().unwrap();
    assert_eq!(
        session.record_answer(id, correct(&store, id)),
        Err(SessionError::SessionClosed)
    );
    assert_eq!(session.answer(id), Some(wrong.as_str()));

    let report = session.score(&store).unwrap();
    assert_eq!(report.correct_count, 0);
    assert_eq!(report.verdicts[0].correct_value, correct(&store, id));
}

#[test]
fn registry_hosts_isolated_users_over_one_bank() {
    let (_dir, source) = write_bank(BANK);
    let store = source.load().unwrap();
    let mut rng = StdRng::seed_from_u64(77);
    let mut registry = SessionRegistry::new();

    let first = registry.create(&store, 2, &mut rng).unwrap();
    let second = registry.create(&store, 4, &mut rng).unwrap();

    let id = registry.get(first).unwrap().selected_ids()[0];
    let value = correct(&store, id);
    registry.get_mut(first).unwrap().record_answer(id, value).unwrap();
    registry.get_mut(first).unwrap().submit().unwrap();

    let report = registry.get(first).unwrap().score(&store).unwrap();
    assert_eq!(report.correct_count, 1);
    assert_eq!(registry.get(second).unwrap().answered_count(), 0);

    assert!(registry.reset(first));
    assert_eq!(registry.len(), 1);
    assert!(store.same_bank(&source.load().unwrap()));
}

#[test]
fn hand_built_bank_with_dangling_answer_never_scores() {
    let record = QuestionRecord {
        id: 0,
        text: "Which annex lists the forms?".to_string(),
        options: vec![
            QuizOption {
                label: OptionLabel::A,
                value: "Annex I".to_string(),
            },
            QuizOption {
                label: OptionLabel::B,
                value: "Annex II".to_string(),
            },
        ],
        correct_label: OptionLabel::C,
        reference: Reference::default(),
    };

    match QuestionStore::new(vec![record.clone()]) {
        Err(LoadError::InvalidRecord { index: 0, reason }) => {
            assert!(reason.contains("answer C"), "{}", reason);
        }
        other => panic!("expected invalid record, got {:?}", other),
    }

    let fixed = QuestionRecord {
        correct_label: OptionLabel::B,
        ..record
    };
    let store = QuestionStore::new(vec![fixed]).unwrap();
    let mut session = start_quiz(&store, 1, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(
        session.record_choice(&store, 0, ""),
        Err(SessionError::InvalidAnswer {
            id: 0,
            value: String::new()
        })
    );
    session.submit().unwrap();

    let report = session.score(&store).unwrap();
    assert_eq!(report.correct_count, 0);
    assert_eq!(report.verdicts[0].correct_value, "Annex II");
}
