/**
 * Tests of the adaptive loop through the library: stores on disk, selection, and
 * statistics updates.
 */
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use quizbank::config::Config;
use quizbank::{
    record_answer, select_question, Candidate, ProfileStore, QuestionKind, QuestionStore,
    QuizError,
};


#[test]
fn stats_survive_a_save_and_reload() {
    let (_dir, questions, profiles) = stores();
    let q = questions
        .create("What is the capital of Mongolia?", freeform("Ulan Bator"))
        .unwrap();
    questions.append(&[q.clone()]).unwrap();

    let mut alice = profiles.create("alice", &questions).unwrap();
    let stat = alice.stat_mut(q.id).unwrap();
    record_answer(stat, q.check_answer(Candidate::Text("Ulan Bator")));
    record_answer(stat, q.check_answer(Candidate::Text("Beijing")));
    profiles.save(&alice).unwrap();

    let reloaded = profiles.load("alice").unwrap();
    assert_eq!(reloaded, alice);
    let stat = profiles.stat_for(&reloaded, q.id).unwrap();
    assert_eq!((stat.times_shown, stat.correct_answers), (2, 1));
    assert!((stat.selection_probability - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn inactive_questions_are_never_selected() {
    let (_dir, questions, profiles) = stores();
    let mut new = Vec::new();
    for i in 0..3 {
        new.push(questions.create(&format!("Question {}?", i), freeform("yes")).unwrap());
    }
    questions.append(&new).unwrap();
    let alice = profiles.create("alice", &questions).unwrap();
    questions.toggle_status(&[2]).unwrap();

    let active = questions.load_active().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let q = select_question(&active, &alice.stats, &mut rng).unwrap();
        assert_ne!(q.id, 2);
    }
}

#[test]
fn questions_missed_often_come_up_less() {
    let (_dir, questions, profiles) = stores();
    let missed = questions.create("Always missed?", freeform("a")).unwrap();
    let known = questions.create("Always known?", freeform("b")).unwrap();
    questions.append(&[missed.clone(), known.clone()]).unwrap();
    let mut alice = profiles.create("alice", &questions).unwrap();

    let mut rng = StdRng::seed_from_u64(12);
    let active = questions.load_active().unwrap();
    for _ in 0..400 {
        let id = select_question(&active, &alice.stats, &mut rng).unwrap().id;
        record_answer(alice.stat_mut(id).unwrap(), id == known.id);
    }

    let missed = alice.stat(missed.id).unwrap();
    let known_weight = alice.stat(known.id).unwrap().selection_probability;
    assert!(missed.selection_probability < 0.15, "missed weight {}", missed.selection_probability);
    assert!(missed.times_shown < alice.stat(known.id).unwrap().times_shown);
    assert_eq!(known_weight, 1.0);
}

#[test]
fn question_added_without_sync_is_reported() {
    let (_dir, questions, profiles) = stores();
    let alice = profiles.create("alice", &questions).unwrap();
    let q = questions.create("Late arrival?", freeform("yes")).unwrap();
    questions.append(&[q]).unwrap();

    let active = questions.load_active().unwrap();
    let mut rng = StdRng::seed_from_u64(13);
    let result = select_question(&active, &alice.stats, &mut rng);
    assert!(matches!(result, Err(QuizError::MissingStat(1))));

    // Syncing repairs the profile on disk.
    profiles.sync_new_questions(&active).unwrap();
    let alice = profiles.load("alice").unwrap();
    assert_eq!(select_question(&active, &alice.stats, &mut rng).unwrap().id, 1);
}

#[test]
fn ids_are_never_reused_across_store_instances() {
    let (dir, questions, profiles) = stores();
    let first = questions.create("First?", freeform("1")).unwrap();
    profiles.create("alice", &questions).unwrap();

    let config = Config::new(dir.path());
    let questions = QuestionStore::new(config.questions_path(), config.question_counter());
    let profiles = ProfileStore::new(config.profiles_dir(), config.profile_counter());
    let second = questions.create("Second?", freeform("2")).unwrap();
    let bob = profiles.create("bob", &questions).unwrap();

    assert_eq!((first.id, second.id), (1, 2));
    assert_eq!(bob.id, 2);
}


fn stores() -> (TempDir, QuestionStore, ProfileStore) {
    let dir = TempDir::new().unwrap();
    let config = Config::new(dir.path());
    config.require_dirs().unwrap();
    let questions = QuestionStore::new(config.questions_path(), config.question_counter());
    let profiles = ProfileStore::new(config.profiles_dir(), config.profile_counter());
    (dir, questions, profiles)
}

fn freeform(answer: &str) -> QuestionKind {
    QuestionKind::FreeForm { correct_answer: String::from(answer) }
}
