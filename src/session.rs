/**
 * Practice and test sessions.
 *
 * A practice session asks adaptively chosen questions until the user stops, updating
 * the profile's statistics after every answer. A test asks a fixed number of distinct
 * questions, leaves the statistics alone, and logs the final score.
 */
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use super::common::{QuizError, Result};
use super::profiles::{Profile, ProfileStore};
use super::question::{Candidate, Question, QuestionKind};
use super::questions::QuestionStore;
use super::selection::{record_answer, select_question};
use super::ui::CmdUI;


/// Tallies for one practice session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PracticeSummary {
    pub total: usize,
    pub total_correct: usize,
}


/// Represents the results of taking a test on a particular occasion.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub time_finished: chrono::DateTime<chrono::Local>,
    pub total: usize,
    pub total_correct: usize,
    /// Percentage of questions answered correctly.
    pub score: f64,
}


impl TestResult {
    pub fn new(total: usize, total_correct: usize) -> Self {
        let score = if total > 0 {
            (total_correct as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        Self { time_finished: chrono::Local::now(), total, total_correct, score }
    }

    /// The line appended to the results log.
    pub fn log_line(&self) -> String {
        format!(
            "{} - Score: {:.2}%",
            self.time_finished.format("%Y-%m-%d %H:%M:%S"),
            self.score,
        )
    }
}


/// Ask questions chosen by `select_question` until the user enters end-of-file,
/// saving the profile after every answer.
///
/// Returns `QuizError::EmptyPool` without asking anything if no question is active.
pub fn practice<R: Rng + ?Sized>(
    ui: &mut CmdUI,
    questions: &QuestionStore,
    profiles: &ProfileStore,
    profile: &mut Profile,
    rng: &mut R,
) -> Result<PracticeSummary> {
    let mut summary = PracticeSummary::default();
    loop {
        let active = questions.load_active()?;
        let question = select_question(&active, &profile.stats, rng)?;

        ui.next();
        let correct = match ask(ui, question) {
            Ok(Some(correct)) => correct,
            Ok(None) | Err(QuizError::ReadlineInterrupted) => break,
            Err(e) => return Err(e),
        };

        let stat = profile.stat_mut(question.id).ok_or(QuizError::MissingStat(question.id))?;
        record_answer(stat, correct);
        profiles.save(profile)?;

        summary.total += 1;
        if correct {
            summary.total_correct += 1;
        }
    }

    info!(
        profile = %profile.name, answered = summary.total, correct = summary.total_correct,
        "finished practice"
    );
    ui.practice_summary(&summary)?;
    Ok(summary)
}


/// Ask up to `num_to_ask` distinct active questions in random order.
///
/// `Ok(None)` is returned if the user quits before answering every question.
pub fn take_test<R: Rng + ?Sized>(
    ui: &mut CmdUI,
    questions: &QuestionStore,
    num_to_ask: usize,
    rng: &mut R,
) -> Result<Option<TestResult>> {
    let mut chosen = questions.load_active()?;
    if chosen.is_empty() {
        return Err(QuizError::EmptyPool);
    }

    chosen.shuffle(rng);
    chosen.truncate(num_to_ask.max(1));

    let mut total_correct = 0;
    for question in chosen.iter() {
        ui.next();
        match ask(ui, question) {
            Ok(Some(correct)) => {
                if correct {
                    total_correct += 1;
                }
            },
            Ok(None) | Err(QuizError::ReadlineInterrupted) => {
                ui.status("Test mode aborted.")?;
                return Ok(None);
            },
            Err(e) => {
                return Err(e);
            },
        }
    }

    let result = TestResult::new(chosen.len(), total_correct);
    ui.test_results(&result)?;
    Ok(Some(result))
}


/// Append a line for `result` to the results log at `path`.
pub fn save_result(path: &Path, result: &TestResult) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .or(Err(QuizError::CannotWriteToFile(path.to_path_buf())))?;
    writeln!(file, "{}", result.log_line()).map_err(QuizError::Io)?;
    info!(path = %path.display(), score = result.score, "saved test result");
    Ok(())
}


/// Ask a single question and report whether it was answered correctly. `Ok(None)` means
/// the user entered end-of-file instead of answering.
fn ask(ui: &mut CmdUI, question: &Question) -> Result<Option<bool>> {
    ui.text(&question.prompt)?;

    let correct = match &question.kind {
        QuestionKind::MultipleChoice { options, .. } => {
            ui.choices(options)?;
            match ui.prompt_choice(options.len())? {
                Some(i) => question.check_answer(Candidate::Choice(i)),
                None => return Ok(None),
            }
        },
        QuestionKind::FreeForm { .. } => {
            match ui.prompt()? {
                Some(guess) => question.check_answer(Candidate::Text(&guess)),
                None => return Ok(None),
            }
        },
    };

    if correct {
        ui.correct()?;
    } else {
        ui.incorrect(Some(question.answer_text()))?;
    }
    Ok(Some(correct))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_a_percentage() {
        let result = TestResult::new(3, 2);
        assert!((result.score - 66.666).abs() < 0.01);
        assert!(result.log_line().ends_with(" - Score: 66.67%"));
    }

    #[test]
    fn empty_test_scores_zero() {
        assert_eq!(TestResult::new(0, 0).score, 0.0);
    }

    #[test]
    fn log_line_has_timestamp() {
        let result = TestResult::new(4, 4);
        let line = result.log_line();
        // e.g. "2019-10-05 14:03:22 - Score: 100.00%"
        assert_eq!(line.len(), "2019-10-05 14:03:22 - Score: 100.00%".len());
        assert_eq!(&line[4..5], "-");
        assert_eq!(&line[10..11], " ");
    }

    #[test]
    fn results_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        save_result(&path, &TestResult::new(2, 1)).unwrap();
        save_result(&path, &TestResult::new(2, 2)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Score: 50.00%"));
        assert!(lines[1].ends_with("Score: 100.00%"));
    }

    #[test]
    fn empty_bank_cannot_be_tested() {
        let dir = tempfile::tempdir().unwrap();
        let store = QuestionStore::new(
            dir.path().join("questions.json"),
            crate::counter::IdCounter::new(dir.path().join("last_id_questions.txt")),
        );
        let mut ui = CmdUI::new();
        let mut rng = rand::thread_rng();
        let result = take_test(&mut ui, &store, 5, &mut rng);
        assert!(matches!(result, Err(QuizError::EmptyPool)));
    }
}
