/**
 * Definitions of data structures used by several modules, such as `QuizError` and the
 * various structs that hold command-line arguments.
 */
use std::io;
use std::path::PathBuf;

use structopt::StructOpt;
use thiserror::Error;


pub type Result<T> = ::std::result::Result<T, QuizError>;


#[derive(Debug, Error)]
pub enum QuizError {
    /// For when selection is attempted with no active questions.
    #[error("no active questions available")]
    EmptyPool,
    /// For when a profile is out of sync with the question bank.
    #[error("profile has no statistics for question {0}")]
    MissingStat(u64),
    #[error("invalid selection weight {weight} for question {question_id}")]
    InvalidWeight { question_id: u64, weight: f64 },
    /// For when a profile on disk has more correct answers than showings for a question.
    #[error("profile '{profile}' has more correct answers than showings for question {question_id}")]
    CorruptProfile { profile: String, question_id: u64 },
    #[error("invalid question: {0}")]
    InvalidQuestion(String),
    #[error("could not find question with ID {0}")]
    QuestionNotFound(u64),
    #[error("could not find profile named '{0}'")]
    ProfileNotFound(String),
    #[error("could not read ID counter at '{}'", .0.to_string_lossy())]
    CorruptCounter(PathBuf),
    #[error("cannot write to file '{}'", .0.to_string_lossy())]
    CannotWriteToFile(PathBuf),
    /// For when the data directory cannot be created.
    #[error("unable to create data directory at {}", .0.to_string_lossy())]
    CannotMakeDataDir(PathBuf),
    #[error("could not determine a data directory; use --directory")]
    NoDataDir,
    /// For JSON errors.
    #[error("could not parse JSON ({0})")]
    Json(#[from] serde_json::Error),
    #[error("IO error ({0})")]
    Io(#[from] io::Error),
    #[error("")]
    ReadlineInterrupted,
}


/// Return `true` if the error was caused by writing to a closed pipe, e.g. when output
/// is piped into `head`.
pub fn is_broken_pipe(e: &QuizError) -> bool {
    if let QuizError::Io(e) = e {
        e.kind() == io::ErrorKind::BrokenPipe
    } else {
        false
    }
}


/// Holds the command-line configuration for the application.
#[derive(StructOpt)]
#[structopt(name = "quizbank", about = "Practice and test yourself from the command line.")]
pub struct Options {
    /// Keep questions and profiles in a particular directory.
    #[structopt(short = "d", long = "directory", parse(from_os_str))]
    pub directory: Option<PathBuf>,
    /// Do not emit colorized output.
    #[structopt(long = "no-color")]
    pub no_color: bool,
    #[structopt(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(StructOpt)]
pub enum Command {
    /// Open the interactive menu (the default).
    #[structopt(name = "menu")]
    Menu,
    /// Add questions to the bank.
    #[structopt(name = "add")]
    Add,
    /// Show per-question statistics for an existing profile.
    #[structopt(name = "stats")]
    Stats(ProfileOptions),
    /// Enable or disable questions.
    #[structopt(name = "toggle")]
    Toggle(ToggleOptions),
    /// Answer adaptively chosen questions until end of input.
    #[structopt(name = "practice")]
    Practice(ProfileOptions),
    /// Take a scored test.
    #[structopt(name = "test")]
    Test(TestOptions),
    /// List profiles.
    #[structopt(name = "profiles")]
    Profiles,
}

#[derive(StructOpt)]
pub struct ProfileOptions {
    /// Name of the profile. `practice` creates it if it does not exist.
    #[structopt(short = "p", long = "profile")]
    pub profile: String,
}

#[derive(StructOpt)]
pub struct ToggleOptions {
    /// IDs of the questions to enable or disable.
    #[structopt(required = true)]
    pub ids: Vec<u64>,
}

#[derive(StructOpt)]
pub struct TestOptions {
    /// Number of questions to ask. Defaults to every active question.
    #[structopt(short = "n")]
    pub num_to_ask: Option<usize>,
}
