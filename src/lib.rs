/**
 * A terminal quiz application with per-profile adaptive question selection.
 */
#[macro_use]
pub mod iohelper;
pub mod common;
pub mod config;
pub mod counter;
pub mod profiles;
pub mod question;
pub mod questions;
pub mod selection;
pub mod session;
pub mod shell;
pub mod ui;

pub use common::{QuizError, Result};
pub use profiles::{Profile, ProfileStore, QuestionStat};
pub use question::{Candidate, Question, QuestionKind};
pub use questions::QuestionStore;
pub use selection::{record_answer, select_question};
