/**
 * Locations of the files the application reads and writes.
 */
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::common::{QuizError, Result};
use super::counter::IdCounter;


/// Environment variable that overrides the default data directory.
pub const DATA_DIR_VAR: &str = "QUIZBANK_DIR";


#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
}


impl Config {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self { data_dir: data_dir.as_ref().to_path_buf() }
    }

    /// Pick the data directory: the command-line flag if given, then the environment
    /// variable, then the platform's data directory.
    pub fn resolve(directory: Option<PathBuf>) -> Result<Self> {
        if let Some(directory) = directory {
            return Ok(Self::new(directory));
        }

        if let Some(directory) = env::var_os(DATA_DIR_VAR) {
            if !directory.is_empty() {
                return Ok(Self::new(directory));
            }
        }

        let mut dirpath = dirs::data_dir().ok_or(QuizError::NoDataDir)?;
        dirpath.push("quizbank");
        Ok(Self::new(dirpath))
    }

    /// Create the data directory and its subdirectories if they don't exist.
    pub fn require_dirs(&self) -> Result<()> {
        for dir in &[self.data_dir.clone(), self.profiles_dir()] {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .or(Err(QuizError::CannotMakeDataDir(dir.clone())))?;
                debug!(path = %dir.display(), "created directory");
            }
        }
        Ok(())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join("questions.json")
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.data_dir.join("profiles")
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join("results.txt")
    }

    pub fn question_counter(&self) -> IdCounter {
        IdCounter::new(self.data_dir.join("last_id_questions.txt"))
    }

    pub fn profile_counter(&self) -> IdCounter {
        IdCounter::new(self.data_dir.join("last_id_profiles.txt"))
    }
}
