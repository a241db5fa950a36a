/**
 * Persistent monotonic ID counters.
 *
 * Each counter is a text file holding the last ID handed out. IDs are never reused, so
 * the file is rewritten on every allocation.
 */
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::common::{QuizError, Result};


#[derive(Debug, Clone)]
pub struct IdCounter {
    path: PathBuf,
}


impl IdCounter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Return the last ID handed out, or 0 if none has been.
    pub fn last_id(&self) -> Result<u64> {
        match fs::read_to_string(&self.path) {
            Ok(data) => {
                data.trim().parse::<u64>()
                    .map_err(|_| QuizError::CorruptCounter(self.path.clone()))
            },
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(QuizError::Io(e)),
        }
    }

    /// Allocate and return the next ID.
    pub fn next_id(&self) -> Result<u64> {
        let id = self.last_id()? + 1;
        fs::write(&self.path, id.to_string())
            .or(Err(QuizError::CannotWriteToFile(self.path.clone())))?;
        debug!(path = %self.path.display(), id, "allocated id");
        Ok(id)
    }
}
