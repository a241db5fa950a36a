/**
 * The question bank, stored as a single JSON array.
 */
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::common::{QuizError, Result};
use super::counter::IdCounter;
use super::question::{Question, QuestionKind};


pub struct QuestionStore {
    path: PathBuf,
    counter: IdCounter,
}


impl QuestionStore {
    pub fn new<P: AsRef<Path>>(path: P, counter: IdCounter) -> Self {
        Self { path: path.as_ref().to_path_buf(), counter }
    }

    /// Load every question in the order it was added. A missing file is an empty bank.
    pub fn load_all(&self) -> Result<Vec<Question>> {
        let questions: Vec<Question> = match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data).map_err(QuizError::Json)?,
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(QuizError::Io(e)),
        };

        for q in questions.iter() {
            q.validate()?;
        }
        debug!(path = %self.path.display(), count = questions.len(), "loaded questions");
        Ok(questions)
    }

    pub fn load_active(&self) -> Result<Vec<Question>> {
        Ok(self.load_all()?.into_iter().filter(|q| q.active).collect())
    }

    pub fn get(&self, id: u64) -> Result<Question> {
        self.load_all()?
            .into_iter()
            .find(|q| q.id == id)
            .ok_or(QuizError::QuestionNotFound(id))
    }

    /// Build a new active question with a freshly allocated ID. The question is not
    /// saved until it is passed to `append`.
    pub fn create(&self, prompt: &str, kind: QuestionKind) -> Result<Question> {
        let id = self.counter.next_id()?;
        Question::new(id, prompt, kind)
    }

    pub fn last_id(&self) -> Result<u64> {
        self.counter.last_id()
    }

    pub fn append(&self, new_questions: &[Question]) -> Result<()> {
        if new_questions.is_empty() {
            return Ok(());
        }

        let mut questions = self.load_all()?;
        questions.extend(new_questions.iter().cloned());
        self.save_all(&questions)?;
        info!(count = new_questions.len(), "added questions");
        Ok(())
    }

    /// Flip the active flag of each question in `ids`, returning the new status of each.
    /// Nothing is written if any ID is unknown.
    pub fn toggle_status(&self, ids: &[u64]) -> Result<Vec<(u64, bool)>> {
        let mut questions = self.load_all()?;
        let positions: HashMap<u64, usize> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id, i))
            .collect();

        let mut changed = Vec::new();
        for id in ids.iter() {
            let i = *positions.get(id).ok_or(QuizError::QuestionNotFound(*id))?;
            questions[i].active = !questions[i].active;
            changed.push((*id, questions[i].active));
        }

        self.save_all(&questions)?;
        for (id, active) in changed.iter() {
            info!(id, active, "toggled question");
        }
        Ok(changed)
    }

    fn save_all(&self, questions: &[Question]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(questions).map_err(QuizError::Json)?;
        fs::write(&self.path, serialized)
            .or(Err(QuizError::CannotWriteToFile(self.path.clone())))?;
        debug!(path = %self.path.display(), count = questions.len(), "saved questions");
        Ok(())
    }
}
