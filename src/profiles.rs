/**
 * User profiles and their per-question statistics. Each profile lives in its own JSON
 * file named after its ID.
 */
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::common::{QuizError, Result};
use super::counter::IdCounter;
use super::question::Question;
use super::questions::QuestionStore;


/// How a single profile has fared on a single question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuestionStat {
    #[serde(rename = "id")]
    pub question_id: u64,
    pub times_shown: u64,
    /// Never greater than `times_shown`.
    pub correct_answers: u64,
    /// Sampling weight in [0, 1]. See `selection::record_answer`.
    pub selection_probability: f64,
}


#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    #[serde(rename = "questions_stats")]
    pub stats: Vec<QuestionStat>,
}


impl QuestionStat {
    pub fn new(question_id: u64) -> Self {
        Self { question_id, times_shown: 0, correct_answers: 0, selection_probability: 1.0 }
    }

    /// Percentage of correct answers, or 0 if the question has never been shown.
    pub fn correct_percentage(&self) -> f64 {
        if self.times_shown > 0 {
            (self.correct_answers as f64 / self.times_shown as f64) * 100.0
        } else {
            0.0
        }
    }
}


impl Profile {
    pub fn stat(&self, question_id: u64) -> Option<&QuestionStat> {
        self.stats.iter().find(|s| s.question_id == question_id)
    }

    pub fn stat_mut(&mut self, question_id: u64) -> Option<&mut QuestionStat> {
        self.stats.iter_mut().find(|s| s.question_id == question_id)
    }

    pub fn validate(&self) -> Result<()> {
        for stat in self.stats.iter() {
            if stat.correct_answers > stat.times_shown {
                return Err(QuizError::CorruptProfile {
                    profile: self.name.clone(),
                    question_id: stat.question_id,
                });
            }
        }
        Ok(())
    }
}


pub struct ProfileStore {
    dir: PathBuf,
    counter: IdCounter,
}


impl ProfileStore {
    pub fn new<P: AsRef<Path>>(dir: P, counter: IdCounter) -> Self {
        Self { dir: dir.as_ref().to_path_buf(), counter }
    }

    /// Load every profile, ordered by ID.
    pub fn load_all(&self) -> Result<Vec<Profile>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(QuizError::Io(e)),
        };

        let mut profiles = Vec::new();
        for entry in entries {
            let path = entry.map_err(QuizError::Io)?.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                warn!(path = %path.display(), "skipping non-profile file");
                continue;
            }
            let data = fs::read_to_string(&path).map_err(QuizError::Io)?;
            let profile: Profile = serde_json::from_str(&data).map_err(QuizError::Json)?;
            profile.validate()?;
            profiles.push(profile);
        }

        profiles.sort_by_key(|p| p.id);
        debug!(dir = %self.dir.display(), count = profiles.len(), "loaded profiles");
        Ok(profiles)
    }

    /// Load the first profile named `name`.
    pub fn load(&self, name: &str) -> Result<Profile> {
        self.load_all()?
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| QuizError::ProfileNotFound(name.to_string()))
    }

    pub fn get(&self, id: u64) -> Result<Profile> {
        let path = self.path_for(id);
        match fs::read_to_string(&path) {
            Ok(data) => {
                let profile: Profile = serde_json::from_str(&data).map_err(QuizError::Json)?;
                profile.validate()?;
                Ok(profile)
            },
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => {
                Err(QuizError::ProfileNotFound(format!("#{}", id)))
            },
            Err(e) => Err(QuizError::Io(e)),
        }
    }

    /// Create and save a new profile with fresh statistics for every question in the
    /// bank.
    pub fn create(&self, name: &str, questions: &QuestionStore) -> Result<Profile> {
        let stats = questions
            .load_all()?
            .iter()
            .map(|q| QuestionStat::new(q.id))
            .collect();
        let profile = Profile { id: self.counter.next_id()?, name: name.to_string(), stats };
        self.save(&profile)?;
        info!(id = profile.id, name = %profile.name, "created profile");
        Ok(profile)
    }

    pub fn load_or_create(&self, name: &str, questions: &QuestionStore) -> Result<Profile> {
        match self.load(name) {
            Err(QuizError::ProfileNotFound(_)) => self.create(name, questions),
            result => result,
        }
    }

    pub fn save(&self, profile: &Profile) -> Result<()> {
        let path = self.path_for(profile.id);
        let serialized = serde_json::to_string_pretty(profile).map_err(QuizError::Json)?;
        fs::write(&path, serialized).or(Err(QuizError::CannotWriteToFile(path.clone())))?;
        debug!(path = %path.display(), "saved profile");
        Ok(())
    }

    pub fn stat_for<'a>(&self, profile: &'a Profile, question_id: u64) -> Result<&'a QuestionStat> {
        profile.stat(question_id).ok_or(QuizError::MissingStat(question_id))
    }

    /// Give every existing profile a fresh statistics entry for each new question.
    pub fn sync_new_questions(&self, new_questions: &[Question]) -> Result<()> {
        if new_questions.is_empty() {
            return Ok(());
        }

        for mut profile in self.load_all()? {
            for q in new_questions.iter() {
                if profile.stat(q.id).is_none() {
                    profile.stats.push(QuestionStat::new(q.id));
                }
            }
            self.save(&profile)?;
        }
        Ok(())
    }

    fn path_for(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}
