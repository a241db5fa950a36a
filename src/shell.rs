/**
 * The interactive menu, plus the dialogues for adding and toggling questions that are
 * shared with the command-line subcommands.
 */
use std::path::PathBuf;

use rand::thread_rng;
use tracing::debug;

use super::common::{QuizError, Result};
use super::config::Config;
use super::iohelper::{confirm, pause, prompt, prompt_number};
use super::profiles::{Profile, ProfileStore};
use super::question::{Question, QuestionKind};
use super::questions::QuestionStore;
use super::session;
use super::ui::CmdUI;


const MAIN_MENU: [&str; 7] = [
    "Add questions",
    "View statistics",
    "Enable/disable questions",
    "Practice mode",
    "Test mode",
    "Change profile",
    "Exit",
];

const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 5;


pub struct Shell {
    questions: QuestionStore,
    profiles: ProfileStore,
    results_path: PathBuf,
    ui: CmdUI,
}


impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            questions: QuestionStore::new(config.questions_path(), config.question_counter()),
            profiles: ProfileStore::new(config.profiles_dir(), config.profile_counter()),
            results_path: config.results_path(),
            ui: CmdUI::new(),
        }
    }

    /// Run the main menu until the user exits.
    pub fn run(&mut self) -> Result<()> {
        let mut profile = match self.select_or_create_profile()? {
            Some(profile) => profile,
            None => return Ok(()),
        };

        loop {
            my_print!("\n")?;
            self.ui.menu("Please choose an option:", &MAIN_MENU)?;
            let choice = match prompt_number("Enter the number of your choice: ", 1, 7)? {
                Some(choice) => choice,
                None => 7,
            };
            debug!(choice, "main menu");

            match choice {
                1 => {
                    self.add_questions()?;
                    // The profile on disk now has statistics for the new questions.
                    profile = self.profiles.get(profile.id)?;
                },
                2 => {
                    self.statistics(&profile)?;
                    my_println!("\nPress Enter to continue...")?;
                    pause()?;
                },
                3 => self.toggle_questions()?,
                4 => self.practice(&mut profile)?,
                5 => self.test(None)?,
                6 => {
                    if let Some(other) = self.select_or_create_profile()? {
                        profile = other;
                    }
                },
                _ => {
                    my_println!("Goodbye!")?;
                    return Ok(());
                },
            }
        }
    }

    fn select_or_create_profile(&mut self) -> Result<Option<Profile>> {
        let mut profiles = self.profiles.load_all()?;

        let mut items: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        items.push("Create new profile");
        self.ui.menu("Select an existing profile or create a new one:", &items)?;

        let choice = match prompt_number("Enter the number of your choice: ", 1, items.len())? {
            Some(choice) => choice,
            None => return Ok(None),
        };

        if choice == profiles.len() + 1 {
            match prompt("Enter the name for the new profile: ")? {
                Some(name) => Ok(Some(self.profiles.create(&name, &self.questions)?)),
                None => Ok(None),
            }
        } else {
            let profile = profiles.swap_remove(choice - 1);
            self.ui.status(&format!("Using profile {}.", profile.name))?;
            Ok(Some(profile))
        }
    }

    /// Read new questions from the user until they quit, then save them and add them to
    /// every profile.
    pub fn add_questions(&mut self) -> Result<Vec<Question>> {
        self.ui.instructions("Add questions (press Ctrl+D to quit the mode).")?;

        let mut new_questions = Vec::new();
        loop {
            match self.read_question() {
                Ok(Some(question)) => new_questions.push(question),
                Ok(None) | Err(QuizError::ReadlineInterrupted) => break,
                Err(e) => return Err(e),
            }
        }

        self.questions.append(&new_questions)?;
        self.profiles.sync_new_questions(&new_questions)?;
        if new_questions.len() == 1 {
            self.ui.status("\nAdded 1 question.")?;
        } else {
            self.ui.status(&format!("\nAdded {} questions.", new_questions.len()))?;
        }
        Ok(new_questions)
    }

    fn read_question(&mut self) -> Result<Option<Question>> {
        my_print!("\n")?;
        self.ui.menu("Select question type:", &["Quiz", "Freeform", "Quit"])?;
        let choice = match prompt_number("Enter the number of your choice: ", 1, 3)? {
            Some(choice) if choice != 3 => choice,
            _ => return Ok(None),
        };

        let text = match prompt("Enter the question text: ")? {
            Some(text) => text,
            None => return Ok(None),
        };

        let kind = if choice == 1 {
            let message = format!(
                "Enter the number of options ({}-{}): ", MIN_OPTIONS, MAX_OPTIONS);
            let num_options = match prompt_number(&message, MIN_OPTIONS, MAX_OPTIONS)? {
                Some(n) => n,
                None => return Ok(None),
            };

            let mut options = Vec::with_capacity(num_options);
            for i in 1..=num_options {
                match prompt(&format!("Option {}: ", i))? {
                    Some(option) => options.push(option),
                    None => return Ok(None),
                }
            }

            let message = format!("Enter the correct answer index (1-{}): ", num_options);
            let correct_index = match prompt_number(&message, 1, num_options)? {
                Some(n) => n - 1,
                None => return Ok(None),
            };
            QuestionKind::MultipleChoice { options, correct_index }
        } else {
            match prompt("Enter the correct answer: ")? {
                Some(answer) => QuestionKind::FreeForm { correct_answer: answer },
                None => return Ok(None),
            }
        };

        self.questions.create(&text, kind).map(Some)
    }

    pub fn statistics(&mut self, profile: &Profile) -> Result<()> {
        let questions = self.questions.load_all()?;
        my_print!("\n")?;
        self.ui.statistics(profile, &questions)
    }

    /// Ask the user which questions to enable or disable, then toggle them.
    pub fn toggle_questions(&mut self) -> Result<()> {
        let last_id = self.questions.last_id()?;
        if last_id == 0 {
            return self.ui.warning("There are no questions yet.");
        }

        self.ui.instructions("Enable/disable questions (press Ctrl+D to quit the mode).")?;
        let mut ids = Vec::new();
        loop {
            let message = "Enter the ID of the question you want to enable/disable: ";
            let id = match prompt_number(message, 1, last_id as usize) {
                Ok(Some(id)) => id as u64,
                Ok(None) | Err(QuizError::ReadlineInterrupted) => break,
                Err(e) => return Err(e),
            };

            let question = match self.questions.get(id) {
                Ok(question) => question,
                Err(QuizError::QuestionNotFound(_)) => {
                    self.ui.status(&format!("No question has ID {}.", id))?;
                    continue;
                },
                Err(e) => return Err(e),
            };

            my_println!(
                "ID: {} | Question Answer: {} | Question: {}",
                question.id, question.answer_text(), question.prompt,
            )?;
            self.ui.divider()?;

            let action = if question.active { "disable" } else { "enable" };
            match confirm(&format!("Do you want to {} this question? (y/n): ", action)) {
                Ok(true) => ids.push(id),
                Ok(false) => {},
                Err(QuizError::ReadlineInterrupted) => break,
                Err(e) => return Err(e),
            }
        }

        self.toggle(&ids)
    }

    /// Toggle the given questions and report their new status.
    pub fn toggle(&mut self, ids: &[u64]) -> Result<()> {
        for (id, active) in self.questions.toggle_status(ids)? {
            let status = if active { "enabled" } else { "disabled" };
            self.ui.status(&format!("Question ID {} is now {}.", id, status))?;
        }
        Ok(())
    }

    pub fn practice(&mut self, profile: &mut Profile) -> Result<()> {
        self.ui.instructions("Practice mode (press Ctrl+D to quit the mode).")?;
        let mut rng = thread_rng();
        match session::practice(&mut self.ui, &self.questions, &self.profiles, profile, &mut rng) {
            Ok(_) => Ok(()),
            Err(QuizError::EmptyPool) => self.ui.warning("No active questions available."),
            Err(e) => Err(e),
        }
    }

    /// Take a test of `num_to_ask` questions, asking the user how many if it is `None`.
    pub fn test(&mut self, num_to_ask: Option<usize>) -> Result<()> {
        let available = self.questions.load_active()?.len();
        if available == 0 {
            return self.ui.warning("No active questions available.");
        }

        self.ui.instructions("Test mode (press Ctrl+D to quit the mode).")?;
        let num_to_ask = match num_to_ask {
            Some(n) => n,
            None => {
                let message = "Enter the number of questions for the test: ";
                match prompt_number(message, 1, available) {
                    Ok(Some(n)) => n,
                    Ok(None) | Err(QuizError::ReadlineInterrupted) => return Ok(()),
                    Err(e) => return Err(e),
                }
            },
        };

        let mut rng = thread_rng();
        if let Some(result) = session::take_test(&mut self.ui, &self.questions, num_to_ask, &mut rng)? {
            session::save_result(&self.results_path, &result)?;
        }
        Ok(())
    }

    /// Load the profile named `name`, creating it if necessary.
    pub fn profile(&mut self, name: &str) -> Result<Profile> {
        self.profiles.load_or_create(name, &self.questions)
    }

    /// Load the profile named `name`, which must already exist.
    pub fn existing_profile(&mut self, name: &str) -> Result<Profile> {
        self.profiles.load(name)
    }

    pub fn list_profiles(&mut self) -> Result<()> {
        let profiles = self.profiles.load_all()?;
        if profiles.is_empty() {
            return my_println!("No profiles found.");
        }

        my_println!("Available profiles:")?;
        for profile in profiles.iter() {
            my_println!("  {} (ID {})", profile.name, profile.id)?;
        }
        Ok(())
    }
}
