/**
 * The command-line user interface for practicing and taking tests.
 */
use colored::*;

use super::common::Result;
use super::iohelper::{prettyprint, prettyprint_colored, prompt, prompt_number};
use super::profiles::Profile;
use super::question::Question;
use super::session::{PracticeSummary, TestResult};


pub struct CmdUI {
    number: usize,
}


impl CmdUI {
    pub fn new() -> Self {
        Self { number: 0 }
    }

    pub fn next(&mut self) {
        self.number += 1;
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        my_print!("\n")?;
        let prefix = format!("  ({}) ", self.number);
        prettyprint_colored(&text, &prefix, None, Some(Color::Cyan))?;
        my_print!("\n")
    }

    pub fn choices(&mut self, choices: &[String]) -> Result<()> {
        for (i, choice) in choices.iter().enumerate() {
            let prefix = format!("     {}. ", i + 1);
            prettyprint(choice, &prefix)?;
        }
        my_print!("\n")
    }

    pub fn prompt(&mut self) -> Result<Option<String>> {
        prompt("Enter your answer: ")
    }

    /// Ask for the number of one of `count` choices and return its zero-based index.
    pub fn prompt_choice(&mut self, count: usize) -> Result<Option<usize>> {
        Ok(prompt_number("Enter your answer: ", 1, count)?.map(|n| n - 1))
    }

    pub fn incorrect(&mut self, correction: Option<&str>) -> Result<()> {
        if let Some(correction) = correction {
            let message = format!(
                "{} The correct answer was {}.",
                "Incorrect.".red(),
                correction.green(),
            );
            prettyprint(&message, "")
        } else {
            prettyprint(&format!("{}", "Incorrect.".red()), "")
        }
    }

    pub fn correct(&mut self) -> Result<()> {
        prettyprint(&format!("{}", "Correct!".green()), "")
    }

    pub fn status(&mut self, text: &str) -> Result<()> {
        my_println!("{}", text)
    }

    pub fn instructions(&mut self, text: &str) -> Result<()> {
        my_print!("\n")?;
        prettyprint_colored(&text, "  ", Some(Color::BrightBlue), None)?;
        my_print!("\n")
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        my_print!("\n")?;
        prettyprint_colored(&format!("Warning: {}", text), "  ", Some(Color::Red), None)?;
        my_print!("\n")
    }

    pub fn menu(&mut self, title: &str, items: &[&str]) -> Result<()> {
        my_println!("{}", title)?;
        for (i, item) in items.iter().enumerate() {
            my_println!("{}. {}", i + 1, item)?;
        }
        Ok(())
    }

    pub fn divider(&mut self) -> Result<()> {
        my_println!("{}", "-".repeat(80))
    }

    /// Show how often each question has been asked and answered correctly.
    pub fn statistics(&mut self, profile: &Profile, questions: &[Question]) -> Result<()> {
        my_println!("Question Statistics for {}:\n", profile.name.cyan())?;
        for question in questions.iter() {
            if let Some(stat) = profile.stat(question.id) {
                my_println!(
                    "ID: {} | Active: {} | Question: {}",
                    question.id, question.active, question.prompt,
                )?;
                my_println!(
                    "Times shown: {} | Correct answers: {} ({:.2}%)",
                    stat.times_shown, stat.correct_answers, stat.correct_percentage(),
                )?;
                self.divider()?;
            }
        }
        Ok(())
    }

    pub fn practice_summary(&mut self, summary: &PracticeSummary) -> Result<()> {
        if summary.total > 0 {
            my_print!("\n\n")?;
            my_print!("Answered ")?;
            my_print!("{}", format!("{}", summary.total).cyan())?;
            if summary.total == 1 {
                my_println!(" question")?;
            } else {
                my_println!(" questions")?;
            }
            my_print!("  {}", format!("{}", summary.total_correct).green())?;
            my_print!(" correct\n")?;
            my_print!("  {}", format!("{}", summary.total - summary.total_correct).red())?;
            my_print!(" incorrect\n")?;
        }
        Ok(())
    }

    pub fn test_results(&mut self, results: &TestResult) -> Result<()> {
        let score_as_str = format!("{:.2}%", results.score);

        my_print!("\n\n")?;
        my_print!("Your score: ")?;
        my_println!("{}", score_as_str.cyan())?;
        my_print!("  {}", format!("{}", results.total_correct).green())?;
        my_print!(" correct\n")?;
        my_print!("  {}", format!("{}", results.total - results.total_correct).red())?;
        my_print!(" incorrect\n")
    }
}
