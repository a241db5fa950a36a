/**
 * Question records and answer checking.
 */
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::common::{QuizError, Result};


/// Represents a question in the bank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u64,
    #[serde(rename = "question_text")]
    pub prompt: String,
    /// Inactive questions are never selected for practice or tests.
    #[serde(rename = "status")]
    pub active: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}


#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum QuestionKind {
    #[serde(rename = "quiz")]
    MultipleChoice {
        options: Vec<String>,
        /// Zero-based index into `options`.
        #[serde(rename = "answer_index")]
        correct_index: usize,
    },
    #[serde(rename = "freeform")]
    FreeForm {
        #[serde(rename = "answer")]
        correct_answer: String,
    },
}


/// A user's response to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Zero-based index of the chosen option.
    Choice(usize),
    Text(&'a str),
}


impl Question {
    /// Construct a new active question, checking that the payload is well-formed.
    pub fn new(id: u64, prompt: &str, kind: QuestionKind) -> Result<Self> {
        let q = Question { id, prompt: prompt.trim().to_string(), active: true, kind };
        q.validate()?;
        Ok(q)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(QuizError::InvalidQuestion(String::from("ID must be positive")));
        }

        if let QuestionKind::MultipleChoice { options, correct_index } = &self.kind {
            if options.len() < 2 {
                return Err(QuizError::InvalidQuestion(format!(
                    "question {} has fewer than two options", self.id)));
            }
            if *correct_index >= options.len() {
                return Err(QuizError::InvalidQuestion(format!(
                    "answer index {} is out of range for question {} with {} options",
                    correct_index, self.id, options.len())));
            }
        }
        Ok(())
    }

    pub fn check_answer(&self, candidate: Candidate) -> bool {
        match (&self.kind, candidate) {
            (QuestionKind::MultipleChoice { correct_index, .. }, Candidate::Choice(i)) => {
                *correct_index == i
            },
            (QuestionKind::FreeForm { correct_answer }, Candidate::Text(guess)) => {
                normalize(correct_answer) == normalize(guess)
            },
            _ => false,
        }
    }

    /// The correct answer as it should be displayed to the user.
    pub fn answer_text(&self) -> &str {
        match &self.kind {
            QuestionKind::MultipleChoice { options, correct_index } => {
                &options[*correct_index]
            },
            QuestionKind::FreeForm { correct_answer } => correct_answer,
        }
    }
}


/// Collapse runs of whitespace, lower-case, and apply Unicode NFC normalization.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .nfc()
        .collect::<String>()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checking_free_form_answers_works() {
        let q = freeform(1, "Who wrote Hamlet?", "William Shakespeare");

        assert!(q.check_answer(Candidate::Text("William Shakespeare")));
        assert!(q.check_answer(Candidate::Text("william shakespeare")));
        assert!(q.check_answer(Candidate::Text("  William    Shakespeare ")));
        assert!(!q.check_answer(Candidate::Text("Shakespeare")));
        assert!(!q.check_answer(Candidate::Choice(0)));
    }

    #[test]
    fn free_form_answers_are_unicode_normalized() {
        // Precomposed and decomposed forms of "é".
        let q = freeform(1, "Capital of Cameroon?", "Yaound\u{00e9}");
        assert!(q.check_answer(Candidate::Text("Yaounde\u{0301}")));
    }

    #[test]
    fn checking_multiple_choice_answers_works() {
        let q = quiz(1, "2 + 2?", &["3", "4", "5"], 1);

        assert!(q.check_answer(Candidate::Choice(1)));
        assert!(!q.check_answer(Candidate::Choice(0)));
        assert!(!q.check_answer(Candidate::Text("4")));
        assert_eq!(q.answer_text(), "4");
    }

    #[test]
    fn answer_index_out_of_range_is_rejected() {
        let kind = QuestionKind::MultipleChoice {
            options: vec![s("a"), s("b")], correct_index: 2,
        };
        assert!(matches!(Question::new(1, "?", kind), Err(QuizError::InvalidQuestion(_))));
    }

    #[test]
    fn single_option_is_rejected() {
        let kind = QuestionKind::MultipleChoice { options: vec![s("a")], correct_index: 0 };
        assert!(matches!(Question::new(1, "?", kind), Err(QuizError::InvalidQuestion(_))));
    }

    #[test]
    fn serialized_form_matches_stored_layout() {
        let q = quiz(7, "Pick one", &["x", "y"], 0);
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["type"], "quiz");
        assert_eq!(value["id"], 7);
        assert_eq!(value["question_text"], "Pick one");
        assert_eq!(value["status"], true);
        assert_eq!(value["answer_index"], 0);
        assert_eq!(value["options"][1], "y");

        let f = freeform(8, "Say hi", "hi");
        let value = serde_json::to_value(&f).unwrap();
        assert_eq!(value["type"], "freeform");
        assert_eq!(value["answer"], "hi");
    }

    #[test]
    fn round_trips_through_json() {
        let mut q = quiz(3, "Largest planet?", &["Mars", "Jupiter"], 1);
        q.active = false;
        let text = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&text).unwrap();
        assert_eq!(q, back);

        let f = freeform(4, "Capital of Mongolia?", "Ulan Bator");
        let back: Question = serde_json::from_str(&serde_json::to_string(&f).unwrap()).unwrap();
        assert_eq!(f, back);
    }

    #[test]
    fn can_read_hand_written_record() {
        let data = r#"{
            "type": "freeform",
            "id": 2,
            "question_text": "What is the capital of Tanzania?",
            "status": true,
            "answer": "Dodoma"
        }"#;
        let q: Question = serde_json::from_str(data).unwrap();
        assert_eq!(q.id, 2);
        assert!(q.check_answer(Candidate::Text("dodoma")));
    }

    fn quiz(id: u64, text: &str, options: &[&str], correct_index: usize) -> Question {
        let kind = QuestionKind::MultipleChoice {
            options: options.iter().map(|o| s(o)).collect(),
            correct_index,
        };
        Question::new(id, text, kind).unwrap()
    }

    fn freeform(id: u64, text: &str, answer: &str) -> Question {
        Question::new(id, text, QuestionKind::FreeForm { correct_answer: s(answer) }).unwrap()
    }

    fn s(mystr: &str) -> String {
        String::from(mystr)
    }
}
