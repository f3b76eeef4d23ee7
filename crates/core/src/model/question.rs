use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::Difficulty;

/// Every question offers exactly this many choices.
pub const CHOICE_COUNT: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("expected {expected} choices, got {actual}")]
    ChoiceCount { expected: usize, actual: usize },

    #[error("choice {index} is empty")]
    EmptyChoice { index: usize },

    #[error("duplicate choice: {0:?}")]
    DuplicateChoice(String),

    #[error("answer {0:?} is not one of the choices")]
    AnswerNotAChoice(String),
}

/// Unvalidated question record, as written in a bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            answer: answer.into(),
            explanation: String::new(),
            difficulty: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Check the record and turn it into an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is blank, the choice list is not
    /// exactly [`CHOICE_COUNT`] unique non-blank strings, or the answer is not
    /// one of the choices.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.question.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let actual = self.choices.len();
        let choices: [String; CHOICE_COUNT] =
            self.choices
                .try_into()
                .map_err(|_| QuestionError::ChoiceCount {
                    expected: CHOICE_COUNT,
                    actual,
                })?;

        let mut seen = HashSet::with_capacity(CHOICE_COUNT);
        for (index, choice) in choices.iter().enumerate() {
            if choice.trim().is_empty() {
                return Err(QuestionError::EmptyChoice { index });
            }
            if !seen.insert(choice.as_str()) {
                return Err(QuestionError::DuplicateChoice(choice.clone()));
            }
        }

        if !seen.contains(self.answer.as_str()) {
            return Err(QuestionError::AnswerNotAChoice(self.answer));
        }

        Ok(Question {
            text: self.question,
            choices,
            answer: self.answer,
            explanation: self.explanation,
            difficulty: self.difficulty.unwrap_or_default(),
        })
    }
}

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    choices: [String; CHOICE_COUNT],
    answer: String,
    explanation: String,
    difficulty: Difficulty,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices in bank order. Presentation order is shuffled per showing.
    #[must_use]
    pub fn choices(&self) -> &[String; CHOICE_COUNT] {
        &self.choices
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Exact string comparison against the recorded answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft::new("x/4 = 3, x = ?", ["12", "7", "1/12", "9"], "12")
            .with_explanation("x = 3 × 4 = 12.")
            .with_difficulty(Difficulty::Easy)
    }

    #[test]
    fn valid_draft_builds_question() {
        let question = draft().validate().unwrap();
        assert_eq!(question.text(), "x/4 = 3, x = ?");
        assert_eq!(question.difficulty(), Difficulty::Easy);
        assert!(question.is_correct("12"));
        assert!(!question.is_correct("12 "));
    }

    #[test]
    fn missing_difficulty_defaults_to_medium() {
        let mut draft = draft();
        draft.difficulty = None;
        assert_eq!(draft.validate().unwrap().difficulty(), Difficulty::Medium);
    }

    #[test]
    fn rejects_wrong_choice_count() {
        let draft = QuestionDraft::new("Q", ["a", "b", "c"], "a");
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionError::ChoiceCount {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn rejects_duplicates_and_foreign_answer() {
        let dup = QuestionDraft::new("Q", ["a", "b", "a", "c"], "a");
        assert!(matches!(
            dup.validate(),
            Err(QuestionError::DuplicateChoice(_))
        ));

        let foreign = QuestionDraft::new("Q", ["a", "b", "c", "d"], "e");
        assert!(matches!(
            foreign.validate(),
            Err(QuestionError::AnswerNotAChoice(_))
        ));
    }

    #[test]
    fn rejects_blank_text_and_choices() {
        let blank = QuestionDraft::new("  ", ["a", "b", "c", "d"], "a");
        assert_eq!(blank.validate().unwrap_err(), QuestionError::EmptyText);

        let blank_choice = QuestionDraft::new("Q", ["a", " ", "c", "d"], "a");
        assert_eq!(
            blank_choice.validate().unwrap_err(),
            QuestionError::EmptyChoice { index: 1 }
        );
    }
}
