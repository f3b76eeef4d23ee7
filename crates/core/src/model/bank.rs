use thiserror::Error;

use crate::model::{Difficulty, Question, QuestionDraft, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("invalid question bank json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("question {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Immutable set of questions loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Validate every draft, failing on the first invalid record.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Question` with the zero-based index of the bad record.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = QuestionDraft>,
    ) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| BankError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { questions })
    }

    /// Parse a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Json` for malformed input and `BankError::Question`
    /// for records that fail validation.
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
        Self::from_drafts(drafts)
    }

    /// The ten questions bundled with the game.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            questions: builtin_drafts()
                .into_iter()
                .filter_map(|draft| draft.validate().ok())
                .collect(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn with_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.difficulty() == difficulty)
    }

    #[must_use]
    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.with_difficulty(difficulty).count()
    }
}

fn builtin_drafts() -> Vec<QuestionDraft> {
    use Difficulty::{Easy, Hard, Medium};

    vec![
        QuestionDraft::new("Compute: |−7| + |3|", ["10", "4", "7", "3"], "10")
            .with_explanation("|−7| = 7 and |3| = 3, so 7 + 3 = 10.")
            .with_difficulty(Easy),
        QuestionDraft::new("Solve: x/4 = 3 → x = ...", ["12", "7", "1/12", "9"], "12")
            .with_explanation("x/4 = 3 → x = 3 × 4 = 12.")
            .with_difficulty(Easy),
        QuestionDraft::new("If 2(x + 3) = 14, then x is ...", ["4", "5", "2", "3"], "4")
            .with_explanation("2(x+3) = 14 → x+3 = 7 → x = 4.")
            .with_difficulty(Easy),
        QuestionDraft::new(
            "Compute: (2/3) + (1/6) = ...",
            ["5/6", "1/2", "3/4", "4/5"],
            "5/6",
        )
        .with_explanation("Use a common denominator: 2/3 = 4/6, so 4/6 + 1/6 = 5/6.")
        .with_difficulty(Medium),
        QuestionDraft::new("If 3x - 5 = 16, then x = ...", ["7", "8", "3", "5"], "7")
            .with_explanation("3x - 5 = 16 → 3x = 21 → x = 7.")
            .with_difficulty(Medium),
        QuestionDraft::new("The ratio 4 : x = 6 : 9, so x = ...", ["6", "8/3", "3/2", "6/1"], "6")
            .with_explanation("4/x = 6/9 → 4/x = 2/3 → x = 4 × 3/2 = 6.")
            .with_difficulty(Medium),
        QuestionDraft::new("Compute: 5 + 3 × 2 - 4 ÷ 2", ["10", "9", "8", "7"], "9")
            .with_explanation(
                "Multiply and divide first: 3×2 = 6, 4÷2 = 2 → 5 + 6 - 2 = 9.",
            )
            .with_difficulty(Hard),
        QuestionDraft::new("If 5 - 2x = 1, then x = ...", ["2", "1", "-2", "3"], "2")
            .with_explanation("5 - 2x = 1 → -2x = -4 → x = 2.")
            .with_difficulty(Hard),
        QuestionDraft::new(
            "A picture has height:width = 3:4. If the width is 32 cm, the height is ...",
            ["24 cm", "36 cm", "18 cm", "28 cm"],
            "24 cm",
        )
        .with_explanation("Scale = 32/4 = 8 → height = 3 × 8 = 24 cm.")
        .with_difficulty(Hard),
        QuestionDraft::new(
            "If a:b = 5:2 and a = 25, then b = ...",
            ["10", "5", "12.5", "15"],
            "10",
        )
        .with_explanation("Scale = 25/5 = 5 → b = 2 × 5 = 10.")
        .with_difficulty(Hard),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_is_fully_valid() {
        let drafts = builtin_drafts();
        let total = drafts.len();
        QuestionBank::from_drafts(drafts).expect("builtin drafts validate");

        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), total);
        assert_eq!(bank.count(Difficulty::Easy), 3);
        assert_eq!(bank.count(Difficulty::Medium), 3);
        assert_eq!(bank.count(Difficulty::Hard), 4);
    }

    #[test]
    fn json_bank_defaults_missing_difficulty() {
        let raw = r#"[
            {"question": "1 + 1", "choices": ["2", "3", "4", "5"], "answer": "2"},
            {"question": "2 × 3", "choices": ["5", "6", "7", "8"], "answer": "6",
             "explanation": "2 × 3 = 6", "difficulty": "easy"}
        ]"#;
        let bank = QuestionBank::from_json(raw).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[0].difficulty(), Difficulty::Medium);
        assert_eq!(bank.questions()[1].difficulty(), Difficulty::Easy);
        assert_eq!(bank.questions()[1].explanation(), "2 × 3 = 6");
    }

    #[test]
    fn json_bank_reports_bad_record_index() {
        let raw = r#"[
            {"question": "ok", "choices": ["a", "b", "c", "d"], "answer": "a"},
            {"question": "bad", "choices": ["a", "b", "c", "d"], "answer": "z"}
        ]"#;
        let err = QuestionBank::from_json(raw).unwrap_err();
        assert!(matches!(err, BankError::Question { index: 1, .. }));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = QuestionBank::from_json("{not json").unwrap_err();
        assert!(matches!(err, BankError::Json(_)));
    }
}
