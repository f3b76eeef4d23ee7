use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Mode, Question, QuestionBank};

/// Ordered question list for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub questions: Vec<Question>,
    /// The chosen difficulty had no questions, so the whole bank was used.
    pub fell_back: bool,
}

impl SessionPlan {
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Picks and orders the questions for a mode.
pub struct PlanBuilder<'a> {
    bank: &'a QuestionBank,
}

impl<'a> PlanBuilder<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Build a shuffled plan.
    ///
    /// - `Mixed` takes the whole bank.
    /// - A single difficulty takes only its questions, or the whole bank when
    ///   it has none.
    pub fn build<R: Rng + ?Sized>(self, mode: Mode, rng: &mut R) -> SessionPlan {
        let (mut questions, fell_back) = match mode.difficulty() {
            None => (self.bank.questions().to_vec(), false),
            Some(difficulty) => {
                let filtered: Vec<Question> =
                    self.bank.with_difficulty(difficulty).cloned().collect();
                if filtered.is_empty() {
                    (self.bank.questions().to_vec(), true)
                } else {
                    (filtered, false)
                }
            }
        };

        questions.shuffle(rng);
        SessionPlan {
            questions,
            fell_back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Difficulty, QuestionDraft};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(text: &str, difficulty: Difficulty) -> Question {
        QuestionDraft::new(text, ["1", "2", "3", "4"], "1")
            .with_difficulty(difficulty)
            .validate()
            .unwrap()
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            question("e1", Difficulty::Easy),
            question("e2", Difficulty::Easy),
            question("m1", Difficulty::Medium),
            question("h1", Difficulty::Hard),
        ])
    }

    #[test]
    fn single_difficulty_keeps_only_matching_questions() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(3);
        let plan = PlanBuilder::new(&bank).build(Mode::Easy, &mut rng);

        assert!(!plan.fell_back);
        assert_eq!(plan.total(), 2);
        assert!(
            plan.questions
                .iter()
                .all(|q| q.difficulty() == Difficulty::Easy)
        );
    }

    #[test]
    fn mixed_uses_every_question_once() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(11);
        let plan = PlanBuilder::new(&bank).build(Mode::Mixed, &mut rng);

        let mut texts: Vec<&str> = plan.questions.iter().map(Question::text).collect();
        texts.sort_unstable();
        assert_eq!(texts, vec!["e1", "e2", "h1", "m1"]);
    }

    #[test]
    fn missing_difficulty_falls_back_to_whole_bank() {
        let bank = QuestionBank::new(vec![question("e1", Difficulty::Easy)]);
        let mut rng = StdRng::seed_from_u64(5);
        let plan = PlanBuilder::new(&bank).build(Mode::Hard, &mut rng);

        assert!(plan.fell_back);
        assert_eq!(plan.total(), 1);
    }

    #[test]
    fn empty_bank_builds_empty_plan() {
        let bank = QuestionBank::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(PlanBuilder::new(&bank).build(Mode::Medium, &mut rng).is_empty());
    }
}
