use chrono::{DateTime, Utc};

use quiz_core::model::{DifficultyProfile, HighScore, Mode};
use quiz_core::scoring::{FeedbackTier, percentage};

/// Outcome of a finished game, after records were updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub mode: Mode,
    pub score: u32,
    pub total_questions: u32,
    pub correct: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub tier: FeedbackTier,
    /// Best score for the mode, including this game.
    pub high_score: HighScore,
    pub improved_high_score: bool,
    /// Whether the score earns a leaderboard place.
    pub qualifies: bool,
    pub completed_at: DateTime<Utc>,
}

impl GameSummary {
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

/// Percentage and tier for a score, measured against the mode's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScoreReport {
    pub max_score: u32,
    pub percentage: u32,
    pub tier: FeedbackTier,
}

impl ScoreReport {
    pub(crate) fn new(score: u32, total_questions: u32, profile: DifficultyProfile) -> Self {
        let max_score = profile.max_score(total_questions);
        let percentage = percentage(score, max_score);
        Self {
            max_score,
            percentage,
            tier: FeedbackTier::from_percentage(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::ProfileTable;

    #[test]
    fn perfect_easy_game_is_excellent() {
        let profile = ProfileTable::default().for_mode(Mode::Easy);
        let report = ScoreReport::new(3, 3, profile);
        assert_eq!(report.max_score, 3);
        assert_eq!(report.percentage, 100);
        assert_eq!(report.tier, FeedbackTier::Excellent);
    }

    #[test]
    fn partial_hard_game_rounds_percentage() {
        let profile = ProfileTable::default().for_mode(Mode::Hard);
        // 2 of 3 correct: 6 of 9 points.
        let report = ScoreReport::new(6, 3, profile);
        assert_eq!(report.percentage, 67);
        assert_eq!(report.tier, FeedbackTier::Progress);
    }

    #[test]
    fn zero_score_is_lowest_tier() {
        let profile = ProfileTable::default().for_mode(Mode::Mixed);
        let report = ScoreReport::new(0, 10, profile);
        assert_eq!(report.percentage, 0);
        assert_eq!(report.tier, FeedbackTier::KeepTrying);
    }
}
