use std::ops::RangeInclusive;
use thiserror::Error;

use crate::model::{Difficulty, Mode};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("time window must start at one second or more")]
    ZeroMinimum,

    #[error("min_secs ({min}) exceeds max_secs ({max})")]
    InvertedWindow { min: u32, max: u32 },

    #[error("points per correct answer must be positive")]
    ZeroPoints,
}

/// Pacing and scoring for one difficulty: a countdown window in whole
/// seconds and the points awarded per correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    min_secs: u32,
    max_secs: u32,
    points: u32,
}

impl DifficultyProfile {
    /// # Errors
    ///
    /// Returns `ProfileError` if the window is empty, starts at zero, or
    /// `points` is zero.
    pub fn new(min_secs: u32, max_secs: u32, points: u32) -> Result<Self, ProfileError> {
        if min_secs == 0 {
            return Err(ProfileError::ZeroMinimum);
        }
        if min_secs > max_secs {
            return Err(ProfileError::InvertedWindow {
                min: min_secs,
                max: max_secs,
            });
        }
        if points == 0 {
            return Err(ProfileError::ZeroPoints);
        }
        Ok(Self {
            min_secs,
            max_secs,
            points,
        })
    }

    const fn standard(min_secs: u32, max_secs: u32, points: u32) -> Self {
        Self {
            min_secs,
            max_secs,
            points,
        }
    }

    #[must_use]
    pub fn min_secs(&self) -> u32 {
        self.min_secs
    }

    #[must_use]
    pub fn max_secs(&self) -> u32 {
        self.max_secs
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn window(&self) -> RangeInclusive<u32> {
        self.min_secs..=self.max_secs
    }

    /// Best achievable score for `total_questions` answered correctly.
    #[must_use]
    pub fn max_score(&self, total_questions: u32) -> u32 {
        total_questions.saturating_mul(self.points)
    }
}

/// Profiles for every mode, including the mixed profile spanning easy..hard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTable {
    easy: DifficultyProfile,
    medium: DifficultyProfile,
    hard: DifficultyProfile,
    mixed: DifficultyProfile,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile::standard(45, 60, 1),
            medium: DifficultyProfile::standard(30, 45, 2),
            hard: DifficultyProfile::standard(20, 30, 3),
            mixed: DifficultyProfile::standard(20, 60, 2),
        }
    }
}

impl ProfileTable {
    #[must_use]
    pub fn new(
        easy: DifficultyProfile,
        medium: DifficultyProfile,
        hard: DifficultyProfile,
        mixed: DifficultyProfile,
    ) -> Self {
        Self {
            easy,
            medium,
            hard,
            mixed,
        }
    }

    #[must_use]
    pub fn for_mode(&self, mode: Mode) -> DifficultyProfile {
        match mode {
            Mode::Easy => self.easy,
            Mode::Medium => self.medium,
            Mode::Hard => self.hard,
            Mode::Mixed => self.mixed,
        }
    }

    #[must_use]
    pub fn for_difficulty(&self, difficulty: Difficulty) -> DifficultyProfile {
        self.for_mode(Mode::from(difficulty))
    }

    /// Profile whose window times a question shown in `mode`.
    ///
    /// Mixed sessions pace each question by its own difficulty; scoring still
    /// uses [`ProfileTable::for_mode`].
    #[must_use]
    pub fn timing_for(&self, mode: Mode, question: Difficulty) -> DifficultyProfile {
        if mode.is_mixed() {
            self.for_difficulty(question)
        } else {
            self.for_mode(mode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_game_constants() {
        let table = ProfileTable::default();
        assert_eq!(table.for_mode(Mode::Easy).window(), 45..=60);
        assert_eq!(table.for_mode(Mode::Medium).points(), 2);
        assert_eq!(table.for_mode(Mode::Hard).window(), 20..=30);
        assert_eq!(table.for_mode(Mode::Mixed).window(), 20..=60);
        assert_eq!(table.for_mode(Mode::Mixed).points(), 2);
    }

    #[test]
    fn mixed_timing_follows_question_difficulty() {
        let table = ProfileTable::default();
        assert_eq!(
            table.timing_for(Mode::Mixed, Difficulty::Hard),
            table.for_mode(Mode::Hard)
        );
        assert_eq!(
            table.timing_for(Mode::Easy, Difficulty::Hard),
            table.for_mode(Mode::Easy)
        );
    }

    #[test]
    fn rejects_invalid_profiles() {
        assert_eq!(
            DifficultyProfile::new(0, 10, 1).unwrap_err(),
            ProfileError::ZeroMinimum
        );
        assert_eq!(
            DifficultyProfile::new(10, 5, 1).unwrap_err(),
            ProfileError::InvertedWindow { min: 10, max: 5 }
        );
        assert_eq!(
            DifficultyProfile::new(1, 5, 0).unwrap_err(),
            ProfileError::ZeroPoints
        );
    }

    #[test]
    fn max_score_scales_with_points() {
        let profile = DifficultyProfile::new(5, 5, 3).unwrap();
        assert_eq!(profile.max_score(4), 12);
    }
}
