use std::time::Duration;

use quiz_core::model::Difficulty;
use quiz_core::sound::SoundCue;

/// Pause after an explicit answer before the next question.
pub const ANSWER_FEEDBACK_DELAY: Duration = Duration::from_millis(2100);
/// Pause after a timeout before the next question.
pub const TIMEOUT_FEEDBACK_DELAY: Duration = Duration::from_millis(2400);
/// Shown when a question carries no explanation.
pub const MISSING_EXPLANATION: &str = "No explanation available.";

/// Where a session stands in its per-question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Between questions; the next call presents one.
    Idle,
    /// A question is shown and its countdown is running.
    Accepting,
    /// The current question was answered or timed out.
    Resolved,
    Finished,
}

/// A question as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    pub epoch: u64,
    /// 1-based position.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub difficulty: Difficulty,
    /// Shuffled for this showing.
    pub choices: Vec<String>,
    pub time_remaining: u32,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Wrong,
    Timeout,
}

impl FeedbackKind {
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            FeedbackKind::Correct => "Correct answer, well done!",
            FeedbackKind::Wrong => "Wrong answer.",
            FeedbackKind::Timeout => "Time's up.",
        }
    }

    /// Short banner text flashed over the question.
    #[must_use]
    pub const fn toast(self) -> &'static str {
        match self {
            FeedbackKind::Correct => "CORRECT",
            FeedbackKind::Wrong => "WRONG",
            FeedbackKind::Timeout => "TIME'S UP",
        }
    }

    #[must_use]
    pub const fn cue(self) -> SoundCue {
        match self {
            FeedbackKind::Correct => SoundCue::Success,
            FeedbackKind::Wrong => SoundCue::Wrong,
            FeedbackKind::Timeout => SoundCue::TimeUp,
        }
    }

    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            FeedbackKind::Correct | FeedbackKind::Wrong => ANSWER_FEEDBACK_DELAY,
            FeedbackKind::Timeout => TIMEOUT_FEEDBACK_DELAY,
        }
    }
}

/// Outcome of the first answer or timeout for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub epoch: u64,
    pub kind: FeedbackKind,
    pub chosen: Option<String>,
    pub correct_choice: String,
    pub headline: &'static str,
    pub explanation: String,
    pub points_awarded: u32,
    /// Score after this question.
    pub score: u32,
    /// How long to show the feedback before presenting the next question.
    pub delay: Duration,
}

/// Result of a countdown tick for the current epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Remaining(u32),
    Expired(Resolution),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_wait_longer_than_answers() {
        assert!(FeedbackKind::Timeout.delay() > FeedbackKind::Wrong.delay());
        assert_eq!(FeedbackKind::Correct.delay(), Duration::from_millis(2100));
        assert_eq!(FeedbackKind::Timeout.delay(), Duration::from_millis(2400));
    }

    #[test]
    fn each_kind_maps_to_its_cue() {
        assert_eq!(FeedbackKind::Correct.cue(), SoundCue::Success);
        assert_eq!(FeedbackKind::Wrong.cue(), SoundCue::Wrong);
        assert_eq!(FeedbackKind::Timeout.cue(), SoundCue::TimeUp);
    }
}
