//! End-of-game percentage and feedback tiers.

/// Share of `max_score` reached, rounded half-up to a whole percent.
///
/// A zero `max_score` is treated as one so an empty game reports 0 %.
#[must_use]
pub fn percentage(score: u32, max_score: u32) -> u32 {
    let max = u64::from(max_score.max(1));
    let scaled = (u64::from(score) * 200 + max) / (2 * max);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Motivational band for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackTier {
    Excellent,
    Great,
    Progress,
    KeepTrying,
}

impl FeedbackTier {
    #[must_use]
    pub fn from_percentage(percent: u32) -> Self {
        match percent {
            90.. => FeedbackTier::Excellent,
            70..=89 => FeedbackTier::Great,
            45..=69 => FeedbackTier::Progress,
            _ => FeedbackTier::KeepTrying,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Outstanding! Keep that learning spirit going!",
            FeedbackTier::Great => "Great work! Try again for 100%!",
            FeedbackTier::Progress => {
                "Good, you're making progress. Play again to build your confidence!"
            }
            FeedbackTier::KeepTrying => {
                "Don't give up! Study each question's explanation and you will improve."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(0, 9), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
    }

    #[test]
    fn zero_max_does_not_divide_by_zero() {
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(FeedbackTier::from_percentage(100), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::from_percentage(90), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::from_percentage(89), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_percentage(70), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_percentage(69), FeedbackTier::Progress);
        assert_eq!(FeedbackTier::from_percentage(45), FeedbackTier::Progress);
        assert_eq!(FeedbackTier::from_percentage(44), FeedbackTier::KeepTrying);
        assert_eq!(FeedbackTier::from_percentage(0), FeedbackTier::KeepTrying);
    }
}
