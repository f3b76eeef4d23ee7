use serde::{Deserialize, Serialize};

/// Best score for a mode. Never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScore(u32);

impl HighScore {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Whether any game has been recorded above zero.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0 > 0
    }

    /// Raise the high score when `score` is strictly greater.
    ///
    /// Returns `true` if the value changed.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_only_moves_up() {
        let mut best = HighScore::default();
        assert!(!best.is_set());
        assert!(best.record(3));
        assert!(!best.record(3));
        assert!(!best.record(1));
        assert!(best.record(5));
        assert_eq!(best.value(), 5);
    }
}
