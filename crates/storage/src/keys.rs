//! Storage key layout: one key per persisted entity.

use quiz_core::model::Mode;

pub const HISTORY_KEY: &str = "math-game-history";
pub const LEADERBOARD_KEY_PREFIX: &str = "math-game-leaderboard-";
pub const HIGHSCORE_KEY_PREFIX: &str = "math-game-highscore-";

#[must_use]
pub fn leaderboard_key(mode: Mode) -> String {
    format!("{LEADERBOARD_KEY_PREFIX}{mode}")
}

#[must_use]
pub fn highscore_key(mode: Mode) -> String {
    format!("{HIGHSCORE_KEY_PREFIX}{mode}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_namespaced_per_mode() {
        assert_eq!(leaderboard_key(Mode::Hard), "math-game-leaderboard-hard");
        assert_eq!(highscore_key(Mode::Mixed), "math-game-highscore-mixed");
    }
}
