mod bank;
mod difficulty;
mod high_score;
mod history;
mod leaderboard;
mod profile;
mod question;

pub use bank::{BankError, QuestionBank};
pub use difficulty::{Difficulty, Mode, ParseModeError};
pub use high_score::HighScore;
pub use history::{HISTORY_MAX_ENTRIES, History, HistoryEntry};
pub use leaderboard::{
    DEFAULT_PLAYER_NAME, LEADERBOARD_MAX, Leaderboard, LeaderboardEntry, PLAYER_NAME_MAX_CHARS,
    PlayerName,
};
pub use profile::{DifficultyProfile, ProfileError, ProfileTable};
pub use question::{CHOICE_COUNT, Question, QuestionDraft, QuestionError};
