use quiz_core::model::{HighScore, History, Leaderboard};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub completed_at_str: String,
    pub mode_label: &'static str,
    pub score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    /// 1-based.
    pub rank: usize,
    pub name: String,
    pub score: u32,
}

#[must_use]
pub fn map_history_rows(history: &History) -> Vec<HistoryRowVm> {
    history
        .entries()
        .iter()
        .map(|entry| HistoryRowVm {
            completed_at_str: format_datetime(entry.completed_at),
            mode_label: entry.mode.label(),
            score_label: format!("Score: {} / {}", entry.score, entry.total_questions),
        })
        .collect()
}

#[must_use]
pub fn map_leaderboard_rows(board: &Leaderboard) -> Vec<LeaderboardRowVm> {
    board
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| LeaderboardRowVm {
            rank: index + 1,
            name: entry.name.to_string(),
            score: entry.score,
        })
        .collect()
}

/// A mode with no recorded games shows a dash.
#[must_use]
pub fn high_score_label(score: HighScore) -> String {
    if score.is_set() {
        score.value().to_string()
    } else {
        "-".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{HistoryEntry, LeaderboardEntry, Mode, PlayerName};
    use quiz_core::time::fixed_now;

    #[test]
    fn history_rows_show_mode_and_score() {
        let mut history = History::new();
        history.push(HistoryEntry::new(fixed_now(), Mode::Hard, 6, 3));
        let rows = map_history_rows(&history);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mode_label, "HARD");
        assert_eq!(rows[0].score_label, "Score: 6 / 3");
    }

    #[test]
    fn leaderboard_rows_are_ranked_from_one() {
        let mut board = Leaderboard::new();
        board.insert(LeaderboardEntry::new(PlayerName::parse("Low"), 1, fixed_now()));
        board.insert(LeaderboardEntry::new(PlayerName::parse("High"), 9, fixed_now()));
        let rows = map_leaderboard_rows(&board);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].name, "High");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn unset_high_score_is_a_dash() {
        assert_eq!(high_score_label(HighScore::default()), "-");
        assert_eq!(high_score_label(HighScore::new(12)), "12");
    }
}
