use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Top-N size per mode.
pub const LEADERBOARD_MAX: usize = 5;
pub const PLAYER_NAME_MAX_CHARS: usize = 12;
pub const DEFAULT_PLAYER_NAME: &str = "Anon";

/// Display name on the leaderboard: trimmed, at most
/// [`PLAYER_NAME_MAX_CHARS`] characters, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct PlayerName(String);

impl PlayerName {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let name: String = raw.trim().chars().take(PLAYER_NAME_MAX_CHARS).collect();
        if name.is_empty() {
            Self::anonymous()
        } else {
            Self(name)
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self(DEFAULT_PLAYER_NAME.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerName {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: PlayerName,
    pub score: u32,
    #[serde(rename = "date")]
    pub recorded_at: DateTime<Utc>,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(name: PlayerName, score: u32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            name,
            score,
            recorded_at,
        }
    }
}

/// Higher score first; equal scores put the more recent entry first.
fn rank_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.recorded_at.cmp(&a.recorded_at))
}

/// Ranked top-[`LEADERBOARD_MAX`] list for one mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted entries, re-ranking and truncating.
    #[must_use]
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(rank_order);
        entries.truncate(LEADERBOARD_MAX);
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= LEADERBOARD_MAX
    }

    /// Whether `score` earns a place: the board has room, or it strictly
    /// beats the last-place score. A tie with last place does not qualify.
    #[must_use]
    pub fn qualifies(&self, score: u32) -> bool {
        if !self.is_full() {
            return true;
        }
        self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Insert and re-rank. Returns the zero-based rank if the entry survived
    /// truncation.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let marker = entry.clone();
        self.entries.push(entry);
        self.entries.sort_by(rank_order);
        self.entries.truncate(LEADERBOARD_MAX);
        self.entries.iter().position(|e| *e == marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn entry(name: &str, score: u32, minutes: i64) -> LeaderboardEntry {
        LeaderboardEntry::new(
            PlayerName::parse(name),
            score,
            fixed_now() + Duration::minutes(minutes),
        )
    }

    fn full_board() -> Leaderboard {
        Leaderboard::from_entries(vec![
            entry("a", 10, 0),
            entry("b", 8, 0),
            entry("c", 6, 0),
            entry("d", 4, 0),
            entry("e", 2, 0),
        ])
    }

    #[test]
    fn name_is_trimmed_truncated_and_defaulted() {
        assert_eq!(PlayerName::parse("  Budi  ").as_str(), "Budi");
        assert_eq!(
            PlayerName::parse("abcdefghijklmnop").as_str(),
            "abcdefghijkl"
        );
        assert_eq!(PlayerName::parse("   ").as_str(), DEFAULT_PLAYER_NAME);
        assert_eq!(PlayerName::parse("ñññññññññññññ").as_str().chars().count(), 12);
    }

    #[test]
    fn qualification_uses_strict_comparison_when_full() {
        let board = full_board();
        assert!(board.is_full());
        assert!(!board.qualifies(2));
        assert!(!board.qualifies(1));
        assert!(board.qualifies(3));
    }

    #[test]
    fn qualifies_anything_while_board_has_room() {
        let board = Leaderboard::from_entries(vec![entry("a", 10, 0)]);
        assert!(board.qualifies(0));
    }

    #[test]
    fn insert_ranks_and_bounds() {
        let mut board = full_board();
        let rank = board.insert(entry("new", 7, 1));
        assert_eq!(rank, Some(2));
        assert_eq!(board.len(), LEADERBOARD_MAX);
        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![10, 8, 7, 6, 4]);
    }

    #[test]
    fn ties_place_newer_entry_first() {
        let mut board = Leaderboard::new();
        board.insert(entry("old", 5, 0));
        let rank = board.insert(entry("new", 5, 10));
        assert_eq!(rank, Some(0));
        assert_eq!(board.entries()[0].name.as_str(), "new");
        assert_eq!(board.entries()[1].name.as_str(), "old");
    }

    #[test]
    fn from_entries_re_sorts_corrupt_order() {
        let board = Leaderboard::from_entries(vec![
            entry("low", 1, 0),
            entry("high", 9, 0),
            entry("mid", 5, 0),
            entry("x", 0, 0),
            entry("y", 0, 1),
            entry("z", 0, 2),
        ]);
        assert_eq!(board.len(), LEADERBOARD_MAX);
        assert_eq!(board.entries()[0].name.as_str(), "high");
        assert_eq!(board.entries()[3].name.as_str(), "z");
    }

    #[test]
    fn deserializing_normalizes_name() {
        let raw = format!(
            r#"{{"name":"   ","score":3,"date":"{}"}}"#,
            fixed_now().to_rfc3339()
        );
        let parsed: LeaderboardEntry = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.name.as_str(), DEFAULT_PLAYER_NAME);
    }
}
