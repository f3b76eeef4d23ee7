use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Mode;

/// Only the most recent games are kept.
pub const HISTORY_MAX_ENTRIES: usize = 10;

/// One finished game.
///
/// Serialized with the field names `date`, `difficulty`, `score` and
/// `totalQuestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "date")]
    pub completed_at: DateTime<Utc>,
    #[serde(rename = "difficulty")]
    pub mode: Mode,
    pub score: u32,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u32,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(completed_at: DateTime<Utc>, mode: Mode, score: u32, total_questions: u32) -> Self {
        Self {
            completed_at,
            mode,
            score,
            total_questions,
        }
    }
}

/// Newest-first list of finished games, bounded to [`HISTORY_MAX_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted entries, restoring newest-first order and the bound.
    #[must_use]
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        entries.truncate(HISTORY_MAX_ENTRIES);
        Self { entries }
    }

    /// Record a game at the front, dropping the oldest beyond the bound.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_MAX_ENTRIES);
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<HistoryEntry> {
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
}
