//! Game repositories encoded as JSON blobs over a [`KeyValueStore`].

use async_trait::async_trait;
use quiz_core::model::{
    HighScore, History, HistoryEntry, Leaderboard, LeaderboardEntry, Mode,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::keys::{HISTORY_KEY, highscore_key, leaderboard_key};
use crate::repository::{
    HighScoreRepository, HistoryRepository, KeyValueStore, LeaderboardRepository, StorageError,
};

#[derive(Clone)]
pub struct JsonRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Missing keys and undecodable blobs both read as `None`.
    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                log::warn!("ignoring unreadable value under {key}: {err}");
                Ok(None)
            }
        }
    }

    async fn write<T: Serialize + ?Sized + Sync>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.put(key, &raw).await
    }
}

#[async_trait]
impl HistoryRepository for JsonRepository {
    async fn load_history(&self) -> Result<History, StorageError> {
        let entries: Vec<HistoryEntry> = self.read(HISTORY_KEY).await?.unwrap_or_default();
        Ok(History::from_entries(entries))
    }

    async fn save_history(&self, history: &History) -> Result<(), StorageError> {
        self.write(HISTORY_KEY, history.entries()).await
    }

    async fn clear_history(&self) -> Result<(), StorageError> {
        self.store.remove(HISTORY_KEY).await
    }
}

#[async_trait]
impl LeaderboardRepository for JsonRepository {
    async fn load_leaderboard(&self, mode: Mode) -> Result<Leaderboard, StorageError> {
        let entries: Vec<LeaderboardEntry> = self
            .read(&leaderboard_key(mode))
            .await?
            .unwrap_or_default();
        Ok(Leaderboard::from_entries(entries))
    }

    async fn save_leaderboard(
        &self,
        mode: Mode,
        board: &Leaderboard,
    ) -> Result<(), StorageError> {
        self.write(&leaderboard_key(mode), board.entries()).await
    }

    async fn clear_leaderboards(&self) -> Result<(), StorageError> {
        for mode in Mode::ALL {
            self.store.remove(&leaderboard_key(mode)).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl HighScoreRepository for JsonRepository {
    async fn load_high_score(&self, mode: Mode) -> Result<HighScore, StorageError> {
        Ok(self
            .read::<HighScore>(&highscore_key(mode))
            .await?
            .unwrap_or_default())
    }

    async fn save_high_score(&self, mode: Mode, score: HighScore) -> Result<(), StorageError> {
        self.write(&highscore_key(mode), &score).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryStore;
    use chrono::Duration;
    use quiz_core::model::PlayerName;
    use quiz_core::time::fixed_now;

    fn repo() -> (InMemoryStore, JsonRepository) {
        let store = InMemoryStore::new();
        let repo = JsonRepository::new(Arc::new(store.clone()));
        (store, repo)
    }

    #[tokio::test]
    async fn corrupt_blobs_read_as_empty() {
        let (store, repo) = repo();
        store.put(HISTORY_KEY, "{not json").await.unwrap();
        store
            .put(&leaderboard_key(Mode::Easy), "[{\"name\": 5}]")
            .await
            .unwrap();
        store.put(&highscore_key(Mode::Easy), "\"abc\"").await.unwrap();

        assert!(repo.load_history().await.unwrap().is_empty());
        assert!(repo.load_leaderboard(Mode::Easy).await.unwrap().is_empty());
        assert_eq!(repo.load_high_score(Mode::Easy).await.unwrap().value(), 0);
    }

    #[tokio::test]
    async fn high_score_reads_plain_number_text() {
        let (store, repo) = repo();
        store.put(&highscore_key(Mode::Hard), "7").await.unwrap();
        assert_eq!(repo.load_high_score(Mode::Hard).await.unwrap().value(), 7);
    }

    #[tokio::test]
    async fn history_round_trips_newest_first() {
        let (_store, repo) = repo();
        let now = fixed_now();
        let mut history = History::new();
        history.push(HistoryEntry::new(now, Mode::Easy, 1, 3));
        history.push(HistoryEntry::new(now + Duration::minutes(1), Mode::Hard, 6, 4));
        repo.save_history(&history).await.unwrap();

        let loaded = repo.load_history().await.unwrap();
        assert_eq!(loaded, history);
        assert_eq!(loaded.entries()[0].mode, Mode::Hard);

        repo.clear_history().await.unwrap();
        assert!(repo.load_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_leaderboards_covers_every_mode() {
        let (_store, repo) = repo();
        let mut board = Leaderboard::new();
        board.insert(LeaderboardEntry::new(PlayerName::parse("Ana"), 3, fixed_now()));
        for mode in Mode::ALL {
            repo.save_leaderboard(mode, &board).await.unwrap();
        }

        repo.clear_leaderboards().await.unwrap();
        for mode in Mode::ALL {
            assert!(repo.load_leaderboard(mode).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn boards_are_independent_per_mode() {
        let (_store, repo) = repo();
        let mut board = Leaderboard::new();
        board.insert(LeaderboardEntry::new(PlayerName::parse("Ana"), 3, fixed_now()));
        repo.save_leaderboard(Mode::Medium, &board).await.unwrap();

        assert_eq!(repo.load_leaderboard(Mode::Medium).await.unwrap(), board);
        assert!(repo.load_leaderboard(Mode::Mixed).await.unwrap().is_empty());
    }
}
