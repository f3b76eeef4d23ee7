use async_trait::async_trait;
use quiz_core::model::{HighScore, History, Leaderboard, Mode};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::json::JsonRepository;

/// Errors surfaced by storage adapters.
///
/// Undecodable stored values are not errors: repositories fall back to an
/// empty value instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// String-keyed blob store. Each `put` replaces the whole value for a key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the backend cannot be written.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Newest-first history; empty when missing or unreadable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend failures.
    async fn load_history(&self) -> Result<History, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be stored.
    async fn save_history(&self, history: &History) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be removed.
    async fn clear_history(&self) -> Result<(), StorageError>;
}

#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Ranked board for a mode; empty when missing or unreadable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend failures.
    async fn load_leaderboard(&self, mode: Mode) -> Result<Leaderboard, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the board cannot be stored.
    async fn save_leaderboard(&self, mode: Mode, board: &Leaderboard)
    -> Result<(), StorageError>;

    /// Remove the boards of every mode.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any board cannot be removed.
    async fn clear_leaderboards(&self) -> Result<(), StorageError>;
}

#[async_trait]
pub trait HighScoreRepository: Send + Sync {
    /// Stored best score; zero when missing or unreadable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend failures.
    async fn load_high_score(&self, mode: Mode) -> Result<HighScore, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the score cannot be stored.
    async fn save_high_score(&self, mode: Mode, score: HighScore) -> Result<(), StorageError>;
}

/// Simple in-memory store for tests and throwaway sessions.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the game repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub history: Arc<dyn HistoryRepository>,
    pub leaderboards: Arc<dyn LeaderboardRepository>,
    pub high_scores: Arc<dyn HighScoreRepository>,
}

impl Storage {
    /// Repositories over any key-value backend.
    #[must_use]
    pub fn over(store: Arc<dyn KeyValueStore>) -> Self {
        let repo = JsonRepository::new(store);
        Self {
            history: Arc::new(repo.clone()),
            leaderboards: Arc::new(repo.clone()),
            high_scores: Arc::new(repo),
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::over(Arc::new(InMemoryStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_store_round_trips_and_removes() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.put("k", "v1").await.unwrap();
        store.put("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));

        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn in_memory_storage_starts_empty() {
        let storage = Storage::in_memory();
        assert!(storage.history.load_history().await.unwrap().is_empty());
        assert!(
            storage
                .leaderboards
                .load_leaderboard(Mode::Easy)
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            storage
                .high_scores
                .load_high_score(Mode::Hard)
                .await
                .unwrap(),
            HighScore::default()
        );
    }
}
