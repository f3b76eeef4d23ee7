use std::sync::Arc;

use quiz_core::model::{HighScore, History, Leaderboard, Mode};
use storage::repository::{HighScoreRepository, HistoryRepository, LeaderboardRepository};

use crate::error::RecordsError;

/// Read and reset the stored game records.
#[derive(Clone)]
pub struct RecordsService {
    history: Arc<dyn HistoryRepository>,
    leaderboards: Arc<dyn LeaderboardRepository>,
    high_scores: Arc<dyn HighScoreRepository>,
}

impl RecordsService {
    #[must_use]
    pub fn new(
        history: Arc<dyn HistoryRepository>,
        leaderboards: Arc<dyn LeaderboardRepository>,
        high_scores: Arc<dyn HighScoreRepository>,
    ) -> Self {
        Self {
            history,
            leaderboards,
            high_scores,
        }
    }

    /// # Errors
    ///
    /// Returns `RecordsError::Storage` if the history cannot be read.
    pub async fn history(&self) -> Result<History, RecordsError> {
        Ok(self.history.load_history().await?)
    }

    /// # Errors
    ///
    /// Returns `RecordsError::Storage` if the board cannot be read.
    pub async fn leaderboard(&self, mode: Mode) -> Result<Leaderboard, RecordsError> {
        Ok(self.leaderboards.load_leaderboard(mode).await?)
    }

    /// # Errors
    ///
    /// Returns `RecordsError::Storage` if the score cannot be read.
    pub async fn high_score(&self, mode: Mode) -> Result<HighScore, RecordsError> {
        Ok(self.high_scores.load_high_score(mode).await?)
    }

    /// # Errors
    ///
    /// Returns `RecordsError::Storage` if the history cannot be removed.
    pub async fn clear_history(&self) -> Result<(), RecordsError> {
        self.history.clear_history().await?;
        log::info!("game history cleared");
        Ok(())
    }

    /// Clears the boards of every mode.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError::Storage` if any board cannot be removed.
    pub async fn clear_leaderboards(&self) -> Result<(), RecordsError> {
        self.leaderboards.clear_leaderboards().await?;
        log::info!("leaderboards cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{HistoryEntry, LeaderboardEntry, PlayerName};
    use quiz_core::time::fixed_now;
    use storage::repository::Storage;

    fn records(storage: &Storage) -> RecordsService {
        RecordsService::new(
            Arc::clone(&storage.history),
            Arc::clone(&storage.leaderboards),
            Arc::clone(&storage.high_scores),
        )
    }

    #[tokio::test]
    async fn clearing_leaderboards_keeps_history_and_high_scores() {
        let storage = Storage::in_memory();
        let mut history = History::new();
        history.push(HistoryEntry::new(fixed_now(), Mode::Hard, 9, 3));
        storage.history.save_history(&history).await.unwrap();
        let mut board = Leaderboard::new();
        board.insert(LeaderboardEntry::new(PlayerName::parse("Sari"), 9, fixed_now()));
        storage
            .leaderboards
            .save_leaderboard(Mode::Hard, &board)
            .await
            .unwrap();
        storage
            .high_scores
            .save_high_score(Mode::Hard, HighScore::new(9))
            .await
            .unwrap();

        let svc = records(&storage);
        svc.clear_leaderboards().await.unwrap();

        assert!(svc.leaderboard(Mode::Hard).await.unwrap().is_empty());
        assert_eq!(svc.history().await.unwrap().len(), 1);
        assert_eq!(svc.high_score(Mode::Hard).await.unwrap().value(), 9);

        svc.clear_history().await.unwrap();
        assert!(svc.history().await.unwrap().is_empty());
    }
}
