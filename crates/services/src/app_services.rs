use std::path::Path;
use std::sync::Arc;

use quiz_core::model::QuestionBank;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::records_service::RecordsService;
use crate::sessions::GameLoopService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    game_loop: Arc<GameLoopService>,
    records: Arc<RecordsService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        bank: QuestionBank,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, bank))
    }

    /// Build services over an existing storage aggregate.
    ///
    /// An empty bank is accepted here; starting a game reports it.
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, bank: QuestionBank) -> Self {
        if bank.is_empty() {
            log::warn!("question bank is empty; games cannot start");
        }

        let game_loop = Arc::new(GameLoopService::new(
            clock,
            Arc::new(bank),
            Arc::clone(&storage.history),
            Arc::clone(&storage.leaderboards),
            Arc::clone(&storage.high_scores),
        ));
        let records = Arc::new(RecordsService::new(
            Arc::clone(&storage.history),
            Arc::clone(&storage.leaderboards),
            Arc::clone(&storage.high_scores),
        ));

        Self { game_loop, records }
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    #[must_use]
    pub fn records(&self) -> Arc<RecordsService> {
        Arc::clone(&self.records)
    }
}

/// Load a question bank from a JSON file, or the built-in bank when no path is given.
///
/// # Errors
///
/// Returns `AppServicesError::BankFile` if the file cannot be read and
/// `AppServicesError::Bank` if it does not hold valid questions.
pub fn load_bank(path: Option<&Path>) -> Result<QuestionBank, AppServicesError> {
    let Some(path) = path else {
        return Ok(QuestionBank::builtin());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| AppServicesError::BankFile {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = QuestionBank::from_json(&raw)?;
    log::info!("loaded {} questions from {}", bank.len(), path.display());
    Ok(bank)
}
