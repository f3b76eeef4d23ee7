//! Shared error types for the services crate.

use std::path::PathBuf;
use thiserror::Error;

use quiz_core::model::BankError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by game sessions and the game loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available; add questions to the bank")]
    EmptyBank,
    #[error("session has too many questions ({len})")]
    TooManyQuestions { len: usize },
    #[error("session was abandoned")]
    Abandoned,
    #[error("no leaderboard entry is waiting for a name")]
    NoPendingEntry,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `RecordsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordsError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("failed to read question bank {path}: {source}")]
    BankFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
