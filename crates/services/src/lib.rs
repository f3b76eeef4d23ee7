#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod records_service;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use app_services::{AppServices, load_bank};
pub use error::{AppServicesError, RecordsError, SessionError};
pub use records_service::RecordsService;

pub use sessions::{
    FeedbackKind, GameLoopService, GameSession, GameStep, GameSummary, PendingEntry, Phase,
    PresentedQuestion, Resolution, SessionPlan, Tick,
};
