mod events;
mod plan;
mod service;
mod summary;
mod workflow;

// Public API of the game session subsystem.
pub use crate::error::SessionError;
pub use events::{
    ANSWER_FEEDBACK_DELAY, FeedbackKind, MISSING_EXPLANATION, Phase, PresentedQuestion,
    Resolution, TIMEOUT_FEEDBACK_DELAY, Tick,
};
pub use plan::{PlanBuilder, SessionPlan};
pub use service::{GameSession, PendingEntry, Presentation};
pub use summary::GameSummary;
pub use workflow::{GameLoopService, GameStep};
