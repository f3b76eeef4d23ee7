use std::sync::Arc;

use quiz_core::model::Mode;
use services::{GameLoopService, RecordsService};

pub trait UiApp: Send + Sync {
    fn game_loop(&self) -> Arc<GameLoopService>;
    fn records(&self) -> Arc<RecordsService>;

    /// Mode selected when the menu first opens.
    fn initial_mode(&self) -> Mode;
    fn sound_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    game_loop: Arc<GameLoopService>,
    records: Arc<RecordsService>,
    initial_mode: Mode,
    sound_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            game_loop: app.game_loop(),
            records: app.records(),
            initial_mode: app.initial_mode(),
            sound_enabled: app.sound_enabled(),
        }
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    #[must_use]
    pub fn records(&self) -> Arc<RecordsService> {
        Arc::clone(&self.records)
    }

    #[must_use]
    pub fn initial_mode(&self) -> Mode {
        self.initial_mode
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
