use quiz_core::model::{Difficulty, Leaderboard, Mode};
use services::{
    FeedbackKind, GameLoopService, GameSession, GameStep, GameSummary, PresentedQuestion,
    Resolution, Tick,
};

use crate::views::ViewError;
use crate::vm::time_fmt::format_mmss;

/// Seconds left at which the countdown is shown as urgent.
pub const LOW_TIME_SECS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceState {
    Open,
    Disabled,
    Correct,
    Wrong,
}

impl ChoiceState {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            ChoiceState::Open => "choice",
            ChoiceState::Disabled => "choice disabled",
            ChoiceState::Correct => "choice disabled correct",
            ChoiceState::Wrong => "choice disabled wrong",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Question,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickUpdate {
    Remaining(u32),
    Resolved(Resolution),
}

/// Screen state for one game: the session plus what is on screen.
pub struct GameVm {
    session: GameSession,
    question: Option<PresentedQuestion>,
    feedback: Option<Resolution>,
    summary: Option<GameSummary>,
    awaiting_name: bool,
    saved_board: Option<Leaderboard>,
}

impl GameVm {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            question: None,
            feedback: None,
            summary: None,
            awaiting_name: false,
            saved_board: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }

    #[must_use]
    pub fn question(&self) -> Option<&PresentedQuestion> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Resolution> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn awaiting_name(&self) -> bool {
        self.awaiting_name
    }

    /// Board returned by the last saved name, if any.
    #[must_use]
    pub fn saved_board(&self) -> Option<&Leaderboard> {
        self.saved_board.as_ref()
    }

    /// A game is on screen and has not ended.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.summary.is_none() && !self.session.is_abandoned()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        self.question.as_ref().map_or_else(String::new, |q| {
            format!("Question {} of {}", q.number, q.total)
        })
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.question.as_ref().map(|q| q.difficulty)
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format_mmss(self.session.time_remaining())
    }

    #[must_use]
    pub fn timer_is_low(&self) -> bool {
        self.question.is_some()
            && self.feedback.is_none()
            && self.session.time_remaining() <= LOW_TIME_SECS
    }

    /// Styling for a choice button given the current feedback.
    #[must_use]
    pub fn choice_state(&self, choice: &str) -> ChoiceState {
        let Some(feedback) = &self.feedback else {
            return ChoiceState::Open;
        };
        if choice == feedback.correct_choice {
            ChoiceState::Correct
        } else if feedback.kind == FeedbackKind::Wrong
            && feedback.chosen.as_deref() == Some(choice)
        {
            ChoiceState::Wrong
        } else {
            ChoiceState::Disabled
        }
    }

    /// Show the next question, or finish the game.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Storage` when the finished game cannot be recorded.
    pub async fn advance(&mut self, game_loop: &GameLoopService) -> Result<GameOutcome, ViewError> {
        match game_loop.next_step(&mut self.session).await? {
            GameStep::Question(shown) => {
                self.question = Some(shown);
                self.feedback = None;
                Ok(GameOutcome::Question)
            }
            GameStep::Finished(summary) => {
                self.question = None;
                self.feedback = None;
                self.awaiting_name = summary.qualifies && self.session.pending_entry().is_some();
                self.summary = Some(summary);
                Ok(GameOutcome::Finished)
            }
        }
    }

    /// Answer the question on screen. `None` if it was already resolved.
    pub fn answer(&mut self, choice: &str) -> Option<Resolution> {
        let epoch = self.question.as_ref()?.epoch;
        let resolution = self.session.submit_answer(epoch, choice)?;
        self.feedback = Some(resolution.clone());
        Some(resolution)
    }

    /// One countdown second for `epoch`. `None` once that question is gone.
    pub fn tick(&mut self, epoch: u64) -> Option<TickUpdate> {
        match self.session.tick(epoch)? {
            Tick::Remaining(left) => {
                if let Some(question) = self.question.as_mut() {
                    question.time_remaining = left;
                }
                Some(TickUpdate::Remaining(left))
            }
            Tick::Expired(resolution) => {
                if let Some(question) = self.question.as_mut() {
                    question.time_remaining = 0;
                }
                self.feedback = Some(resolution.clone());
                Some(TickUpdate::Resolved(resolution))
            }
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Storage` if the board cannot be saved.
    pub async fn submit_name(
        &mut self,
        game_loop: &GameLoopService,
        raw_name: &str,
    ) -> Result<(), ViewError> {
        let board = game_loop
            .submit_player_name(&mut self.session, raw_name)
            .await?;
        self.awaiting_name = false;
        self.saved_board = Some(board);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if no name was pending.
    pub fn skip_name(&mut self, game_loop: &GameLoopService) -> Result<(), ViewError> {
        game_loop.skip_player_name(&mut self.session)?;
        self.awaiting_name = false;
        Ok(())
    }

    pub fn abandon(&mut self) {
        self.session.abandon();
        self.question = None;
        self.feedback = None;
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyBank` when there is nothing to play.
pub fn start_game(game_loop: &GameLoopService, mode: Mode) -> Result<GameVm, ViewError> {
    Ok(GameVm::new(game_loop.start_game(mode)?))
}
