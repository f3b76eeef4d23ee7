use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fmt;

use quiz_core::model::{DifficultyProfile, HighScore, Mode, ProfileTable, Question};
use quiz_core::time::Countdown;

use super::events::{
    FeedbackKind, MISSING_EXPLANATION, Phase, PresentedQuestion, Resolution, Tick,
};
use super::summary::GameSummary;
use crate::error::SessionError;

//
// ─── PRESENTATION ──────────────────────────────────────────────────────────────
//

/// What `present_current` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Question(PresentedQuestion),
    Finished,
}

/// Score waiting for a player name after a qualifying game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingEntry {
    pub mode: Mode,
    pub score: u32,
    pub recorded_at: DateTime<Utc>,
}

/// Record writes already done for a finished game, so a retry after a
/// failed write does not repeat them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FinishProgress {
    pub completed_at: Option<DateTime<Utc>>,
    pub history_recorded: bool,
    /// Best score after this game and whether it improved.
    pub high_score: Option<(HighScore, bool)>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One game in progress.
///
/// Every presented question gets a fresh epoch. Answers, ticks and timeouts
/// carrying any other epoch are ignored, and only the first of them resolves
/// a question.
pub struct GameSession {
    mode: Mode,
    profiles: ProfileTable,
    questions: Vec<Question>,
    current: usize,
    score: u32,
    correct: usize,
    phase: Phase,
    epoch: u64,
    countdown: Countdown,
    presented: Option<PresentedQuestion>,
    started_at: DateTime<Utc>,
    abandoned: bool,
    summary: Option<GameSummary>,
    pending: Option<PendingEntry>,
    finish: FinishProgress,
    rng: StdRng,
}

impl GameSession {
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if no questions are provided and
    /// `SessionError::TooManyQuestions` if the count does not fit a score total.
    pub fn new(
        mode: Mode,
        profiles: ProfileTable,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
        rng: StdRng,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyBank);
        }
        if u32::try_from(questions.len()).is_err() {
            return Err(SessionError::TooManyQuestions {
                len: questions.len(),
            });
        }

        Ok(Self {
            mode,
            profiles,
            questions,
            current: 0,
            score: 0,
            correct: 0,
            phase: Phase::Idle,
            epoch: 0,
            countdown: Countdown::new(0),
            presented: None,
            started_at,
            abandoned: false,
            summary: None,
            pending: None,
            finish: FinishProgress::default(),
            rng,
        })
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Scoring profile of the session's mode.
    #[must_use]
    pub fn profile(&self) -> DifficultyProfile {
        self.profiles.for_mode(self.mode)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions already resolved.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }

    /// The question most recently shown, if one is on screen.
    #[must_use]
    pub fn presented(&self) -> Option<&PresentedQuestion> {
        self.presented.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn pending_entry(&self) -> Option<&PendingEntry> {
        self.pending.as_ref()
    }

    /// Show the current question, or report that the game is over.
    ///
    /// Calling this again while a question is accepting returns the same
    /// presentation without restarting its countdown.
    pub fn present_current(&mut self) -> Presentation {
        match self.phase {
            Phase::Finished => return Presentation::Finished,
            Phase::Accepting => {
                if let Some(shown) = &self.presented {
                    let mut shown = shown.clone();
                    shown.time_remaining = self.countdown.remaining();
                    return Presentation::Question(shown);
                }
            }
            Phase::Idle | Phase::Resolved => {}
        }

        let Some(question) = self.questions.get(self.current) else {
            self.phase = Phase::Finished;
            self.presented = None;
            return Presentation::Finished;
        };

        let window = self
            .profiles
            .timing_for(self.mode, question.difficulty())
            .window();
        let seconds = self.rng.random_range(window);
        let mut choices = question.choices().to_vec();
        choices.shuffle(&mut self.rng);

        self.epoch += 1;
        self.countdown = Countdown::new(seconds);
        self.phase = Phase::Accepting;

        let shown = PresentedQuestion {
            epoch: self.epoch,
            number: self.current + 1,
            total: self.questions.len(),
            text: question.text().to_owned(),
            difficulty: question.difficulty(),
            choices,
            time_remaining: seconds,
            score: self.score,
        };
        self.presented = Some(shown.clone());
        Presentation::Question(shown)
    }

    /// Resolve the current question with the player's choice.
    ///
    /// Returns `None` for a stale epoch or when the question is already resolved.
    pub fn submit_answer(&mut self, epoch: u64, choice: &str) -> Option<Resolution> {
        if !self.accepts(epoch) {
            return None;
        }
        let correct = self.questions.get(self.current)?.is_correct(choice);
        let kind = if correct {
            FeedbackKind::Correct
        } else {
            FeedbackKind::Wrong
        };
        self.resolve(kind, Some(choice.to_owned()))
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero resolves the question as a timeout.
    pub fn tick(&mut self, epoch: u64) -> Option<Tick> {
        if !self.accepts(epoch) {
            return None;
        }
        let remaining = self.countdown.tick();
        if let Some(shown) = self.presented.as_mut() {
            shown.time_remaining = remaining;
        }
        if remaining == 0 {
            self.resolve(FeedbackKind::Timeout, None).map(Tick::Expired)
        } else {
            Some(Tick::Remaining(remaining))
        }
    }

    /// Resolve the current question as unanswered.
    pub fn on_timeout(&mut self, epoch: u64) -> Option<Resolution> {
        if !self.accepts(epoch) {
            return None;
        }
        self.resolve(FeedbackKind::Timeout, None)
    }

    /// Leave the game. Nothing of it is recorded and every pending
    /// timer callback becomes stale.
    pub fn abandon(&mut self) {
        self.abandoned = true;
        self.epoch += 1;
        self.phase = Phase::Finished;
        self.presented = None;
        self.pending = None;
    }

    fn accepts(&self, epoch: u64) -> bool {
        self.phase == Phase::Accepting && epoch == self.epoch
    }

    fn resolve(&mut self, kind: FeedbackKind, chosen: Option<String>) -> Option<Resolution> {
        let question = self.questions.get(self.current)?;
        let points_awarded = if kind == FeedbackKind::Correct {
            self.profiles.for_mode(self.mode).points()
        } else {
            0
        };
        let explanation = if question.explanation().trim().is_empty() {
            MISSING_EXPLANATION.to_owned()
        } else {
            question.explanation().to_owned()
        };
        let correct_choice = question.answer().to_owned();

        self.score = self.score.saturating_add(points_awarded);
        if kind == FeedbackKind::Correct {
            self.correct += 1;
        }
        self.current += 1;
        self.phase = Phase::Resolved;
        self.presented = None;

        Some(Resolution {
            epoch: self.epoch,
            kind,
            chosen,
            correct_choice,
            headline: kind.headline(),
            explanation,
            points_awarded,
            score: self.score,
            delay: kind.delay(),
        })
    }

    pub(crate) fn set_summary(&mut self, summary: GameSummary) {
        self.summary = Some(summary);
    }

    pub(crate) fn set_pending_entry(&mut self, entry: PendingEntry) {
        self.pending = Some(entry);
    }

    pub(crate) fn take_pending_entry(&mut self) -> Option<PendingEntry> {
        self.pending.take()
    }

    pub(crate) fn finish_progress(&self) -> FinishProgress {
        self.finish
    }

    pub(crate) fn finish_progress_mut(&mut self) -> &mut FinishProgress {
        &mut self.finish
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("mode", &self.mode)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .field("epoch", &self.epoch)
            .field("started_at", &self.started_at)
            .field("abandoned", &self.abandoned)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
