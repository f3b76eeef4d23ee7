use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

use quiz_core::model::{
    HistoryEntry, Leaderboard, LeaderboardEntry, Mode, PlayerName, ProfileTable, QuestionBank,
};
use storage::repository::{HighScoreRepository, HistoryRepository, LeaderboardRepository};

use super::events::PresentedQuestion;
use super::plan::PlanBuilder;
use super::service::{GameSession, PendingEntry, Presentation};
use super::summary::{GameSummary, ScoreReport};
use crate::Clock;
use crate::error::SessionError;

/// Next thing the player sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStep {
    Question(PresentedQuestion),
    Finished(GameSummary),
}

/// Starts games and records their results.
#[derive(Clone)]
pub struct GameLoopService {
    clock: Clock,
    bank: Arc<QuestionBank>,
    profiles: ProfileTable,
    history: Arc<dyn HistoryRepository>,
    leaderboards: Arc<dyn LeaderboardRepository>,
    high_scores: Arc<dyn HighScoreRepository>,
    seed: Option<u64>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        bank: Arc<QuestionBank>,
        history: Arc<dyn HistoryRepository>,
        leaderboards: Arc<dyn LeaderboardRepository>,
        high_scores: Arc<dyn HighScoreRepository>,
    ) -> Self {
        Self {
            clock,
            bank,
            profiles: ProfileTable::default(),
            history,
            leaderboards,
            high_scores,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_profiles(mut self, profiles: ProfileTable) -> Self {
        self.profiles = profiles;
        self
    }

    /// Use a fixed seed for question order, choice order and countdowns.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Start a new game for `mode`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` when the bank has no questions.
    pub fn start_game(&self, mode: Mode) -> Result<GameSession, SessionError> {
        let mut rng = self.rng();
        let plan = PlanBuilder::new(&self.bank).build(mode, &mut rng);
        if plan.fell_back {
            log::info!(
                "no {} questions in the bank; using all {} questions",
                mode.as_str(),
                plan.total()
            );
        }
        let session = GameSession::new(
            mode,
            self.profiles.clone(),
            plan.questions,
            self.clock.now(),
            rng,
        )?;
        log::info!(
            "game started: mode={} questions={}",
            mode.as_str(),
            session.total_questions()
        );
        Ok(session)
    }

    /// Present the current question, or finish the game and record it.
    ///
    /// Finishing is recorded once; later calls return the same summary. If
    /// recording fails the call can be retried, and writes that already
    /// succeeded are not repeated.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Abandoned` for an abandoned session and
    /// `SessionError::Storage` when records cannot be written.
    pub async fn next_step(&self, session: &mut GameSession) -> Result<GameStep, SessionError> {
        if session.is_abandoned() {
            return Err(SessionError::Abandoned);
        }
        match session.present_current() {
            Presentation::Question(shown) => Ok(GameStep::Question(shown)),
            Presentation::Finished => {
                if let Some(summary) = session.summary() {
                    return Ok(GameStep::Finished(summary.clone()));
                }
                self.finish_game(session).await.map(GameStep::Finished)
            }
        }
    }

    async fn finish_game(&self, session: &mut GameSession) -> Result<GameSummary, SessionError> {
        let completed_at = *session
            .finish_progress_mut()
            .completed_at
            .get_or_insert_with(|| self.clock.now());
        let mode = session.mode();
        let score = session.score();
        let total_questions = u32::try_from(session.total_questions()).map_err(|_| {
            SessionError::TooManyQuestions {
                len: session.total_questions(),
            }
        })?;
        let correct = u32::try_from(session.correct_count()).unwrap_or(total_questions);
        let report = ScoreReport::new(score, total_questions, session.profile());

        // Each step is remembered on the session; a retry resumes after the last one done.
        if !session.finish_progress().history_recorded {
            let mut history = self.history.load_history().await?;
            history.push(HistoryEntry::new(completed_at, mode, score, total_questions));
            self.history.save_history(&history).await?;
            session.finish_progress_mut().history_recorded = true;
        }

        let (high_score, improved_high_score) = match session.finish_progress().high_score {
            Some(outcome) => outcome,
            None => {
                let mut high_score = self.high_scores.load_high_score(mode).await?;
                let improved = high_score.record(score);
                if improved {
                    self.high_scores.save_high_score(mode, high_score).await?;
                    log::info!("new high score for {}: {score}", mode.as_str());
                }
                session.finish_progress_mut().high_score = Some((high_score, improved));
                (high_score, improved)
            }
        };

        let board = self.leaderboards.load_leaderboard(mode).await?;
        let qualifies = board.qualifies(score);
        if qualifies {
            session.set_pending_entry(PendingEntry {
                mode,
                score,
                recorded_at: completed_at,
            });
        }

        let summary = GameSummary {
            mode,
            score,
            total_questions,
            correct,
            max_score: report.max_score,
            percentage: report.percentage,
            tier: report.tier,
            high_score,
            improved_high_score,
            qualifies,
            completed_at,
        };
        log::info!(
            "game finished: mode={} score={score}/{} ({}%)",
            mode.as_str(),
            report.max_score,
            report.percentage
        );
        session.set_summary(summary.clone());
        Ok(summary)
    }

    /// Put the pending score on the leaderboard under `raw_name`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPendingEntry` if the game did not qualify or
    /// the entry was already used, and `SessionError::Storage` on write failure.
    /// A failed write keeps the entry pending so the name can be resubmitted.
    pub async fn submit_player_name(
        &self,
        session: &mut GameSession,
        raw_name: &str,
    ) -> Result<Leaderboard, SessionError> {
        let pending = session
            .take_pending_entry()
            .ok_or(SessionError::NoPendingEntry)?;
        let name = PlayerName::parse(raw_name);

        let mut board = match self.leaderboards.load_leaderboard(pending.mode).await {
            Ok(board) => board,
            Err(err) => {
                session.set_pending_entry(pending);
                return Err(err.into());
            }
        };
        let rank = board.insert(LeaderboardEntry::new(
            name.clone(),
            pending.score,
            pending.recorded_at,
        ));
        if let Err(err) = self.leaderboards.save_leaderboard(pending.mode, &board).await {
            session.set_pending_entry(pending);
            return Err(err.into());
        }
        log::debug!(
            "leaderboard {} updated: {name} scored {} (rank {rank:?})",
            pending.mode.as_str(),
            pending.score
        );
        Ok(board)
    }

    /// Drop the pending score without writing anything.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoPendingEntry` if there is nothing to skip.
    pub fn skip_player_name(&self, session: &mut GameSession) -> Result<(), SessionError> {
        session
            .take_pending_entry()
            .map(|_| ())
            .ok_or(SessionError::NoPendingEntry)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
