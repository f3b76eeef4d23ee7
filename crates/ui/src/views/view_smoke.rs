use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{
    Difficulty, HighScore, History, HistoryEntry, Leaderboard, LeaderboardEntry, Mode, PlayerName,
    QuestionBank, QuestionDraft,
};
use quiz_core::time::fixed_now;
use storage::repository::{KeyValueStore, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

fn one_easy_question() -> QuestionBank {
    QuestionBank::from_drafts([QuestionDraft::new("7 + 5", ["12", "11", "13", "14"], "12")
        .with_explanation("Seven plus five is twelve.")
        .with_difficulty(Difficulty::Easy)])
    .unwrap()
}

struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_records() {
    let mut harness = setup_view_harness(ViewKind::Home, one_easy_question());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Choose a mode"), "missing mode picker in {html}");
    assert!(html.contains("No scores yet."), "missing empty board in {html}");
    assert!(html.contains("No games yet."), "missing empty history in {html}");
    assert!(html.contains("High score: "), "missing high score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stored_records() {
    let storage = Storage::in_memory();
    let mut history = History::new();
    history.push(HistoryEntry::new(fixed_now(), Mode::Hard, 6, 3));
    storage.history.save_history(&history).await.unwrap();
    storage
        .high_scores
        .save_high_score(Mode::Mixed, HighScore::new(8))
        .await
        .unwrap();
    let mut board = Leaderboard::new();
    board.insert(LeaderboardEntry::new(PlayerName::parse("Rina"), 8, fixed_now()));
    storage
        .leaderboards
        .save_leaderboard(Mode::Mixed, &board)
        .await
        .unwrap();

    let mut harness = setup_view_harness_with_storage(ViewKind::Home, one_easy_question(), storage);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Rina"), "missing leaderboard name in {html}");
    assert!(html.contains("HARD"), "missing history mode in {html}");
    assert!(html.contains("Score: 6 / 3"), "missing history score in {html}");
    assert!(!html.contains("No scores yet."), "board should not be empty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_storage_error() {
    let storage = Storage::over(Arc::new(FailingStore));
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, one_easy_question(), storage);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("Saved scores could not be reached"),
        "missing storage error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Play(Mode::Easy), one_easy_question());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Question 1 of 1"), "missing progress in {html}");
    assert!(html.contains("7 + 5"), "missing question text in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    for choice in ["12", "11", "13", "14"] {
        assert!(html.contains(choice), "missing choice {choice} in {html}");
    }
    assert!(html.contains("Quit"), "missing quit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_reports_empty_bank() {
    let mut harness = setup_view_harness(ViewKind::Play(Mode::Mixed), QuestionBank::default());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("No questions available"),
        "missing empty bank message in {html}"
    );
    assert!(html.contains("Back to menu"), "missing back button in {html}");
}
