//! Per-question flow: countdown ticks, feedback, and the pause before the
//! next question. Each presented question gets one ticking task, cancelled
//! as soon as the question resolves.

use std::sync::Arc;
use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use quiz_core::sound::{SoundCue, SoundSettings};
use services::{FeedbackKind, GameLoopService, Resolution};

use crate::views::ViewError;
use crate::vm::{GameOutcome, GameVm, TickUpdate};

use super::scripts::tone_script;

pub(super) const TICK_INTERVAL: Duration = Duration::from_secs(1);
pub(super) const TOAST_DURATION: Duration = Duration::from_millis(1400);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct ToastVm {
    pub id: u64,
    pub text: &'static str,
    pub success: bool,
}

/// Signals shared by the play screen and its background tasks.
#[derive(Clone, Copy)]
pub(super) struct PlayHandles {
    pub vm: Signal<Option<GameVm>>,
    pub error: Signal<Option<ViewError>>,
    pub ticker: Signal<Option<Task>>,
    pub toast: Signal<Option<ToastVm>>,
    pub board_version: Signal<u32>,
    pub sound: Signal<SoundSettings>,
}

impl PlayHandles {
    fn stop_ticker(mut self) {
        if let Some(task) = self.ticker.write().take() {
            task.cancel();
        }
    }
}

/// Start the countdown for the question presented under `epoch`.
pub(super) fn begin_question(handles: PlayHandles, game_loop: Arc<GameLoopService>, epoch: u64) {
    handles.stop_ticker();
    let mut ticker = handles.ticker;
    let mut vm = handles.vm;
    let task = spawn(async move {
        loop {
            tokio::time::sleep(TICK_INTERVAL).await;
            let update = vm.write().as_mut().and_then(|vm| vm.tick(epoch));
            match update {
                Some(TickUpdate::Remaining(_)) => {}
                Some(TickUpdate::Resolved(resolution)) => {
                    ticker.set(None);
                    after_resolution(handles, game_loop, &resolution);
                    break;
                }
                None => break,
            }
        }
    });
    ticker.set(Some(task));
}

/// Player picked `choice` for the question on screen.
pub(super) fn answer(handles: PlayHandles, game_loop: Arc<GameLoopService>, choice: &str) {
    let mut vm = handles.vm;
    let resolution = vm.write().as_mut().and_then(|vm| vm.answer(choice));
    if let Some(resolution) = resolution {
        handles.stop_ticker();
        after_resolution(handles, game_loop, &resolution);
    }
}

/// Leave the running game; no records are written.
pub(super) fn abandon(handles: PlayHandles) {
    handles.stop_ticker();
    let mut vm = handles.vm;
    if let Some(vm) = vm.write().as_mut() {
        vm.abandon();
    }
}

fn after_resolution(handles: PlayHandles, game_loop: Arc<GameLoopService>, resolution: &Resolution) {
    play_cue(handles.sound, resolution.kind.cue());
    show_toast(
        handles.toast,
        resolution.kind.toast(),
        resolution.kind == FeedbackKind::Correct,
    );
    let delay = resolution.delay;
    spawn(async move {
        tokio::time::sleep(delay).await;
        advance(handles, game_loop).await;
    });
}

/// Present the next question or finish the game.
pub(super) async fn advance(handles: PlayHandles, game_loop: Arc<GameLoopService>) {
    let mut vm = handles.vm;
    let mut error = handles.error;
    let mut board_version = handles.board_version;

    let Some(mut current) = vm.write().take() else {
        return;
    };
    let result = current.advance(&game_loop).await;
    let epoch = current.question().map(|q| q.epoch);
    let improved = current
        .summary()
        .is_some_and(|summary| summary.improved_high_score);
    vm.set(Some(current));

    match result {
        Ok(GameOutcome::Question) => {
            error.set(None);
            if let Some(epoch) = epoch {
                begin_question(handles, game_loop, epoch);
            }
        }
        Ok(GameOutcome::Finished) => {
            error.set(None);
            board_version += 1;
            if improved {
                show_toast(handles.toast, "New high score!", true);
            }
        }
        Err(err) => {
            log::warn!("could not advance the game: {err:?}");
            error.set(Some(err));
        }
    }
}

pub(super) fn play_cue(sound: Signal<SoundSettings>, cue: SoundCue) {
    if let Some(js) = tone_script(sound.peek().tones_for(cue)) {
        let _ = eval(&js);
    }
}

fn show_toast(mut toast: Signal<Option<ToastVm>>, text: &'static str, success: bool) {
    let id = toast.peek().as_ref().map_or(1, |current| current.id + 1);
    toast.set(Some(ToastVm { id, text, success }));
    spawn(async move {
        tokio::time::sleep(TOAST_DURATION).await;
        if toast.peek().as_ref().is_some_and(|current| current.id == id) {
            toast.set(None);
        }
    });
}
