use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::Mode;

use crate::app::SoundState;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{EndSummaryVm, GameVm, start_game};

use super::components::{FeedbackPanel, QuestionCard, Scoreboard, Toast};
use super::driver::{self, PlayHandles, ToastVm};
use super::end::{EndScreen, NameModal};
use super::scripts::unload_guard_script;

#[component]
pub fn PlayView(mode: Mode) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let SoundState(sound) = use_context::<SoundState>();
    let game_loop = ctx.game_loop();

    let handles = PlayHandles {
        vm: use_signal(|| None::<GameVm>),
        error: use_signal(|| None::<ViewError>),
        ticker: use_signal(|| None::<Task>),
        toast: use_signal(|| None::<ToastVm>),
        board_version: use_signal(|| 0_u32),
        sound,
    };
    let mut saving_name = use_signal(|| false);

    let game_loop_for_resource = game_loop.clone();
    let mut resource = use_resource(move || {
        let game_loop = game_loop_for_resource.clone();
        let mut vm = handles.vm;
        let mut error = handles.error;
        async move {
            if let Some(mut previous) = vm.write().take() {
                previous.abandon();
            }
            error.set(None);
            let started = start_game(&game_loop, mode)?;
            vm.set(Some(started));
            driver::advance(handles, game_loop).await;
            Ok::<_, ViewError>(())
        }
    });

    let in_progress = use_memo(move || handles.vm.read().as_ref().is_some_and(GameVm::in_progress));
    use_effect(move || {
        let _ = eval(&unload_guard_script(in_progress()));
    });

    // Tasks spawned here die with the component; only the page-level guard outlives it.
    use_drop(move || {
        let _ = eval(&unload_guard_script(false));
    });

    let state = view_state_from_resource(&resource);

    let on_choice = {
        let game_loop = game_loop.clone();
        use_callback(move |choice: String| {
            driver::answer(handles, game_loop.clone(), &choice);
        })
    };

    let on_quit = use_callback(move |()| {
        driver::abandon(handles);
        let _ = navigator.push(Route::Home {});
    });

    let on_play_again = use_callback(move |()| {
        driver::abandon(handles);
        resource.restart();
    });

    let on_menu = use_callback(move |()| {
        let _ = navigator.push(Route::Home {});
    });

    let on_save_name = {
        let game_loop = game_loop.clone();
        use_callback(move |raw: String| {
            if saving_name() {
                return;
            }
            saving_name.set(true);
            let game_loop = game_loop.clone();
            let mut vm = handles.vm;
            let mut error = handles.error;
            let mut board_version = handles.board_version;
            spawn(async move {
                let Some(mut current) = vm.write().take() else {
                    saving_name.set(false);
                    return;
                };
                let result = current.submit_name(&game_loop, &raw).await;
                vm.set(Some(current));
                match result {
                    Ok(()) => board_version += 1,
                    Err(err) => {
                        log::warn!("could not save leaderboard entry: {err:?}");
                        error.set(Some(err));
                    }
                }
                saving_name.set(false);
            });
        })
    };

    let on_skip_name = {
        let game_loop = game_loop.clone();
        use_callback(move |()| {
            let mut vm = handles.vm;
            if let Some(current) = vm.write().as_mut() {
                if let Err(err) = current.skip_name(&game_loop) {
                    log::warn!("could not skip leaderboard entry: {err:?}");
                }
            }
        })
    };

    let vm_guard = handles.vm.read();
    let game = vm_guard.as_ref();
    let question = game.and_then(GameVm::question).cloned();
    let feedback = game.and_then(GameVm::feedback).cloned();
    let summary = game.and_then(GameVm::summary).map(EndSummaryVm::from);
    let awaiting_name = game.is_some_and(GameVm::awaiting_name);
    let progress = game.map(GameVm::progress_label).unwrap_or_default();
    let score = game.map_or(0, GameVm::score);
    let timer = game.map(GameVm::timer_label).unwrap_or_default();
    let low = game.is_some_and(GameVm::timer_is_low);
    let choice_states = match (game, question.as_ref()) {
        (Some(game), Some(question)) => question
            .choices
            .iter()
            .map(|choice| game.choice_state(choice))
            .collect(),
        _ => Vec::new(),
    };
    drop(vm_guard);
    let toast = *handles.toast.read();
    let late_error = *handles.error.read();

    rsx! {
        div { class: "page play-page",
            header { class: "play-header",
                h2 { "{mode.label()}" }
                if summary.is_none() {
                    button {
                        class: "btn btn-secondary",
                        id: "quit-game",
                        r#type: "button",
                        onclick: move |_| on_quit.call(()),
                        "Quit"
                    }
                }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading..." }
                },
                ViewState::Error(ViewError::EmptyBank) => rsx! {
                    p { class: "notice", "{ViewError::EmptyBank.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_menu.call(()),
                        "Back to menu"
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notice", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "Retry"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(err) = late_error {
                        div { class: "notice",
                            p { "{err.message()}" }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let game_loop = game_loop.clone();
                                    spawn(async move { driver::advance(handles, game_loop).await; });
                                },
                                "Retry"
                            }
                        }
                    }
                    if let Some(summary) = summary {
                        EndScreen {
                            summary: summary.clone(),
                            mode,
                            board_version: handles.board_version,
                            on_play_again,
                            on_menu,
                        }
                        if awaiting_name {
                            NameModal {
                                mode_label: summary.mode_label,
                                on_save: on_save_name,
                                on_skip: on_skip_name,
                            }
                        }
                    } else {
                        Scoreboard { progress, score, timer, low }
                        // One keyed item so every new question mounts fresh and replays the fade-in.
                        for question in question {
                            QuestionCard {
                                key: "{question.epoch}",
                                question: question.clone(),
                                choice_states: choice_states.clone(),
                                on_choice,
                            }
                        }
                        if let Some(resolution) = feedback {
                            FeedbackPanel { resolution }
                        }
                    }
                },
            }
            for toast in toast {
                Toast { key: "{toast.id}", toast }
            }
        }
    }
}
