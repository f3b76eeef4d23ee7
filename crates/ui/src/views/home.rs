use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::Mode;

use crate::app::{SelectedMode, SoundState};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    HistoryRowVm, LeaderboardRowVm, high_score_label, map_history_rows, map_leaderboard_rows,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClearTarget {
    History,
    Leaderboards,
}

impl ClearTarget {
    const fn prompt(self) -> &'static str {
        match self {
            ClearTarget::History => "Delete all game history?",
            ClearTarget::Leaderboards => "Delete every leaderboard?",
        }
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let SelectedMode(mut selected) = use_context::<SelectedMode>();
    let SoundState(mut sound) = use_context::<SoundState>();
    let records = ctx.records();

    let mut board_mode = use_signal(|| *selected.peek());
    let mut confirm = use_signal(|| None::<ClearTarget>);
    let action_error = use_signal(|| None::<ViewError>);

    let best_resource = {
        let records = Arc::clone(&records);
        use_resource(move || {
            let records = Arc::clone(&records);
            let mode = selected();
            async move {
                let best = records.high_score(mode).await?;
                Ok::<_, ViewError>(high_score_label(best))
            }
        })
    };
    let board_resource = {
        let records = Arc::clone(&records);
        use_resource(move || {
            let records = Arc::clone(&records);
            let mode = board_mode();
            async move {
                let board = records.leaderboard(mode).await?;
                Ok::<_, ViewError>(map_leaderboard_rows(&board))
            }
        })
    };
    let history_resource = {
        let records = Arc::clone(&records);
        use_resource(move || {
            let records = Arc::clone(&records);
            async move {
                let history = records.history().await?;
                Ok::<_, ViewError>(map_history_rows(&history))
            }
        })
    };

    let run_clear = {
        let records = Arc::clone(&records);
        use_callback(move |target: ClearTarget| {
            let records = Arc::clone(&records);
            let mut action_error = action_error;
            let mut history_resource = history_resource;
            let mut board_resource = board_resource;
            confirm.set(None);
            spawn(async move {
                let result = match target {
                    ClearTarget::History => records.clear_history().await,
                    ClearTarget::Leaderboards => records.clear_leaderboards().await,
                };
                match result {
                    Ok(()) => {
                        action_error.set(None);
                        match target {
                            ClearTarget::History => history_resource.restart(),
                            ClearTarget::Leaderboards => board_resource.restart(),
                        }
                    }
                    Err(err) => {
                        log::warn!("could not clear records: {err}");
                        action_error.set(Some(ViewError::from(err)));
                    }
                }
            });
        })
    };

    let best_label = match view_state_from_resource(&best_resource) {
        ViewState::Ready(label) => label,
        _ => "-".to_owned(),
    };
    let board_state = view_state_from_resource(&board_resource);
    let history_state = view_state_from_resource(&history_resource);
    let sound_on = sound.read().enabled();
    let current = selected();
    let shown_board = board_mode();

    rsx! {
        div { class: "page home-page",
            section { class: "panel start-panel",
                h2 { "Choose a mode" }
                div { class: "mode-picker", role: "radiogroup",
                    for mode in Mode::ALL {
                        label { class: if mode == current { "mode-option selected" } else { "mode-option" },
                            input {
                                r#type: "radio",
                                name: "mode",
                                value: "{mode.as_str()}",
                                checked: mode == current,
                                onchange: move |_| {
                                    selected.set(mode);
                                    board_mode.set(mode);
                                },
                            }
                            span { "{mode.label()}" }
                        }
                    }
                }
                p { class: "best-score",
                    "High score: "
                    span { id: "high-score", "{best_label}" }
                }
                div { class: "start-actions",
                    button {
                        class: "btn btn-primary",
                        id: "start-game",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Play { mode: selected() });
                        },
                        "Start"
                    }
                    label { class: "sound-toggle",
                        input {
                            r#type: "checkbox",
                            checked: sound_on,
                            onchange: move |_| {
                                let on = sound.write().toggle();
                                log::debug!("sound {}", if on { "on" } else { "off" });
                            },
                        }
                        span { if sound_on { "Sound on" } else { "Sound off" } }
                    }
                }
            }

            section { class: "panel leaderboard-panel",
                h3 { "Leaderboard" }
                div { class: "tabs", role: "tablist",
                    for mode in Mode::ALL {
                        button {
                            class: if mode == shown_board { "tab active" } else { "tab" },
                            r#type: "button",
                            role: "tab",
                            onclick: move |_| board_mode.set(mode),
                            "{mode.label()}"
                        }
                    }
                }
                match board_state {
                    ViewState::Ready(rows) => rsx! { LeaderboardList { rows } },
                    ViewState::Error(err) => rsx! { p { class: "muted", "{err.message()}" } },
                    ViewState::Idle | ViewState::Loading => rsx! { p { class: "muted", "Loading..." } },
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| confirm.set(Some(ClearTarget::Leaderboards)),
                    "Clear leaderboards"
                }
            }

            section { class: "panel history-panel",
                h3 { "Recent games" }
                match history_state {
                    ViewState::Ready(rows) => rsx! { HistoryList { rows } },
                    ViewState::Error(err) => rsx! { p { class: "muted", "{err.message()}" } },
                    ViewState::Idle | ViewState::Loading => rsx! { p { class: "muted", "Loading..." } },
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| confirm.set(Some(ClearTarget::History)),
                    "Clear history"
                }
            }

            if let Some(err) = action_error() {
                p { class: "notice", "{err.message()}" }
            }

            if let Some(target) = confirm() {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "alertdialog", aria_modal: "true",
                        p { "{target.prompt()}" }
                        div { class: "modal__actions",
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: move |_| run_clear.call(target),
                                "Delete"
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| confirm.set(None),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn LeaderboardList(rows: Vec<LeaderboardRowVm>) -> Element {
    if rows.is_empty() {
        return rsx! { p { class: "muted", "No scores yet." } };
    }
    rsx! {
        ol { class: "leaderboard",
            for row in rows {
                li { key: "{row.rank}",
                    span { class: "leaderboard__name", "{row.name}" }
                    span { class: "leaderboard__score", "{row.score}" }
                }
            }
        }
    }
}

#[component]
fn HistoryList(rows: Vec<HistoryRowVm>) -> Element {
    if rows.is_empty() {
        return rsx! { p { class: "muted", "No games yet." } };
    }
    rsx! {
        ul { class: "history",
            for (idx, row) in rows.into_iter().enumerate() {
                li { key: "{idx}",
                    "{row.completed_at_str} - {row.mode_label} - {row.score_label}"
                }
            }
        }
    }
}
