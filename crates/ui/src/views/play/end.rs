use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{Mode, PLAYER_NAME_MAX_CHARS};
use services::RecordsService;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::home::LeaderboardList;
use crate::vm::{EndSummaryVm, map_leaderboard_rows};

#[component]
pub(super) fn EndScreen(
    summary: EndSummaryVm,
    mode: Mode,
    board_version: Signal<u32>,
    on_play_again: Callback<()>,
    on_menu: Callback<()>,
) -> Element {
    rsx! {
        section { class: "end-screen",
            h2 { "Game over" }
            div { class: "end-screen__score",
                span { class: "end-screen__final", "{summary.score}" }
                span { class: "end-screen__max", " / {summary.max_score}" }
                span { class: "end-screen__pct", " ({summary.percentage_label})" }
            }
            p { class: "end-screen__message", "{summary.message}" }
            if summary.improved_high_score {
                p { class: "end-screen__badge", "New high score!" }
            }
            dl { class: "end-screen__facts",
                dt { "Mode" }
                dd { "{summary.mode_label}" }
                dt { "Best score" }
                dd { "{summary.best_label}" }
            }
            h3 { "Leaderboard: {summary.mode_label}" }
            EndLeaderboard { mode, board_version }
            div { class: "end-screen__actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_play_again.call(()),
                    "Play again"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_menu.call(()),
                    "Menu"
                }
            }
        }
    }
}

/// Reloads whenever `board_version` changes, e.g. after a name was saved.
#[component]
fn EndLeaderboard(mode: Mode, board_version: Signal<u32>) -> Element {
    let records: Arc<RecordsService> = use_context::<AppContext>().records();
    let resource = use_resource(move || {
        let records = Arc::clone(&records);
        let _version = board_version();
        async move {
            let board = records.leaderboard(mode).await?;
            Ok::<_, ViewError>(map_leaderboard_rows(&board))
        }
    });

    match resource.value().read().as_ref() {
        Some(Ok(rows)) => rsx! { LeaderboardList { rows: rows.clone() } },
        Some(Err(err)) => rsx! { p { class: "muted", "{err.message()}" } },
        None => rsx! { p { class: "muted", "Loading..." } },
    }
}

#[component]
pub(super) fn NameModal(mode_label: &'static str, on_save: Callback<String>, on_skip: Callback<()>) -> Element {
    let mut name = use_signal(String::new);

    rsx! {
        div { class: "modal-backdrop",
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "name-modal-title",
                h3 { id: "name-modal-title", "You made the {mode_label} leaderboard!" }
                p { "Enter a name (up to {PLAYER_NAME_MAX_CHARS} characters)." }
                input {
                    id: "player-name",
                    r#type: "text",
                    maxlength: "{PLAYER_NAME_MAX_CHARS}",
                    autofocus: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            on_save.call(name());
                        }
                    },
                }
                div { class: "modal__actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_save.call(name()),
                        "Save"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_skip.call(()),
                        "Skip"
                    }
                }
            }
        }
    }
}
