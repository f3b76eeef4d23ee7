use dioxus::prelude::*;
use quiz_core::model::Difficulty;
use services::{FeedbackKind, PresentedQuestion, Resolution};

use crate::vm::ChoiceState;

use super::driver::ToastVm;

#[component]
pub(super) fn Scoreboard(progress: String, score: u32, timer: String, low: bool) -> Element {
    rsx! {
        div { class: "scoreboard",
            span { class: "scoreboard__progress", "{progress}" }
            span { class: "scoreboard__score", "Score: {score}" }
            span {
                class: if low { "scoreboard__timer scoreboard__timer--low" } else { "scoreboard__timer" },
                id: "game-timer",
                "{timer}"
            }
        }
    }
}

#[component]
pub(super) fn QuestionCard(
    question: PresentedQuestion,
    choice_states: Vec<ChoiceState>,
    on_choice: Callback<String>,
) -> Element {
    rsx! {
        div { class: "question-card fade-in",
            div { class: "question-card__meta",
                span { "Question {question.number}" }
                DifficultyBadge { difficulty: question.difficulty }
            }
            p { class: "question-card__text", "{question.text}" }
            div { class: "choices",
                for (choice, state) in question.choices.iter().cloned().zip(choice_states) {
                    button {
                        class: state.class(),
                        r#type: "button",
                        disabled: state != ChoiceState::Open,
                        onclick: {
                            let choice = choice.clone();
                            move |_| on_choice.call(choice.clone())
                        },
                        span { class: "choice-label", "{choice}" }
                    }
                }
            }
        }
    }
}

#[component]
fn DifficultyBadge(difficulty: Difficulty) -> Element {
    let class = format!("badge badge--{}", difficulty.as_str());
    let label = difficulty.label();
    rsx! {
        span { class, "{label}" }
    }
}

#[component]
pub(super) fn FeedbackPanel(resolution: Resolution) -> Element {
    let class = match resolution.kind {
        FeedbackKind::Correct => "feedback feedback--correct",
        FeedbackKind::Wrong => "feedback feedback--wrong",
        FeedbackKind::Timeout => "feedback feedback--timeout",
    };
    rsx! {
        div { class, role: "status",
            p { class: "feedback__headline", "{resolution.headline}" }
            if resolution.kind != FeedbackKind::Correct {
                p { class: "feedback__answer", "Correct answer: {resolution.correct_choice}" }
            }
            p { class: "feedback__explanation", "{resolution.explanation}" }
        }
    }
}

#[component]
pub(super) fn Toast(toast: ToastVm) -> Element {
    rsx! {
        div {
            class: if toast.success { "toast toast--success" } else { "toast toast--error" },
            role: "status",
            "{toast.text}"
        }
    }
}
