use dioxus::prelude::*;
use dioxus_router::Router;
use quiz_core::model::Mode;
use quiz_core::sound::SoundSettings;

use crate::context::AppContext;
use crate::routes::Route;

/// Menu selection, kept across games.
#[derive(Clone, Copy)]
pub struct SelectedMode(pub Signal<Mode>);

/// Mute switch shared by the menu and the game screen.
#[derive(Clone, Copy)]
pub struct SoundState(pub Signal<SoundSettings>);

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let initial_mode = ctx.initial_mode();
    let sound_enabled = ctx.sound_enabled();
    use_context_provider(|| SelectedMode(Signal::new(initial_mode)));
    use_context_provider(|| SoundState(Signal::new(SoundSettings::new(sound_enabled))));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Math Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
