use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use quiz_core::model::Mode;

use crate::views::{HomeView, PlayView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/play/:mode", PlayView)] Play { mode: Mode },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "brand", to: Route::Home {}, "Math Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
