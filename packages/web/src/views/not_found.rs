//! Catch-all route.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");

    rsx! {
        div {
            class: "page-center",
            div {
                class: "card",
                h1 { "404" }
                p { class: "muted", "Oops! Page not found: /{path}" }
                button {
                    class: "primary",
                    onclick: move |_| { nav.push(Route::Home {}); },
                    "Return to Home"
                }
            }
        }
    }
}
