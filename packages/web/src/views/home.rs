//! Landing page with session-conditioned calls to action.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        div {
            class: "page-center hero",
            h1 { "Welcome to ClipForge" }
            p {
                class: "hero-tagline",
                "Generate new videos and post them to different social media platforms."
            }

            if auth().user.is_some() {
                div {
                    class: "hero-actions",
                    button {
                        class: "primary",
                        onclick: move |_| { nav.push(Route::GenerateVideo {}); },
                        "Generate a New Video"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| { nav.push(Route::MyVideos {}); },
                        "View My Videos"
                    }
                }
            } else if !auth().loading {
                p {
                    button {
                        class: "primary",
                        onclick: move |_| { nav.push(Route::AuthPage {}); },
                        "Sign in or Sign up"
                    }
                    " to start generating videos!"
                }
            }
        }
    }
}
