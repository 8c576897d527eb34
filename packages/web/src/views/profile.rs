//! Account information for the signed-in user.

use dioxus::prelude::*;
use ui::{use_auth, RequireAuth};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        RequireAuth {
            div {
                class: "page-center",
                div {
                    class: "card auth-card",
                    h1 { "User Profile" }
                    p { class: "muted", "Your account information." }

                    if let Some(user) = auth().user {
                        div {
                            class: "profile-rows",
                            div {
                                class: "profile-row",
                                span { class: "profile-label", "Name" }
                                span { "{user.display_name()}" }
                            }
                            div {
                                class: "profile-row",
                                span { class: "profile-label", "Email" }
                                span { "{user.email}" }
                            }
                            div {
                                class: "profile-row",
                                span { class: "profile-label", "Signed in with" }
                                span { "{user.provider}" }
                            }
                        }
                    }

                    button {
                        class: "secondary",
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "Back to Home"
                    }
                }
            }
        }
    }
}
