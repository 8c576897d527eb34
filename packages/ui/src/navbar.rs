//! Top navigation bar, conditioned on session presence.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::theme::ThemeToggle;
use crate::SignOutButton;

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        header {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "ClipForge" }

            if !state.loading {
                nav {
                    class: "navbar-links",
                    a { href: "/", "Home" }
                    if state.user.is_some() {
                        a { href: "/generate-video", "Generate Video" }
                        a { href: "/my-videos", "My Videos" }
                        a { href: "/profile", "Profile" }
                    }
                }
                div {
                    class: "navbar-actions",
                    ThemeToggle {}
                    if state.user.is_some() {
                        SignOutButton { class: "navbar-signout" }
                    } else {
                        a { class: "navbar-signin", href: "/auth", "Sign in / Sign up" }
                    }
                }
            }
        }
    }
}
