//! Route protection for authenticated views.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};

/// Outcome of guarding a protected view against the current session.
///
/// A tagged variant rather than nested booleans, so the decision is total:
/// exactly one of a loading placeholder, a redirect to the auth entry point,
/// or the protected content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Session not yet resolved; show a placeholder.
    Loading,
    /// Session resolved with no user; send to `/auth`.
    RedirectToAuth,
    /// Session resolved with a user; render the view.
    Allow,
}

impl Guard {
    /// Map an [`AuthState`] to a guard outcome.
    pub fn evaluate(auth: &AuthState) -> Self {
        if auth.loading {
            Guard::Loading
        } else if auth.user.is_none() {
            Guard::RedirectToAuth
        } else {
            Guard::Allow
        }
    }
}

/// Wrapper for protected views. Re-evaluates whenever the auth signal changes,
/// so a view that was redirected becomes renderable as soon as the session
/// resolves to a user, without a reload.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();

    match Guard::evaluate(&auth()) {
        Guard::Loading => rsx! {
            div {
                class: "page-center",
                p { class: "muted", "Loading authentication..." }
            }
        },
        Guard::RedirectToAuth => {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/auth");
                }
            }
            rsx! {
                div {
                    class: "page-center",
                    p { class: "muted", "Redirecting to sign in..." }
                }
            }
        }
        Guard::Allow => rsx! {
            {children}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserInfo;

    fn someone() -> UserInfo {
        UserInfo {
            id: "2c0f5a76-3c86-4a1f-9d27-0d9b3a6f7c11".to_string(),
            email: "creator@example.com".to_string(),
            name: Some("Creator".to_string()),
            avatar_url: None,
            provider: "local".to_string(),
        }
    }

    #[test]
    fn unresolved_session_is_loading() {
        assert_eq!(Guard::evaluate(&AuthState::default()), Guard::Loading);
    }

    #[test]
    fn resolved_absent_redirects_never_renders_content() {
        assert_eq!(
            Guard::evaluate(&AuthState::resolved(None)),
            Guard::RedirectToAuth
        );
    }

    #[test]
    fn resolved_present_allows() {
        assert_eq!(
            Guard::evaluate(&AuthState::resolved(Some(someone()))),
            Guard::Allow
        );
    }

    #[test]
    fn anonymous_to_authenticated_transition_flips_the_outcome() {
        let mut state = AuthState::resolved(None);
        assert_eq!(Guard::evaluate(&state), Guard::RedirectToAuth);

        state.user = Some(someone());
        assert_eq!(Guard::evaluate(&state), Guard::Allow);
    }
}
