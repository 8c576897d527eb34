//! Auth entry point: one card toggling between sign-in and sign-up,
//! with OAuth buttons underneath.

use dioxus::prelude::*;
use ui::{push_toast, use_auth, use_toasts, AuthState, OAuthButton, ToastLevel};

use crate::Route;

#[component]
pub fn AuthPage() -> Element {
    let mut auth = use_auth();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut is_sign_in = use_signal(|| true);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: nothing to do here
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            if is_sign_in() {
                loading.set(true);
                match api::login_password(e, p).await {
                    Ok(user) => {
                        auth.set(AuthState::resolved(Some(user)));
                        push_toast(&mut toasts, ToastLevel::Success, "Signed in successfully!");
                        nav.push(Route::Home {});
                    }
                    Err(e) => {
                        loading.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            } else {
                let n = name().trim().to_string();
                if n.is_empty() {
                    error.set(Some("Name is required".to_string()));
                    return;
                }
                if p.len() < 8 {
                    error.set(Some("Password must be at least 8 characters".to_string()));
                    return;
                }
                if p != confirm_password() {
                    error.set(Some("Passwords do not match".to_string()));
                    return;
                }

                loading.set(true);
                match api::register(e, p, n).await {
                    Ok(user) => {
                        auth.set(AuthState::resolved(Some(user)));
                        push_toast(&mut toasts, ToastLevel::Success, "Signed up successfully!");
                        nav.push(Route::Home {});
                    }
                    Err(e) => {
                        loading.set(false);
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "page-center",
            div {
                class: "card auth-card",
                h1 { if is_sign_in() { "Sign In" } else { "Sign Up" } }
                p {
                    class: "muted",
                    if is_sign_in() {
                        "Welcome back! Please sign in to continue."
                    } else {
                        "Create an account to get started."
                    }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    if !is_sign_in() {
                        div {
                            class: "form-field",
                            label { r#for: "auth-name", "Name" }
                            input {
                                id: "auth-name",
                                r#type: "text",
                                placeholder: "Your name",
                                value: name(),
                                disabled: loading(),
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "auth-email", "Email" }
                        input {
                            id: "auth-email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            disabled: loading(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { r#for: "auth-password", "Password" }
                        input {
                            id: "auth-password",
                            r#type: "password",
                            placeholder: "••••••••",
                            value: password(),
                            disabled: loading(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    if !is_sign_in() {
                        div {
                            class: "form-field",
                            label { r#for: "auth-confirm", "Confirm password" }
                            input {
                                id: "auth-confirm",
                                r#type: "password",
                                placeholder: "••••••••",
                                value: confirm_password(),
                                disabled: loading(),
                                oninput: move |evt| confirm_password.set(evt.value()),
                            }
                        }
                    }

                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Loading..."
                        } else if is_sign_in() {
                            "Sign In"
                        } else {
                            "Sign Up"
                        }
                    }
                }

                div {
                    class: "auth-divider",
                    span { "or continue with" }
                }

                div {
                    class: "oauth-buttons",
                    OAuthButton {
                        provider: "github",
                        label: "Continue with GitHub",
                        class: "oauth-btn github-btn",
                    }
                    OAuthButton {
                        provider: "google",
                        label: "Continue with Google",
                        class: "oauth-btn google-btn",
                    }
                }

                p {
                    class: "auth-toggle muted",
                    if is_sign_in() { "Don't have an account? " } else { "Already have an account? " }
                    button {
                        class: "link",
                        disabled: loading(),
                        onclick: move |_| {
                            error.set(None);
                            is_sign_in.set(!is_sign_in());
                        },
                        if is_sign_in() { "Sign Up" } else { "Sign In" }
                    }
                }
            }
        }
    }
}
