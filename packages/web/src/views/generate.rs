//! Create a new video record.

use api::VideoDraft;
use dioxus::prelude::*;
use ui::{push_toast, use_toasts, RequireAuth, ToastLevel, VideoForm};

use crate::Route;

#[component]
pub fn GenerateVideo() -> Element {
    let mut toasts = use_toasts();
    let nav = use_navigator();
    let mut submitting = use_signal(|| false);

    // Receives an already-validated draft from the form.
    let handle_submit = move |draft: VideoDraft| {
        spawn(async move {
            submitting.set(true);
            push_toast(&mut toasts, ToastLevel::Info, "Generating your video...");

            // Stand-in for the render pipeline kicking off
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;

            match api::create_video(draft.title, draft.description, draft.platforms).await {
                Ok(video) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Video generated and saved successfully!",
                    );
                    nav.push(Route::VideoDetail { id: video.id });
                }
                Err(e) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &format!("Failed to generate video: {e}"),
                    );
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        RequireAuth {
            div {
                class: "page-center",
                div {
                    class: "card form-card",
                    h1 { "Generate New Video" }
                    p { class: "muted", "Fill in the details to generate your next viral video." }

                    VideoForm {
                        initial: None::<api::VideoInfo>,
                        submit_label: "Generate Video",
                        busy_label: "Generating...",
                        busy: submitting(),
                        on_submit: handle_submit,
                    }
                }
            }
        }
    }
}
