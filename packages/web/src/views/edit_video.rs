//! Edit an existing video record.

use api::{VideoDraft, VideoInfo};
use dioxus::prelude::*;
use ui::{push_toast, use_toasts, RequireAuth, ToastLevel, VideoForm};

use super::video_detail::NotFoundCard;
use crate::Route;

#[component]
pub fn EditVideo(id: String) -> Element {
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut video = use_signal(|| Option::<VideoInfo>::None);
    let mut loaded = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            loaded.set(false);
            match api::get_video(id).await {
                Ok(found) => video.set(found),
                Err(_) => video.set(None),
            }
            loaded.set(true);
        }
    });

    let handle_submit = move |draft: VideoDraft| {
        let id = id_signal();
        spawn(async move {
            submitting.set(true);

            // All fields come from the form; a blank description clears it.
            let result = api::update_video(
                id.clone(),
                Some(draft.title),
                Some(draft.description.unwrap_or_default()),
                Some(draft.platforms),
            )
            .await;

            match result {
                Ok(Some(_)) => {
                    push_toast(&mut toasts, ToastLevel::Success, "Video updated successfully!");
                    nav.push(Route::VideoDetail { id });
                }
                Ok(None) => {
                    push_toast(&mut toasts, ToastLevel::Error, "Video not found.");
                    video.set(None);
                    submitting.set(false);
                }
                Err(e) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &format!("Failed to update video: {e}"),
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
                if !loaded() {
                    p { class: "muted", "Loading video details..." }
                } else if let Some(video) = video() {
                    div {
                        class: "card form-card",
                        h1 { "Edit Video: {video.title}" }
                        p { class: "muted", "Modify the details of your video." }

                        VideoForm {
                            initial: Some(video.clone()),
                            submit_label: "Save Changes",
                            busy_label: "Saving...",
                            busy: submitting(),
                            on_submit: handle_submit,
                        }

                        button {
                            class: "secondary",
                            disabled: submitting(),
                            onclick: {
                                let id = video.id.clone();
                                move |_| { nav.push(Route::VideoDetail { id: id.clone() }); }
                            },
                            "Cancel"
                        }
                    }
                } else {
                    NotFoundCard {}
                }
            }
        }
    }
}
