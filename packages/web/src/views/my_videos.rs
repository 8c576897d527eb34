//! List of the current user's videos with a platform filter and delete action.

use api::{Platform, VideoInfo};
use dioxus::prelude::*;
use ui::{push_toast, use_toasts, RequireAuth, ToastLevel};

use crate::Route;

#[component]
pub fn MyVideos() -> Element {
    let mut videos = use_signal(Vec::<VideoInfo>::new);
    let mut loaded = use_signal(|| false);
    let mut filter = use_signal(|| Option::<Platform>::None);
    let mut pending_delete = use_signal(|| Option::<VideoInfo>::None);
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        match api::list_videos().await {
            Ok(list) => videos.set(list),
            Err(e) => push_toast(
                &mut toasts,
                ToastLevel::Error,
                &format!("Failed to load videos: {e}"),
            ),
        }
        loaded.set(true);
    });

    let handle_confirm_delete = move |_| {
        let Some(video) = pending_delete() else {
            return;
        };
        spawn(async move {
            match api::delete_video(video.id.clone()).await {
                Ok(true) => {
                    videos.write().retain(|v| v.id != video.id);
                    push_toast(&mut toasts, ToastLevel::Success, "Video deleted.");
                }
                Ok(false) => {
                    // Already gone on the server; drop the stale entry
                    videos.write().retain(|v| v.id != video.id);
                    push_toast(&mut toasts, ToastLevel::Info, "Video was already deleted.");
                }
                Err(e) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &format!("Failed to delete video: {e}"),
                    );
                }
            }
            pending_delete.set(None);
        });
    };

    let visible: Vec<VideoInfo> = videos()
        .into_iter()
        .filter(|v| filter().map_or(true, |p| v.platforms.contains(&p)))
        .collect();

    rsx! {
        RequireAuth {
            div {
                class: "page-wide",
                div {
                    class: "card list-card",
                    h1 { "My Videos" }
                    p { class: "muted", "View and manage your generated videos." }

                    if !loaded() {
                        p { class: "muted", "Loading videos..." }
                    } else if videos().is_empty() {
                        div {
                            class: "empty-state",
                            p { "You haven't generated any videos yet." }
                            button {
                                class: "primary",
                                onclick: move |_| { nav.push(Route::GenerateVideo {}); },
                                "Generate Your First Video"
                            }
                        }
                    } else {
                        div {
                            class: "filter-bar",
                            button {
                                class: if filter().is_none() { "filter-chip active" } else { "filter-chip" },
                                onclick: move |_| filter.set(None),
                                "All"
                            }
                            for platform in Platform::ALL {
                                button {
                                    key: "{platform}",
                                    class: if filter() == Some(platform) { "filter-chip active" } else { "filter-chip" },
                                    onclick: move |_| filter.set(Some(platform)),
                                    "{platform.label()}"
                                }
                            }
                        }

                        if visible.is_empty() {
                            p { class: "muted", "No videos target that platform." }
                        }

                        div {
                            class: "videos-grid",
                            for video in visible {
                                VideoCard {
                                    key: "{video.id}",
                                    video: video.clone(),
                                    on_delete: move |v| pending_delete.set(Some(v)),
                                }
                            }
                        }
                    }
                }
            }

            if let Some(video) = pending_delete() {
                div {
                    class: "modal-overlay",
                    div {
                        class: "modal-body",
                        h2 { "Delete Video" }
                        p {
                            "Delete "
                            strong { "{video.title}" }
                            "? This cannot be undone."
                        }
                        div {
                            class: "modal-actions",
                            button {
                                class: "destructive",
                                onclick: handle_confirm_delete,
                                "Delete"
                            }
                            button {
                                class: "secondary",
                                onclick: move |_| pending_delete.set(None),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VideoCard(video: VideoInfo, on_delete: EventHandler<VideoInfo>) -> Element {
    let nav = use_navigator();
    let detail_id = video.id.clone();
    let edit_id = video.id.clone();
    let deleted = video.clone();

    rsx! {
        div {
            class: "video-card",
            h3 { "{video.title}" }
            if let Some(description) = &video.description {
                p { class: "video-card-description", "{description}" }
            }
            div {
                class: "badges",
                for platform in &video.platforms {
                    span { class: "badge", "{platform.label()}" }
                }
            }
            p { class: "muted small", "Created {video.created_date()}" }
            div {
                class: "video-card-actions",
                button {
                    class: "secondary",
                    onclick: move |_| { nav.push(Route::VideoDetail { id: detail_id.clone() }); },
                    "View"
                }
                button {
                    class: "secondary",
                    onclick: move |_| { nav.push(Route::EditVideo { id: edit_id.clone() }); },
                    "Edit"
                }
                button {
                    class: "destructive",
                    onclick: move |_| on_delete.call(deleted.clone()),
                    "Delete"
                }
            }
        }
    }
}
