//! Read-only detail view for one video record.

use api::VideoInfo;
use dioxus::prelude::*;
use ui::RequireAuth;

use crate::Route;

#[component]
pub fn VideoDetail(id: String) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut video = use_signal(|| Option::<VideoInfo>::None);
    let mut loaded = use_signal(|| false);
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

    rsx! {
        RequireAuth {
            div {
                class: "page-center",
                if !loaded() {
                    p { class: "muted", "Loading video details..." }
                } else if let Some(video) = video() {
                    div {
                        class: "card detail-card",
                        h1 { "{video.title}" }
                        p { class: "muted", "Details for your generated video." }

                        section {
                            h3 { "Description" }
                            p {
                                {video.description.as_deref().unwrap_or("No description provided.")}
                            }
                        }

                        section {
                            h3 { "Platforms" }
                            div {
                                class: "badges",
                                for platform in &video.platforms {
                                    span { class: "badge", "{platform.label()}" }
                                }
                            }
                        }

                        section {
                            h3 { "Generated On" }
                            p { "{video.created_date()}" }
                        }

                        if let Some(updated) = &video.updated_at {
                            section {
                                h3 { "Last Updated" }
                                p { {updated.split('T').next().unwrap_or(updated.as_str())} }
                            }
                        }

                        div {
                            class: "detail-actions",
                            button {
                                class: "primary",
                                onclick: {
                                    let id = video.id.clone();
                                    move |_| { nav.push(Route::EditVideo { id: id.clone() }); }
                                },
                                "Edit"
                            }
                            button {
                                class: "secondary",
                                onclick: move |_| { nav.push(Route::MyVideos {}); },
                                "Back to My Videos"
                            }
                        }
                    }
                } else {
                    NotFoundCard {}
                }
            }
        }
    }
}

/// Shown when the record does not exist or belongs to someone else.
#[component]
pub fn NotFoundCard() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "card detail-card",
            h1 { "Video Not Found" }
            p {
                class: "muted",
                "The video you are looking for does not exist or you do not have permission to view it."
            }
            button {
                class: "secondary",
                onclick: move |_| { nav.push(Route::MyVideos {}); },
                "Back to My Videos"
            }
        }
    }
}
