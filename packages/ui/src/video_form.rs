//! The create/edit form for a video record.
//!
//! Owns the field state and runs draft validation on submit; a draft that fails
//! never reaches the caller, so no network call is made for it. The parent owns
//! submission (the `busy` flag) and receives a validated [`VideoDraft`].

use api::{Platform, VideoDraft, VideoInfo};
use dioxus::prelude::*;

#[component]
pub fn VideoForm(
    /// Existing record to seed the fields from; `None` for the create form.
    initial: Option<VideoInfo>,
    submit_label: String,
    busy_label: String,
    busy: bool,
    on_submit: EventHandler<VideoDraft>,
) -> Element {
    let mut title = use_signal(|| {
        initial
            .as_ref()
            .map(|v| v.title.clone())
            .unwrap_or_default()
    });
    let mut description = use_signal(|| {
        initial
            .as_ref()
            .and_then(|v| v.description.clone())
            .unwrap_or_default()
    });
    let mut platforms = use_signal(|| {
        initial
            .as_ref()
            .map(|v| v.platforms.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let text = description().trim().to_string();
        let draft = VideoDraft {
            title: title().trim().to_string(),
            description: if text.is_empty() { None } else { Some(text) },
            platforms: platforms(),
        };

        if let Err(e) = draft.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        on_submit.call(draft);
    };

    rsx! {
        form {
            class: "video-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "form-field",
                label { r#for: "video-title", "Video Title" }
                input {
                    id: "video-title",
                    r#type: "text",
                    placeholder: "My Awesome Video",
                    value: title(),
                    disabled: busy,
                    oninput: move |evt| title.set(evt.value()),
                }
                p { class: "form-hint", "A catchy title for your video." }
            }

            div {
                class: "form-field",
                label { r#for: "video-description", "Description" }
                textarea {
                    id: "video-description",
                    placeholder: "Tell us a little bit about your video",
                    value: description(),
                    disabled: busy,
                    oninput: move |evt| description.set(evt.value()),
                }
                p { class: "form-hint", "A brief description of your video content." }
            }

            div {
                class: "form-field",
                span { class: "form-label", "Target Platforms" }
                p { class: "form-hint", "Select the social media platforms you want to target." }
                for platform in Platform::ALL {
                    label {
                        key: "{platform}",
                        class: "platform-option",
                        input {
                            r#type: "checkbox",
                            checked: platforms().contains(&platform),
                            disabled: busy,
                            onchange: move |evt| {
                                let mut selected = platforms();
                                if evt.checked() {
                                    if !selected.contains(&platform) {
                                        selected.push(platform);
                                    }
                                } else {
                                    selected.retain(|p| *p != platform);
                                }
                                platforms.set(selected);
                            },
                        }
                        "{platform.label()}"
                    }
                }
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: busy,
                if busy { "{busy_label}" } else { "{submit_label}" }
            }
        }
    }
}
