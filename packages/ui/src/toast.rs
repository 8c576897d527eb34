//! Transient notifications, delivered through a signal context.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    }

    /// Remove a toast by id. Removing an already-dismissed id is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast and schedule its auto-dismissal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = toasts.write().push(level, message);

    let mut toasts = *toasts;
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(std::time::Duration::from_secs(4)).await;

        toasts.write().dismiss(id);
    });
}

/// Provider component; wrap the app so views can call [`use_toasts`].
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        Toaster {}
    }
}

/// Fixed-position stack rendering the active toasts.
#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toaster",
            for toast in toasts().entries {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    span { "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Info, "first");
        let b = toasts.push(ToastLevel::Error, "second");
        assert!(b > a);
        assert_eq!(toasts.entries.len(), 2);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut toasts = Toasts::default();
        let id = toasts.push(ToastLevel::Success, "saved");
        toasts.dismiss(id);
        toasts.dismiss(id);
        assert!(toasts.entries.is_empty());
    }
}
