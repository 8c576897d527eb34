//! Light/dark theme: context signal, storage persistence, toggle button.
//!
//! `None` means the system default; `Some("light")`/`Some("dark")` force a
//! theme via a `data-theme` attribute on the document element.

use dioxus::prelude::*;

pub type ThemeSignal = Signal<Option<String>>;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "clipforge-theme";

/// Read the persisted theme choice (browser localStorage) into the signal and
/// apply it. No-op off wasm.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        if let Some(value) = stored {
            apply_theme(Some(&value));
            theme.set(Some(value));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Set or clear the `data-theme` attribute on `<html>`.
pub fn apply_theme(value: Option<&str>) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            match value {
                Some(v) => {
                    let _ = root.set_attribute("data-theme", v);
                }
                None => {
                    let _ = root.remove_attribute("data-theme");
                }
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = value;
    }
}

fn persist_theme(value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = value;
    }
}

/// Button cycling between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let dark = theme().as_deref() == Some("dark");

    let onclick = move |_| {
        let next = if theme().as_deref() == Some("dark") {
            "light"
        } else {
            "dark"
        };
        apply_theme(Some(next));
        persist_theme(next);
        theme.set(Some(next.to_string()));
    };

    rsx! {
        button {
            class: "theme-toggle",
            title: if dark { "Switch to light theme" } else { "Switch to dark theme" },
            onclick: onclick,
            if dark { "Light" } else { "Dark" }
        }
    }
}
