//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, OAuthButton, SignOutButton};

mod guard;
pub use guard::{Guard, RequireAuth};

mod navbar;
pub use navbar::Navbar;

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toaster, Toasts};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, ThemeSignal, ThemeToggle};

mod video_form;
pub use video_form::VideoForm;
