//! Authentication: OAuth providers and local email+password accounts.

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod oauth;
#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use config::OAuthConfig;
#[cfg(feature = "server")]
pub use oauth::{OAuthFlow, OAuthProvider};
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::SESSION_USER_ID_KEY;
