//! Data models for the application.

mod user;
mod video;

#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;

#[cfg(feature = "server")]
pub use video::VideoRecord;
pub use video::{Platform, VideoInfo};
