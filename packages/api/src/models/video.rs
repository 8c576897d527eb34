//! # Video record models
//!
//! Defines the two representations of a video record:
//!
//! ## [`VideoRecord`] (server only)
//!
//! The complete database row from the `videos` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries and contains every column:
//!
//! - `id` — primary key (`UUID v4`), assigned by the database.
//! - `user_id` — the owning user; every query is scoped by this column.
//! - `title`, `description` — user-entered metadata.
//! - `platforms` — target platform tags stored as `TEXT[]` in their lowercase wire form.
//! - `created_at` / `updated_at` — `updated_at` stays `NULL` until the first edit.
//!
//! The [`VideoRecord::to_info`] method projects this into a [`VideoInfo`].
//!
//! ## [`VideoInfo`]
//!
//! A client-safe projection that is `Serialize + Deserialize + PartialEq` and can cross
//! the server/client boundary via Dioxus server functions. It converts the `Uuid` to a
//! `String` and the timestamps to RFC 3339 strings so it works in WASM, and carries
//! platforms as the typed [`Platform`] enum.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// A target social platform for a video.
///
/// The wire form (serde and database) is the lowercase name; [`Platform::label`]
/// is the human-readable form shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Tiktok,
    Instagram,
    Facebook,
    Twitter,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 5] = [
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
    ];

    /// Lowercase wire form, matching the `videos.platforms` column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
        }
    }

    /// Display name shown next to checkboxes and badges.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "X (formerly Twitter)",
        }
    }

    /// Parse a lowercase wire form. Anything outside the fixed set is rejected.
    pub fn parse(s: &str) -> Option<Platform> {
        match s {
            "youtube" => Some(Platform::Youtube),
            "tiktok" => Some(Platform::Tiktok),
            "instagram" => Some(Platform::Instagram),
            "facebook" => Some(Platform::Facebook),
            "twitter" => Some(Platform::Twitter),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full video record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct VideoRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub platforms: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(feature = "server")]
impl VideoRecord {
    /// Convert to VideoInfo for client consumption. Platform tags that fall
    /// outside the fixed enumeration are dropped rather than surfaced.
    pub fn to_info(&self) -> VideoInfo {
        VideoInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            platforms: self
                .platforms
                .iter()
                .filter_map(|p| Platform::parse(p))
                .collect(),
            created_at: self.created_at.to_rfc3339(),
            updated_at: self.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Video record information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub platforms: Vec<Platform>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl VideoInfo {
    /// Calendar date portion of the creation timestamp, for list and detail views.
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_wire_roundtrip() {
        for p in Platform::ALL {
            assert_eq!(Platform::parse(p.as_str()), Some(p));
        }
    }

    #[test]
    fn platform_rejects_unknown() {
        assert_eq!(Platform::parse("myspace"), None);
        assert_eq!(Platform::parse("YouTube"), None);
        assert_eq!(Platform::parse(""), None);
    }

    #[test]
    fn platform_serde_is_lowercase() {
        let json = serde_json::to_string(&Platform::Youtube).unwrap();
        assert_eq!(json, "\"youtube\"");
        let back: Platform = serde_json::from_str("\"tiktok\"").unwrap();
        assert_eq!(back, Platform::Tiktok);
    }

    #[test]
    fn created_date_strips_time() {
        let info = VideoInfo {
            id: "v1".to_string(),
            title: "Launch teaser".to_string(),
            description: None,
            platforms: vec![Platform::Youtube],
            created_at: "2025-03-14T09:26:53+00:00".to_string(),
            updated_at: None,
        };
        assert_eq!(info.created_date(), "2025-03-14");
    }
}
