//! Form-level validation for video drafts.
//!
//! Shared between client and server: views run [`VideoDraft::validate`] before
//! calling a server function, so a bad draft never reaches the network, and the
//! server functions run the same checks again before touching the database.
//! Limits are counted in characters, not bytes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Platform;

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;
/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// A video record as entered in the create/edit form, before it has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDraft {
    pub title: String,
    pub description: Option<String>,
    pub platforms: Vec<Platform>,
}

/// Rejection reasons for a [`VideoDraft`]. Recoverable by correcting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,
    #[error("Title must not exceed 100 characters.")]
    TitleTooLong,
    #[error("Description must not exceed 500 characters.")]
    DescriptionTooLong,
    #[error("Select at least one platform.")]
    PlatformsRequired,
}

/// Check a title field.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

/// Check a description field. An absent description is always valid.
pub fn validate_description(description: Option<&str>) -> Result<(), ValidationError> {
    if let Some(text) = description {
        if text.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooLong);
        }
    }
    Ok(())
}

/// Check a platform selection.
pub fn validate_platforms(platforms: &[Platform]) -> Result<(), ValidationError> {
    if platforms.is_empty() {
        return Err(ValidationError::PlatformsRequired);
    }
    Ok(())
}

impl VideoDraft {
    /// Validate the whole draft, reporting the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_description(self.description.as_deref())?;
        validate_platforms(&self.platforms)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: Option<&str>, platforms: &[Platform]) -> VideoDraft {
        VideoDraft {
            title: title.to_string(),
            description: description.map(str::to_string),
            platforms: platforms.to_vec(),
        }
    }

    #[test]
    fn accepts_a_minimal_draft() {
        let d = draft("Launch teaser", None, &[Platform::Youtube]);
        assert_eq!(d.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_title() {
        let d = draft("", None, &[Platform::Youtube]);
        assert_eq!(d.validate(), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn rejects_whitespace_only_title() {
        let d = draft("   ", None, &[Platform::Youtube]);
        assert_eq!(d.validate(), Err(ValidationError::TitleRequired));
    }

    #[test]
    fn title_limit_is_one_hundred_characters() {
        let exactly = "x".repeat(100);
        let over = "x".repeat(101);
        assert_eq!(draft(&exactly, None, &[Platform::Tiktok]).validate(), Ok(()));
        assert_eq!(
            draft(&over, None, &[Platform::Tiktok]).validate(),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        // 100 two-byte characters is within the limit.
        let title = "é".repeat(100);
        assert_eq!(draft(&title, None, &[Platform::Youtube]).validate(), Ok(()));
    }

    #[test]
    fn description_limit_is_five_hundred_characters() {
        let exactly = "d".repeat(500);
        let over = "d".repeat(501);
        assert_eq!(
            draft("t", Some(&exactly), &[Platform::Facebook]).validate(),
            Ok(())
        );
        assert_eq!(
            draft("t", Some(&over), &[Platform::Facebook]).validate(),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn rejects_empty_platform_set_even_with_valid_title() {
        let d = draft("A valid title", Some("and description"), &[]);
        assert_eq!(d.validate(), Err(ValidationError::PlatformsRequired));
    }
}
