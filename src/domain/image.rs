//! Image domain model.
//!
//! This module defines the [`Image`] type, one photo returned by a search.
//! Images are immutable once received and owned by the search session's result
//! list for the lifetime of that session.

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Number of seconds in one (30 day) month.
const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;

/// Number of seconds in one (365 day) year.
const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// A single photo from the search results.
///
/// # Fields
///
/// - `id`: Photo identifier assigned by the API
/// - `preview_url`: Small rendition shown in the gallery
/// - `full_url`: Regular rendition shown in the detail view
/// - `alt_text`: Alternate text, empty when the API has none
/// - `author_name`: Display name of the photographer
/// - `author_username`: Handle of the photographer
/// - `likes`: Like count at the time of the search
/// - `description`: Long description, empty when the API has none
/// - `created_at`: Upload timestamp (RFC 3339) if reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: String,
    pub preview_url: String,
    pub full_url: String,
    pub alt_text: String,
    pub author_name: String,
    pub author_username: String,
    pub likes: u32,
    pub description: String,
    pub created_at: Option<String>,
}

impl Image {
    /// Creates an image with the given identifier and alt text.
    ///
    /// Remaining fields are left empty. Mostly useful for tests and fixtures;
    /// real images come from [`crate::api::decode_search_page`].
    ///
    /// # Examples
    ///
    /// ```
    /// use photoseek::Image;
    ///
    /// let image = Image::new("abc", "a cat on a sofa");
    /// assert_eq!(image.id, "abc");
    /// assert_eq!(image.likes, 0);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            preview_url: String::new(),
            full_url: String::new(),
            alt_text: alt_text.into(),
            author_name: String::new(),
            author_username: String::new(),
            likes: 0,
            description: String::new(),
            created_at: None,
        }
    }

    /// Returns the text used as the image caption in the gallery.
    ///
    /// Falls back to the description, then to the identifier, so that a row
    /// is never blank.
    #[must_use]
    pub fn caption(&self) -> &str {
        if !self.alt_text.is_empty() {
            &self.alt_text
        } else if !self.description.is_empty() {
            &self.description
        } else {
            &self.id
        }
    }

    /// Returns a human-readable string describing how long ago the photo was uploaded.
    ///
    /// Returns `None` if the API did not report an upload time or the timestamp
    /// does not parse as RFC 3339.
    ///
    /// # Examples
    ///
    /// ```
    /// use photoseek::Image;
    ///
    /// let mut image = Image::new("abc", "sunset");
    /// assert_eq!(image.uploaded_ago(), None);
    ///
    /// image.created_at = Some(chrono::Utc::now().to_rfc3339());
    /// assert_eq!(image.uploaded_ago().as_deref(), Some("just now"));
    /// ```
    #[must_use]
    pub fn uploaded_ago(&self) -> Option<String> {
        let created = self.created_at.as_deref()?;
        let created = chrono::DateTime::parse_from_rfc3339(created).ok()?;
        let diff = chrono::Utc::now().timestamp() - created.timestamp();
        Some(format_age(diff))
    }
}

/// Formats an age in seconds with the coarsest fitting unit.
fn format_age(diff: i64) -> String {
    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else if diff < SECONDS_PER_MONTH {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    } else if diff < SECONDS_PER_YEAR {
        format!("{}mo ago", diff / SECONDS_PER_MONTH)
    } else {
        format!("{}y ago", diff / SECONDS_PER_YEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_prefers_alt_text_then_description_then_id() {
        let mut image = Image::new("id-1", "");
        assert_eq!(image.caption(), "id-1");

        image.description = "long description".to_string();
        assert_eq!(image.caption(), "long description");

        image.alt_text = "alt".to_string();
        assert_eq!(image.caption(), "alt");
    }

    #[test]
    fn format_age_picks_units() {
        assert_eq!(format_age(5), "just now");
        assert_eq!(format_age(5 * SECONDS_PER_MINUTE), "5m ago");
        assert_eq!(format_age(3 * SECONDS_PER_HOUR), "3h ago");
        assert_eq!(format_age(7 * SECONDS_PER_DAY), "7d ago");
        assert_eq!(format_age(2 * SECONDS_PER_MONTH), "2mo ago");
        assert_eq!(format_age(3 * SECONDS_PER_YEAR), "3y ago");
    }

    #[test]
    fn uploaded_ago_ignores_garbage_timestamps() {
        let mut image = Image::new("x", "y");
        image.created_at = Some("yesterday-ish".to_string());
        assert_eq!(image.uploaded_ago(), None);
    }
}
