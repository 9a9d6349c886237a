//! Wire record types for the Unsplash search endpoint.
//!
//! These types mirror the JSON returned by `GET /search/photos`. They are kept
//! separate from the domain [`Image`] so that API quirks (nullable strings,
//! nested objects) stay at the boundary. Unknown fields are ignored.

use crate::domain::{Image, SearchPage};
use serde::{Deserialize, Serialize};

/// Top-level body of a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponseRecord {
    /// Number of matching photos.
    #[serde(default)]
    pub total: u64,

    /// Number of pages at the requested page size.
    #[serde(default)]
    pub total_pages: u32,

    /// Photos on the requested page.
    #[serde(default)]
    pub results: Vec<PhotoRecord>,
}

/// One photo as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub urls: UrlsRecord,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    pub user: UserRecord,
}

/// Rendition URLs of a photo. Only the two renditions the plugin shows are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlsRecord {
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub regular: String,
}

/// Photographer attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
}

impl From<PhotoRecord> for Image {
    fn from(record: PhotoRecord) -> Self {
        Self {
            id: record.id,
            preview_url: record.urls.small,
            full_url: record.urls.regular,
            alt_text: record.alt_description.unwrap_or_default(),
            author_name: record.user.name,
            author_username: record.user.username,
            likes: record.likes,
            description: record.description.unwrap_or_default(),
            created_at: record.created_at,
        }
    }
}

impl From<SearchResponseRecord> for SearchPage {
    fn from(record: SearchResponseRecord) -> Self {
        Self {
            results: record.results.into_iter().map(Image::from).collect(),
            total: record.total,
            total_pages: record.total_pages,
        }
    }
}
