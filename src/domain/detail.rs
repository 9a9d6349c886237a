//! Detail view selection.
//!
//! The detail view shows one image at a time. Its lifecycle is independent of
//! the search session: opening or closing it never touches pagination state.

use crate::domain::Image;

/// Which image, if any, the detail view is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailSelection {
    /// Nothing selected.
    #[default]
    Closed,

    /// The detail view is open on a copy of the image.
    Open(Image),
}

impl DetailSelection {
    /// Opens the detail view on `image`, replacing any previous selection.
    pub fn open(&mut self, image: Image) {
        tracing::debug!(image_id = %image.id, "opening detail view");
        *self = Self::Open(image);
    }

    /// Resets to the closed default.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether the detail view is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The selected image, if open.
    #[must_use]
    pub const fn image(&self) -> Option<&Image> {
        match self {
            Self::Open(image) => Some(image),
            Self::Closed => None,
        }
    }
}
