//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use photoseek::ui::viewmodel::{FooterInfo, GalleryRow, HeaderInfo, StatusLine, UIViewModel};
//!
//! let vm = UIViewModel {
//!     rows: vec![GalleryRow {
//!         caption: "man holding cup".to_string(),
//!         author: "Jeff Sheldon".to_string(),
//!         likes: "286".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(4, 11)],
//!     }],
//!     selected_index: 0,
//!     caption_width: 46,
//!     header: HeaderInfo { title: " photoseek ".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     status: StatusLine::Idle,
//!     toast: None,
//!     empty_state: None,
//!     search_bar: None,
//!     detail: None,
//! };
//! assert_eq!(vm.rows.len(), 1);
//! ```

/// Width of the gallery author column, including its trailing gap.
pub const AUTHOR_COLUMN_WIDTH: usize = 24;

/// Width of the gallery likes column.
pub const LIKES_COLUMN_WIDTH: usize = 8;

/// Width of the cursor gutter in front of each gallery row.
pub const GUTTER_WIDTH: usize = 2;

/// Narrowest caption column, kept even when the pane is smaller.
pub const MIN_CAPTION_WIDTH: usize = 8;

/// Width left for captions once the fixed gallery columns are placed.
///
/// # Example
///
/// ```rust
/// use photoseek::ui::viewmodel::caption_column_width;
///
/// assert_eq!(caption_column_width(80), 46);
/// assert_eq!(caption_column_width(20), 8);
/// ```
#[must_use]
pub fn caption_column_width(cols: usize) -> usize {
    cols.saturating_sub(GUTTER_WIDTH + AUTHOR_COLUMN_WIDTH + LIKES_COLUMN_WIDTH)
        .max(MIN_CAPTION_WIDTH)
}

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Gallery rows inside the visible window.
    pub rows: Vec<GalleryRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Caption column width shared by the gallery headers and rows.
    pub caption_width: usize,

    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Footer information (keybindings).
    pub footer: FooterInfo,

    /// Loader, error or "load more" line under the gallery.
    pub status: StatusLine,

    /// Transient notification, if one is showing.
    pub toast: Option<String>,

    /// Optional empty state message (when no images are available).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when editing the query).
    pub search_bar: Option<SearchBarInfo>,

    /// Optional detail panel (when an image is open).
    pub detail: Option<DetailInfo>,
}

/// Display information for a single image row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRow {
    /// Caption (alt text, truncated to the caption column).
    pub caption: String,

    /// Photographer name.
    pub author: String,

    /// Formatted like count.
    pub likes: String,

    /// Whether this row is under the cursor.
    pub is_selected: bool,

    /// Character ranges of the caption matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Line describing the request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Nothing to report.
    Idle,
    /// A fetch is in flight.
    Loading {
        /// Page being fetched.
        page: u32,
    },
    /// The last fetch failed.
    Error {
        /// Message shown to the user.
        message: String,
    },
    /// More pages can be loaded.
    LoadMore,
    /// The last page has been loaded.
    Exhausted,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Search for photos").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Query text being edited.
    pub query: String,
}

/// Detail panel display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
    /// Alt text (or fallback caption).
    pub title: String,

    /// Long description, empty if none.
    pub description: String,

    /// "Name (@username)" attribution.
    pub author: String,

    /// Formatted like count.
    pub likes: String,

    /// Relative upload age, if known.
    pub uploaded: Option<String>,

    /// Regular-size image URL.
    pub url: String,
}
