//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It wraps the search session and detail selection owned by the domain layer and
//! adds the purely presentational state: input mode, query draft, gallery cursor
//! and the notification currently on screen.
//!
//! # State Components
//!
//! - **Session**: query, page cursor, accumulated images and request phase
//! - **Detail**: the image open in the detail panel, if any
//! - **Draft**: query text being edited, committed on submit
//! - **Selection**: cursor position within the accumulated images
//! - **Toast**: transient notification and the number of pending timers
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation, handling windowing, fuzzy match highlighting of the query in
//! captions, and the status line for the request lifecycle.
//!
//! # Example
//!
//! ```rust
//! use photoseek::app::AppState;
//! use photoseek::ui::theme::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::InputMode;
use crate::domain::{DetailSelection, Image, SearchSession};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    caption_column_width, DetailInfo, EmptyState, FooterInfo, GalleryRow, HeaderInfo,
    SearchBarInfo, StatusLine, UIViewModel, AUTHOR_COLUMN_WIDTH,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search session controller. Owns the accumulated images.
    pub session: SearchSession,

    /// Detail panel selection.
    pub detail: DetailSelection,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Query text being edited.
    ///
    /// Prefilled from the session query when editing starts and committed by
    /// `Submit`. Never read by the session directly.
    pub draft: String,

    /// Zero-based index of the highlighted image within the session results.
    pub selected_index: usize,

    /// Notification currently displayed.
    pub toast: Option<String>,

    /// Number of dismissal timers still running.
    ///
    /// The toast is cleared only when the last one fires, so a second
    /// notification is not cut short by the first one's timer.
    pub toast_pending: u32,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with an idle session.
    ///
    /// # Parameters
    ///
    /// * `theme` - Color scheme for UI rendering
    ///
    /// # Example
    ///
    /// ```rust
    /// use photoseek::app::AppState;
    /// use photoseek::ui::theme::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// assert_eq!(state.selected_index, 0);
    /// assert!(state.session.images().is_empty());
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            session: SearchSession::new(),
            detail: DetailSelection::default(),
            input_mode: InputMode::Browsing,
            draft: String::new(),
            selected_index: 0,
            toast: None,
            toast_pending: 0,
            theme,
        }
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    ///
    /// No-op if there are no images.
    pub fn move_selection_down(&mut self) {
        let len = self.session.images().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    ///
    /// No-op if there are no images.
    pub fn move_selection_up(&mut self) {
        let len = self.session.images().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the highlighted image, if any.
    #[must_use]
    pub fn selected_image(&self) -> Option<&Image> {
        self.session.images().get(self.selected_index)
    }

    /// Moves the cursor onto `index`, clamped to the available images.
    ///
    /// Used to bring a freshly appended page into view.
    pub fn reveal(&mut self, index: usize) {
        let len = self.session.images().len();
        if len == 0 {
            self.selected_index = 0;
            return;
        }
        self.selected_index = index.min(len - 1);
        tracing::debug!(selected_index = self.selected_index, "revealed latest results");
    }

    /// Displays a notification and registers one more pending dismissal.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(message = %message, pending = self.toast_pending + 1, "showing toast");
        self.toast = Some(message);
        self.toast_pending += 1;
    }

    /// Consumes one dismissal timer.
    ///
    /// Returns `true` if the toast was cleared by this call.
    pub fn expire_toast(&mut self) -> bool {
        self.toast_pending = self.toast_pending.saturating_sub(1);
        if self.toast_pending == 0 && self.toast.is_some() {
            self.toast = None;
            return true;
        }
        false
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around selected index
    /// 3. Adjust window if near the end to maximize visible items
    /// 4. Compute relative selection index within visible window
    ///
    /// # Example
    ///
    /// ```rust
    /// use photoseek::app::AppState;
    /// use photoseek::ui::theme::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// let viewmodel = state.compute_viewmodel(24, 80);
    /// assert!(viewmodel.rows.is_empty());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let images = self.session.images();
        let caption_width = caption_column_width(cols);

        if images.is_empty() {
            return UIViewModel {
                rows: vec![],
                selected_index: 0,
                caption_width,
                header: self.compute_header(),
                footer: self.compute_footer(),
                status: self.compute_status(),
                toast: self.toast.clone(),
                empty_state: self.compute_empty_state(),
                search_bar: self.compute_search_bar(),
                detail: self.compute_detail(),
            };
        }

        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(images.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && images.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = self.session.query();
        let matcher = if query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let gallery_rows = images[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, image)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_row(image, absolute_idx, caption_width, matcher.as_ref())
            })
            .collect();

        UIViewModel {
            rows: gallery_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            caption_width,
            header: self.compute_header(),
            footer: self.compute_footer(),
            status: self.compute_status(),
            toast: self.toast.clone(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            detail: self.compute_detail(),
        }
    }

    fn compute_row(
        &self,
        image: &Image,
        absolute_idx: usize,
        caption_width: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> GalleryRow {
        let caption = truncate_chars(image.caption(), caption_width);
        let author = truncate_chars(&image.author_name, AUTHOR_COLUMN_WIDTH - 2);

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            let limit = caption.chars().count();
            compute_highlight_ranges(&caption, self.session.query(), m)
                .into_iter()
                .filter(|&(start, _)| start < limit)
                .map(|(start, end)| (start, end.min(limit)))
                .collect()
        });

        GalleryRow {
            caption,
            author,
            likes: image.likes.to_string(),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let query = self.session.query();
        let count = self.session.images().len();
        let title = if query.is_empty() {
            " photoseek ".to_string()
        } else {
            format!(" \"{query}\" ({count}) ")
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.detail.is_open()) {
            (InputMode::Editing, _) => "Enter: search  ESC: cancel  Type to edit query",
            (InputMode::Browsing, true) => "ESC: close detail  q: quit",
            (InputMode::Browsing, false) => {
                "j/k: navigate  /: search  Enter: details  m: load more  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_status(&self) -> StatusLine {
        if self.session.is_loading() {
            StatusLine::Loading {
                page: self.session.page(),
            }
        } else if self.session.has_error() {
            StatusLine::Error {
                message: "Whoops, something went wrong! Please try reloading this page!"
                    .to_string(),
            }
        } else if self.session.show_load_more() {
            StatusLine::LoadMore
        } else if self.session.images().is_empty() {
            StatusLine::Idle
        } else {
            StatusLine::Exhausted
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.session.is_loading() || self.session.has_error() {
            return None;
        }

        if self.session.query().is_empty() {
            Some(EmptyState {
                message: "Search for photos".to_string(),
                subtitle: "Press / and type a query".to_string(),
            })
        } else {
            Some(EmptyState {
                message: "No photos found".to_string(),
                subtitle: "Try a different query".to_string(),
            })
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Editing => Some(SearchBarInfo {
                query: self.draft.clone(),
            }),
            InputMode::Browsing => None,
        }
    }

    fn compute_detail(&self) -> Option<DetailInfo> {
        let image = self.detail.image()?;

        let author = if image.author_username.is_empty() {
            image.author_name.clone()
        } else {
            format!("{} (@{})", image.author_name, image.author_username)
        };

        Some(DetailInfo {
            title: image.caption().to_string(),
            description: image.description.clone(),
            author,
            likes: image.likes.to_string(),
            uploaded: image.uploaded_ago(),
            url: image.full_url.clone(),
        })
    }

    /// Rows left for the gallery after header (3), column titles (1), status
    /// (1), toast (1) and footer (3), plus the search bar (3) while editing.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Browsing => total_rows.saturating_sub(9),
            InputMode::Editing => total_rows.saturating_sub(12),
        }
    }
}

/// Computes character index ranges to highlight for fuzzy match visualization.
///
/// Consecutive matched indices are coalesced into `(start, end)` ranges with an
/// exclusive end.
fn compute_highlight_ranges(
    text: &str,
    query: &str,
    matcher: &SkimMatcherV2,
) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Truncates `text` to at most `max` characters, marking the cut with "...".
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchPage;

    fn loaded_state(captions: &[&str]) -> AppState {
        let mut state = AppState::new(Theme::default());
        let request = state.session.set_query("dog").unwrap();
        let page = SearchPage {
            results: captions
                .iter()
                .enumerate()
                .map(|(i, c)| Image::new(format!("id{i}"), *c))
                .collect(),
            total: captions.len() as u64,
            total_pages: 2,
        };
        state.session.apply_page(request.ticket, page);
        state
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = loaded_state(&["a", "b", "c"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn reveal_clamps_to_results() {
        let mut state = loaded_state(&["a", "b"]);
        state.reveal(10);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn toast_survives_until_last_timer() {
        let mut state = AppState::new(Theme::default());
        state.show_toast("first");
        state.show_toast("second");

        assert!(!state.expire_toast());
        assert_eq!(state.toast.as_deref(), Some("second"));
        assert!(state.expire_toast());
        assert!(state.toast.is_none());
        assert!(!state.expire_toast());
    }

    #[test]
    fn viewmodel_highlights_query_in_caption() {
        let state = loaded_state(&["brown dog running"]);
        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].highlight_ranges, vec![(6, 9)]);
        assert_eq!(vm.status, StatusLine::LoadMore);
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let captions: Vec<String> = (0..40).map(|i| format!("photo {i}")).collect();
        let refs: Vec<&str> = captions.iter().map(String::as_str).collect();
        let mut state = loaded_state(&refs);
        state.selected_index = 39;

        let vm = state.compute_viewmodel(20, 100);
        assert_eq!(vm.rows.len(), 11);
        assert_eq!(vm.selected_index, 10);
        assert!(vm.rows[10].is_selected);
    }

    #[test]
    fn wide_panes_keep_long_captions() {
        let caption = "a dog running along a very long and empty beach at sunset in autumn";
        let state = loaded_state(&[caption]);

        let vm = state.compute_viewmodel(24, 200);
        assert_eq!(vm.caption_width, caption_column_width(200));
        assert_eq!(vm.rows[0].caption, caption);

        let vm = state.compute_viewmodel(24, 60);
        assert_eq!(vm.caption_width, 26);
        assert_eq!(vm.rows[0].caption.chars().count(), 26);
        assert!(vm.rows[0].caption.ends_with("..."));
    }

    #[test]
    fn idle_viewmodel_prompts_for_search() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.status, StatusLine::Idle);
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("Search for photos".to_string())
        );
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("héllo wörld", 8), "héllo...");
        assert_eq!(truncate_chars("short", 8), "short");
    }
}
