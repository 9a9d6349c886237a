//! Composable UI component renderers.
//!
//! Each component renders one part of the interface starting at a given row
//! and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the active query
//! - [`search`]: Query editor box
//! - [`gallery`]: Result table (ALT TEXT, AUTHOR, LIKES)
//! - [`detail`]: Panel for the selected image
//! - [`empty`]: Empty state message
//! - [`status`]: Loader, error and "load more" line
//! - [`toast`]: Transient notification line
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, while editing]
//! [Gallery | Detail | Empty state]
//! [Status]
//! [Toast]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod gallery;
mod header;
mod search;
mod status;
mod toast;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use gallery::{render_gallery_headers, render_gallery_rows};
use header::render_header;
use search::render_search_bar;
use status::render_status;
use toast::render_toast;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout for one frame.
///
/// The body shows the detail panel when an image is open, the empty state when
/// there are no results, and the gallery otherwise. The bottom four rows are
/// always status, toast, border and footer.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let toast_row = border_row.saturating_sub(1);
    let status_row = toast_row.saturating_sub(1);

    if let Some(detail) = &vm.detail {
        render_detail(current_row, status_row.saturating_sub(1), detail, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = render_gallery_headers(current_row, vm.caption_width, theme);
        render_gallery_rows(current_row, &vm.rows, vm.caption_width, theme);
    }

    render_status(status_row, &vm.status, theme, cols);
    render_toast(toast_row, vm.toast.as_deref(), theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
