//! Status line reflecting the request lifecycle.

use crate::ui::helpers::{fit_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Renders the request lifecycle line at the specified row.
///
/// Shows the loader while a fetch is outstanding, the error message in bold
/// error colors after a failure, and the "load more" hint when further pages
/// exist. The line is always padded to the full width so a previous message
/// never lingers.
///
/// # Parameters
///
/// * `row` - Row position to render the status (1-indexed)
/// * `status` - Status computed from the search session
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```text
///   ⟳ Loading page 2...
///   [m] Load more
/// ```
pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let text = match status {
        StatusLine::Idle => String::new(),
        StatusLine::Loading { page } => {
            print!("{}", Theme::fg(&theme.colors.empty_state_fg));
            format!("  ⟳ Loading page {page}...")
        }
        StatusLine::Error { message } => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.error_fg));
            format!("  {message}")
        }
        StatusLine::LoadMore => {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            "  [m] Load more".to_string()
        }
        StatusLine::Exhausted => {
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
            "  End of results".to_string()
        }
    };

    print!("{}", fit_to_width(&text, cols));
    print!("{}", Theme::reset());
    row + 1
}
