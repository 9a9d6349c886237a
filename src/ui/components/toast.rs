//! Notification line.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;

/// Renders the notification line at the specified row.
///
/// A showing toast is centered in bold toast colors. Without one, the line is
/// blanked so a dismissed message disappears on the next frame.
///
/// # Parameters
///
/// * `row` - Row position to render the toast (1-indexed)
/// * `toast` - Message currently showing, if any
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
///                          There are no results!
/// ```
pub fn render_toast(row: usize, toast: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match toast {
        Some(message) => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.toast_fg));
            print_centered(message, cols);
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
