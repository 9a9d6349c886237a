//! Gallery table component.
//!
//! Renders the accumulated search results as a three-column table
//! (ALT TEXT, AUTHOR, LIKES) with the cursor row in selection colors and query
//! matches highlighted inside captions.

use crate::ui::helpers::{self, char_len, fit_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GalleryRow, AUTHOR_COLUMN_WIDTH, GUTTER_WIDTH, LIKES_COLUMN_WIDTH};

/// Renders the column titles at the specified row.
///
/// Displays "ALT TEXT", "AUTHOR" and "LIKES" in bold header colors, aligned
/// with the columns of [`render_gallery_rows`].
///
/// # Parameters
///
/// * `row` - Row position to render the headers (1-indexed)
/// * `caption_width` - Width of the ALT TEXT column, from the view model
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Example
///
/// ```text
/// render_gallery_headers(4, 46, &theme) on an 80-column pane:
///   ALT TEXT                                      AUTHOR                     LIKES
/// ```
pub fn render_gallery_headers(row: usize, caption_width: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", " ".repeat(GUTTER_WIDTH));
    print!("{}", fit_to_width("ALT TEXT", caption_width));
    print!("{}", fit_to_width("AUTHOR", AUTHOR_COLUMN_WIDTH));
    print!("{:>width$}", "LIKES", width = LIKES_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every row of the visible window.
///
/// Each image takes one line. The row under the cursor is drawn in selection
/// colors with a `▶` marker in the gutter.
///
/// # Parameters
///
/// * `row` - Starting row position for the gallery (1-indexed)
/// * `items` - Rows of the visible window, already truncated
/// * `caption_width` - Width of the ALT TEXT column, from the view model
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + number of items)
///
/// # Example
///
/// ```text
/// ▶ man holding cup                               Jeff Sheldon                 ♥ 286
///   brown dog running                             Jamie Street                 ♥ 1204
/// ```
pub fn render_gallery_rows(
    row: usize,
    items: &[GalleryRow],
    caption_width: usize,
    theme: &Theme,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_gallery_row(current_row, item, caption_width, theme);
    }
    current_row
}

fn render_gallery_row(row: usize, item: &GalleryRow, caption_width: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("▶ ");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", " ".repeat(GUTTER_WIDTH));
    }

    let caption = fit_to_width(&item.caption, caption_width);
    helpers::render_highlighted_text(&caption, &item.highlight_ranges, theme, item.is_selected);

    print!("{}", fit_to_width(&item.author, AUTHOR_COLUMN_WIDTH));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.likes_fg));
    }
    let likes = format!("♥ {}", item.likes);
    print!("{}{likes}", " ".repeat(LIKES_COLUMN_WIDTH.saturating_sub(char_len(&likes))));

    print!("{}", Theme::reset());
    row + 1
}
