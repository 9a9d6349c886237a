//! Query editor box shown while editing the search text.
//!
//! Renders a three-line bordered box with the draft query and a block cursor.

use crate::ui::helpers::{char_len, fit_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Label printed before the draft.
const PROMPT: &str = " Search images: ";

/// Renders the search box starting at `row`.
///
/// When the draft is wider than the box, its tail is shown so the cursor stays
/// visible.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let room = inner_width.saturating_sub(char_len(PROMPT) + 1);
    let query_len = char_len(&search.query);
    let visible: String = search.query.chars().skip(query_len.saturating_sub(room)).collect();
    let line = format!("{PROMPT}{visible}█");

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", fit_to_width(&line, inner_width));
    print!("{border}│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
