//! Shared rendering utilities and helpers.
//!
//! Low-level helpers used across UI components: cursor positioning, width
//! calculations on character counts, and fuzzy match highlighting with proper
//! ANSI escape sequence management.
//!
//! All widths are measured in characters, not bytes, so captions with accented
//! letters line up with ASCII ones.
//!
//! # Example
//!
//! ```rust
//! use photoseek::ui::helpers::{char_len, fit_to_width};
//!
//! assert_eq!(char_len("café"), 4);
//! assert_eq!(fit_to_width("fox", 6), "fox   ");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Pads `text` with spaces, or cuts it, so it spans exactly `width` characters.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.chars().take(width).collect();
    }
    format!("{text}{}", " ".repeat(width - len))
}

/// Prints `text` centered on the current line, filling the rest with spaces.
pub fn print_centered(text: &str, cols: usize) {
    let text_len = char_len(text).min(cols);
    let padding = cols.saturating_sub(text_len) / 2;

    print!("{}", " ".repeat(padding));
    print!("{}", fit_to_width(text, text_len));
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices with an exclusive end. When the
/// row is selected, match highlighting is skipped so the selection colors stay
/// intact.
///
/// # Output
///
/// Prints to stdout. After each highlighted section the row's base color
/// (`text_normal`) is restored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
