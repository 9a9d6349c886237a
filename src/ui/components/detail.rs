//! Detail panel for the selected image.
//!
//! Replaces the gallery while open. Shows the full caption, description,
//! attribution, like count, upload age and the regular-size image URL.

use crate::ui::helpers::{char_len, fit_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Left margin of the panel body.
const INDENT: usize = 4;

/// Width of the field labels.
const LABEL_WIDTH: usize = 12;

/// Renders the panel starting at `row`, never drawing past `last_row`.
///
/// # Returns
///
/// The row following the last drawn line.
pub fn render_detail(
    row: usize,
    last_row: usize,
    detail: &DetailInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row + 1;
    let width = cols.saturating_sub(INDENT * 2);

    for line in wrap(&detail.title, width) {
        if current_row > last_row {
            return current_row;
        }
        position_cursor(current_row, INDENT + 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    let uploaded = detail.uploaded.as_deref().unwrap_or("unknown");
    let likes = format!("♥ {}", detail.likes);
    let fields = [
        ("Author", detail.author.as_str(), &theme.colors.text_normal),
        ("Likes", likes.as_str(), &theme.colors.likes_fg),
        ("Uploaded", uploaded, &theme.colors.text_normal),
        ("URL", detail.url.as_str(), &theme.colors.empty_state_fg),
    ];

    for (label, value, color) in fields {
        if current_row > last_row {
            return current_row;
        }
        position_cursor(current_row, INDENT + 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", fit_to_width(label, LABEL_WIDTH));
        print!("{}", Theme::fg(color));
        print!("{}", fit_to_width(value, width.saturating_sub(LABEL_WIDTH)));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if detail.description.is_empty() {
        return current_row;
    }
    current_row += 1;

    for line in wrap(&detail.description, width) {
        if current_row > last_row {
            break;
        }
        position_cursor(current_row, INDENT + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{line}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

/// Greedy word wrap on character widths. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while char_len(&word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }

        let needed = if current.is_empty() {
            char_len(&word)
        } else {
            char_len(&current) + 1 + char_len(&word)
        };

        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
