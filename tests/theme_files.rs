//! Loading themes from user files.

use photoseek::{initialize, Config, PhotoseekError, Theme};
use std::fs;
use tempfile::TempDir;

const CUSTOM_THEME: &str = r##"
name = "paper"

[colors]
header_fg = "#000000"
header_bg = "#eeeeee"
selection_fg = "#ffffff"
selection_bg = "#000000"
text_normal = "#222222"
text_dim = "#888888"
border = "#cccccc"
search_bar_border = "#000000"
match_highlight_fg = "#000000"
match_highlight_bg = "#ffff00"
empty_state_fg = "#0000ff"
error_fg = "#ff0000"
toast_fg = "#ff8800"
likes_fg = "#cc0000"
"##;

#[test]
fn custom_theme_file_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("paper.toml");
    fs::write(&path, CUSTOM_THEME).unwrap();

    let config = Config {
        theme_file: Some(path.to_string_lossy().into_owned()),
        ..Default::default()
    };
    let state = initialize(&config);

    assert_eq!(state.theme.name, "paper");
    assert_eq!(state.theme.colors.header_bg.as_deref(), Some("#eeeeee"));
}

#[test]
fn incomplete_theme_file_is_a_theme_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = \"broken\"\n[colors]\nheader_fg = \"#000000\"\n").unwrap();

    let err = Theme::from_file(&path).unwrap_err();
    assert!(matches!(err, PhotoseekError::Theme(_)));

    let config = Config {
        theme_file: Some(path.to_string_lossy().into_owned()),
        ..Default::default()
    };
    assert_eq!(initialize(&config).theme, Theme::default());
}
