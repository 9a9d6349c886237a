//! Input mode state type for the application.
//!
//! The mode controls how keystrokes are interpreted:
//! - **Browsing**: navigate the gallery, open details, load more
//! - **Editing**: type into the query field
//!
//! # Example
//!
//! ```rust
//! use photoseek::app::modes::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Browsing);
//! ```

/// Current input handling mode.
///
/// Determines active keybindings, the footer text and whether the search bar
/// is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation mode.
    ///
    /// Available keybindings: j/k (navigate), / (edit query), enter (open
    /// detail), m (load more), esc (close detail), q (quit).
    #[default]
    Browsing,

    /// Query editing mode.
    ///
    /// Accepts character input and backspace; enter submits the query, esc
    /// discards the edit.
    Editing,
}
