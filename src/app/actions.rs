//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or host events.
//! Actions bridge pure state transformations and effectful operations like
//! issuing web requests, scheduling timers, or hiding the plugin pane.
//!
//! # Example
//!
//! ```rust
//! use photoseek::app::Action;
//!
//! let actions = vec![
//!     Action::Notify { message: "There are no results!".to_string() },
//!     Action::ScrollToLatest { first_new: 12 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends a search request to the photo API.
    ///
    /// The response must be reported back as `PageLoaded` or `PageFailed`
    /// carrying the request's ticket.
    Fetch(FetchRequest),

    /// Shows a transient notification.
    ///
    /// The runtime is responsible for dismissing it after the configured
    /// delay by feeding back `ToastExpired`.
    Notify {
        /// Text to display.
        message: String,
    },

    /// One-shot request to bring the most recently loaded images into view.
    ///
    /// Emitted for every settled fetch after the first page, including failed
    /// and empty ones.
    ScrollToLatest {
        /// Index of the first image of the newly loaded page, or the result
        /// count when the page added nothing.
        first_new: usize,
    },
}
