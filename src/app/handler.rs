//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user intents,
//! query editing keystrokes and fetch completions, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `SearchSession` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Intents**: `Search`, `LoadMore`, `OpenDetail`, `CloseDetail`, `CloseFocus`
//! - **Query editing**: `EditQuery`, `Char`, `Backspace`, `Submit`, `CancelEdit`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Completions**: `PageLoaded`, `PageFailed`
//! - **Timers**: `ToastExpired`
//!
//! # Example
//!
//! ```rust
//! use photoseek::app::{handle_event, Action, AppState, Event};
//! use photoseek::ui::theme::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Search("cats".into()))?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), photoseek::PhotoseekError>(())
//! ```

use crate::app::{Action, AppState, InputMode};
use crate::domain::error::Result;
use crate::domain::{FetchOutcome, FetchTicket, SearchPage};

/// Message shown when a query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "There are no results!";

/// Events triggered by user input, host timers or completed fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Starts a new search session for the given text.
    Search(String),
    /// Requests the next page of the current session.
    LoadMore,
    /// Opens the detail panel on the highlighted image.
    OpenDetail,
    /// Closes the detail panel.
    CloseDetail,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters query editing, prefilled with the current query.
    EditQuery,
    /// Appends a character to the draft.
    Char(char),
    /// Removes the last character from the draft.
    Backspace,
    /// Commits the draft as a new search.
    Submit,
    /// Leaves editing without searching.
    CancelEdit,

    /// Moves the gallery cursor down (wraps to top).
    KeyDown,
    /// Moves the gallery cursor up (wraps to bottom).
    KeyUp,

    /// A fetch completed successfully.
    PageLoaded {
        /// Ticket the fetch was dispatched with.
        ticket: FetchTicket,
        /// Decoded response.
        page: SearchPage,
    },

    /// A fetch failed at the transport, HTTP or decode level.
    PageFailed {
        /// Ticket the fetch was dispatched with.
        ticket: FetchTicket,
        /// Human readable cause, logged only.
        error: String,
    },

    /// A notification dismissal timer fired.
    ToastExpired,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of `(should_render, actions)`. Actions must be executed in order.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for callers
/// that propagate with `?`.
///
/// # Example
///
/// ```rust
/// use photoseek::app::{handle_event, AppState, Event};
/// use photoseek::ui::theme::Theme;
///
/// let mut state = AppState::new(Theme::default());
/// let (render, actions) = handle_event(&mut state, &Event::LoadMore)?;
/// assert!(!render);
/// assert!(actions.is_empty());
/// # Ok::<(), photoseek::PhotoseekError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Search(text) => Ok(start_search(state, text)),
        Event::LoadMore => {
            let Some(request) = state.session.request_next_page() else {
                return Ok((false, vec![]));
            };
            Ok((true, vec![Action::Fetch(request)]))
        }
        Event::OpenDetail => {
            let Some(image) = state.selected_image().cloned() else {
                tracing::debug!("no image selected");
                return Ok((false, vec![]));
            };
            state.detail.open(image);
            Ok((true, vec![]))
        }
        Event::CloseDetail => {
            if !state.detail.is_open() {
                return Ok((false, vec![]));
            }
            state.detail.close();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::EditQuery => {
            state.input_mode = InputMode::Editing;
            state.draft = state.session.query().to_string();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            state.draft.push(*c);
            tracing::trace!(draft = %state.draft, char = %c, "draft updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            state.draft.pop();
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Browsing;
            let text = std::mem::take(&mut state.draft);
            Ok(start_search(state, text.trim()))
        }
        Event::CancelEdit => {
            state.input_mode = InputMode::Browsing;
            state.draft.clear();
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::PageLoaded { ticket, page } => {
            let outcome = state.session.apply_page(*ticket, page.clone());
            if outcome == FetchOutcome::Stale {
                return Ok((false, vec![]));
            }

            let mut actions = Vec::new();
            if outcome == FetchOutcome::NoResults {
                actions.push(Action::Notify {
                    message: NO_RESULTS_MESSAGE.to_string(),
                });
            }
            actions.extend(scroll_signal(state, outcome));
            Ok((true, actions))
        }
        Event::PageFailed { ticket, error } => {
            let outcome = state.session.apply_failure(*ticket);
            if outcome == FetchOutcome::Stale {
                return Ok((false, vec![]));
            }

            tracing::warn!(ticket = %ticket, error = %error, "search request failed");
            Ok((true, scroll_signal(state, outcome).into_iter().collect()))
        }
        Event::ToastExpired => Ok((state.expire_toast(), vec![])),
    }
}

/// Signal bringing the end of the gallery into view after a later page settles.
///
/// Emitted for every applied completion past page 1, whatever its outcome. When
/// nothing was appended the signal points just past the existing results, so the
/// cursor lands on the last image next to the status line.
fn scroll_signal(state: &AppState, outcome: FetchOutcome) -> Option<Action> {
    if state.session.page() <= 1 {
        return None;
    }
    let first_new = match outcome {
        FetchOutcome::Appended { first_new, .. } => first_new,
        _ => state.session.images().len(),
    };
    Some(Action::ScrollToLatest { first_new })
}

fn start_search(state: &mut AppState, text: &str) -> (bool, Vec<Action>) {
    state.selected_index = 0;
    state.session.set_query(text).map_or_else(
        || (true, vec![]),
        |request| (true, vec![Action::Fetch(request)]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Image;
    use crate::ui::theme::Theme;

    fn fetch_of(actions: &[Action]) -> crate::domain::FetchRequest {
        match actions {
            [Action::Fetch(request)] => request.clone(),
            other => panic!("expected a single fetch, got {other:?}"),
        }
    }

    #[test]
    fn submit_trims_draft_and_leaves_editing() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::EditQuery).unwrap();
        for c in "  owl ".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(fetch_of(&actions).query, "owl");
        assert_eq!(state.input_mode, InputMode::Browsing);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn whitespace_only_submit_goes_idle() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::EditQuery).unwrap();
        handle_event(&mut state, &Event::Char(' ')).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.session.is_loading());
    }

    #[test]
    fn typing_outside_editing_is_ignored() {
        let mut state = AppState::new(Theme::default());
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn edit_prefills_current_query() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::Search("foxes".into())).unwrap();
        handle_event(&mut state, &Event::EditQuery).unwrap();
        assert_eq!(state.draft, "foxes");

        handle_event(&mut state, &Event::CancelEdit).unwrap();
        assert_eq!(state.input_mode, InputMode::Browsing);
        assert_eq!(state.session.query(), "foxes");
    }

    #[test]
    fn detail_open_and_close_leave_session_alone() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::Search("cats".into())).unwrap();
        let ticket = fetch_of(&actions).ticket;
        let page = SearchPage {
            results: vec![Image::new("a", "cat"), Image::new("b", "kitten")],
            total: 24,
            total_pages: 2,
        };
        handle_event(&mut state, &Event::PageLoaded { ticket, page }).unwrap();

        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::OpenDetail).unwrap();
        assert_eq!(state.detail.image().map(|i| i.id.as_str()), Some("b"));
        assert!(state.session.has_more());

        handle_event(&mut state, &Event::CloseDetail).unwrap();
        assert!(!state.detail.is_open());
        assert_eq!(state.session.images().len(), 2);
    }

    #[test]
    fn open_detail_without_results_does_nothing() {
        let mut state = AppState::new(Theme::default());
        let (render, _) = handle_event(&mut state, &Event::OpenDetail).unwrap();
        assert!(!render);
        assert!(!state.detail.is_open());
    }

    #[test]
    fn close_focus_hides_pane() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
