//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component layout
//!
//! # Example
//!
//! ```rust,no_run
//! use photoseek::app::AppState;
//! use photoseek::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output using absolute cursor positioning. Does not clear
/// the screen; Zellij hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
