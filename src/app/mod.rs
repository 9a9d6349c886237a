//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain/api
//! layers. It implements the event-driven loop that powers the interactive UI.
//!
//! # Architecture
//!
//! ```text
//! Keys / Host Events → Events → Event Handler → State Mutations → Actions → Host Calls
//!                          ↑                                          ↓
//!                          └────────── Web Request Results ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode type
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, NO_RESULTS_MESSAGE};
pub use modes::InputMode;
pub use state::AppState;
