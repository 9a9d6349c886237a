//! Domain layer for the photoseek plugin.
//!
//! This module contains the core domain types and the search controller,
//! independent of Zellij-specific APIs or the photo API's wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`image`]: Image model
//! - [`session`]: Search/pagination/request lifecycle controller
//! - [`detail`]: Detail view selection

pub mod detail;
pub mod error;
pub mod image;
pub mod session;

pub use detail::DetailSelection;
pub use error::{PhotoseekError, Result};
pub use image::Image;
pub use session::{FetchOutcome, FetchRequest, FetchTicket, SearchPage, SearchSession, SessionPhase};
