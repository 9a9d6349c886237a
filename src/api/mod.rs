//! Query service boundary for the Unsplash search API.
//!
//! This module turns controller fetch requests into host web requests and host
//! responses back into domain pages. It performs no I/O: the Zellij host
//! executes the request asynchronously and delivers the result as an event.
//!
//! # Modules
//!
//! - `models`: Wire record types separate from domain models
//! - `request`: URL/header construction and ticket context round-tripping
//! - `response`: Status checking and JSON decoding

pub mod models;
pub mod request;
pub mod response;

pub use models::{PhotoRecord, SearchResponseRecord};
pub use request::{ticket_from_context, SearchRequest};
pub use response::decode_search_page;
