//! Error types for the photoseek plugin.
//!
//! This module defines the centralized error type [`PhotoseekError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The search controller does not distinguish between variants: any error produced
//! while talking to the photo API collapses into a single fetch failure.

use thiserror::Error;

/// The main error type for photoseek operations.
///
/// # Examples
///
/// ```
/// use photoseek::PhotoseekError;
///
/// fn validate_page(page: u32) -> Result<(), PhotoseekError> {
///     if page == 0 {
///         return Err(PhotoseekError::Config("page must be >= 1".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PhotoseekError {
    /// The photo API answered with a non-success HTTP status.
    #[error("HTTP error: status {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// The response body could not be decoded as a search page.
    ///
    /// Automatically converts from `serde_json::Error`.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for photoseek operations.
pub type Result<T> = std::result::Result<T, PhotoseekError>;
