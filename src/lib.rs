//! Photoseek: a Zellij plugin for searching and browsing Unsplash photos.
//!
//! Photoseek provides:
//! - Query-driven photo search against the Unsplash `search/photos` endpoint
//! - Incremental "load more" pagination with accumulated results
//! - A detail panel with attribution, likes and upload age for one photo
//! - Transient notifications (e.g. when a query matches nothing)
//! - Themed ANSI rendering with query highlighting in captions
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point, host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Event handling                                   │  ← Action dispatching
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Domain Layer  │   │ API Layer     │
//! │ (ui/)         │   │ (domain/)     │   │ (api/)        │
//! │ - Rendering   │   │ - Session     │   │ - Requests    │
//! │ - Theming     │   │ - Images      │   │ - Decoding    │
//! │ - Components  │   │ - Errors      │   │ - Tickets     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OpenTelemetry tracing to OTLP JSON files         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Search session controller, image model, errors
//! - [`api`]: Unsplash request building and response decoding
//! - [`infrastructure`]: Sandbox path utilities
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/photoseek.wasm" {
//!         access_key "YOUR_UNSPLASH_ACCESS_KEY"
//!         per_page "12"
//!         initial_query "mountains"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Request Lifecycle
//!
//! 1. The user submits a query; the session resets and returns a fetch request
//! 2. The shim turns it into a host `web_request`, tagging it with the ticket
//! 3. The host answers with `WebRequestResult`; the shim decodes the body
//! 4. The session applies the page only if the ticket is still outstanding
//!
//! # Example
//!
//! ```rust
//! use photoseek::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, &Event::Search("lighthouse".into()))?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(request)] if request.page == 1));
//! # Ok::<(), photoseek::PhotoseekError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{
    DetailSelection, FetchOutcome, FetchRequest, FetchTicket, Image, PhotoseekError, Result,
    SearchPage, SearchSession, SessionPhase,
};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default Unsplash API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.unsplash.com/";

/// Default number of results per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Default notification lifetime in seconds.
pub const DEFAULT_TOAST_SECONDS: f64 = 3.0;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Every key is optional. Unparseable values fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Unsplash access key sent as `Client-ID`.
    ///
    /// Requests are sent even when empty; the API rejects them and the session
    /// reports a fetch failure.
    pub access_key: String,

    /// API root, always ending in `/`. Default: `https://api.unsplash.com/`
    pub api_base_url: String,

    /// Page size. Always at least 1. Default: 12
    pub per_page: u32,

    /// Notification lifetime in seconds. Default: 3
    pub toast_seconds: f64,

    /// Query searched as soon as web access is granted.
    pub initial_query: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: String,

    /// Path to a custom TOML theme file, `~` already expanded to `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            toast_seconds: DEFAULT_TOAST_SECONDS,
            initial_query: None,
            theme_name: ui::theme::DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `access_key`: trimmed string
    /// - `api_base_url`: string, `/` appended if missing
    /// - `per_page`: `u32` >= 1, else 12
    /// - `toast_seconds`: positive finite `f64`, else 3
    /// - `initial_query`: trimmed, ignored if empty
    /// - `theme`, `theme_file`, `trace_level`: strings; `theme_file` has `~` expanded
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use photoseek::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "http://localhost:8080".to_string());
    /// map.insert("per_page".to_string(), "0".to_string());
    /// map.insert("theme_file".to_string(), "~/themes/mine.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base_url, "http://localhost:8080/");
    /// assert_eq!(config.per_page, 12);
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/themes/mine.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let api_base_url = config
            .get("api_base_url")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.api_base_url, |s| {
                if s.ends_with('/') {
                    s.to_string()
                } else {
                    format!("{s}/")
                }
            });

        let per_page = config
            .get("per_page")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|n| *n >= 1)
            .unwrap_or(defaults.per_page);

        let toast_seconds = config
            .get("toast_seconds")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite() && *n > 0.0)
            .unwrap_or(defaults.toast_seconds);

        let initial_query = config
            .get("initial_query")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            access_key: config
                .get("access_key")
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            api_base_url,
            per_page,
            toast_seconds,
            initial_query,
            theme_name: config.get("theme").cloned().unwrap_or(defaults.theme_name),
            theme_file: config
                .get("theme_file")
                .map(|p| infrastructure::expand_tilde(p)),
            trace_level: config
                .get("trace_level")
                .cloned()
                .unwrap_or(defaults.trace_level),
        }
    }

    /// Checks that the configuration can produce accepted requests.
    ///
    /// A failing check is not fatal: the plugin still runs and every fetch
    /// surfaces as an error in the UI.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoseekError::Config`] when no access key is configured.
    pub fn validate(&self) -> Result<()> {
        if self.access_key.is_empty() {
            return Err(PhotoseekError::Config(
                "access_key is not set; Unsplash will reject every search".to_string(),
            ));
        }
        Ok(())
    }
}

/// Initializes the application state from configuration.
///
/// The theme comes from `theme_file` if set and loadable, then from
/// `theme_name`, then the default theme.
///
/// # Example
///
/// ```rust
/// use photoseek::{initialize, Config};
///
/// let config = Config { theme_name: "catppuccin-latte".to_string(), ..Default::default() };
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "catppuccin-latte");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing photoseek plugin");

    let from_name = || {
        Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %config.theme_name, "unknown theme, using default");
            Theme::default()
        })
    };

    let theme = config.theme_file.as_ref().map_or_else(from_name, |theme_file| {
        Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file");
            from_name()
        })
    });

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let mut map = BTreeMap::new();
        map.insert("per_page".to_string(), "lots".to_string());
        map.insert("toast_seconds".to_string(), "-1".to_string());
        map.insert("initial_query".to_string(), "   ".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
        assert!((config.toast_seconds - DEFAULT_TOAST_SECONDS).abs() < f64::EPSILON);
        assert!(config.initial_query.is_none());
    }

    #[test]
    fn validate_requires_access_key() {
        assert!(matches!(
            Config::default().validate(),
            Err(PhotoseekError::Config(_))
        ));

        let config = Config {
            access_key: "abc".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_theme_file_falls_back_to_name() {
        let config = Config {
            theme_name: "catppuccin-latte".to_string(),
            theme_file: Some("/nowhere/theme.toml".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");
    }
}
