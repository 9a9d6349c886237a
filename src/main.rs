//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the photoseek library and
//! the Zellij plugin system. It maps host events to library events and library
//! actions to host calls; all decisions live in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `WebRequestResult`, Timer events
//! 3. **Permission**: Once web access is granted, search `initial_query`
//! 4. **Update**: Translate events, delegate to `handle_event`, run actions
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key` → intents and editing events, depending on the input mode
//! - `WebRequestResult` → `Event::PageLoaded` or `Event::PageFailed`
//! - `Timer` → `Event::ToastExpired`
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Enter`: Open detail
//! - `/`: Edit query
//! - `m`: Load more
//! - `q`: Close plugin
//!
//! Detail open:
//! - `Esc`/`Enter`: Close detail
//! - `q`: Close plugin
//!
//! Editing:
//! - Characters: Type
//! - `Enter`: Search
//! - `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use photoseek::api::{decode_search_page, ticket_from_context, SearchRequest};
use photoseek::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the configuration needed to execute
/// actions against the host.
struct State {
    /// Core application state from library layer.
    app: photoseek::AppState,

    /// Parsed plugin configuration.
    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: photoseek::initialize(&config),
            config,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` for the search API.
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `WebRequestResult`: Search responses
    /// - `Timer`: Notification dismissal
    /// - `PermissionRequestResult`: Start of the initial search
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        photoseek::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            api_base_url = %config.api_base_url,
            per_page = config.per_page,
            initial_query = ?config.initial_query,
            "parsed configuration"
        );
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "configuration incomplete");
        }

        self.app = photoseek::initialize(&config);
        self.config = config;

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the plugin UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::ToastExpired,
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        photoseek::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs one library event to completion and executes its actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(&action);
                }
                render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if self.app.input_mode == InputMode::Editing {
            return match key.bare_key {
                BareKey::Enter => Some(Event::Submit),
                BareKey::Esc => Some(Event::CancelEdit),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => {
                    Some(Event::Char(c))
                }
                _ => None,
            };
        }

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        if self.app.detail.is_open() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter => Some(Event::CloseDetail),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::OpenDetail,
            BareKey::Char('/') => Event::EditQuery,
            BareKey::Char('m') => Event::LoadMore,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps a finished web request to a completion event.
    ///
    /// Responses to requests not issued by the search controller are ignored.
    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(ticket) = ticket_from_context(context) else {
            tracing::debug!(status, "ignoring web request result without search ticket");
            return None;
        };

        tracing::debug!(
            status,
            ticket = %ticket,
            body_len = body.len(),
            query = ?context.get("query"),
            page = ?context.get("page"),
            "search response received"
        );

        Some(match decode_search_page(status, body) {
            Ok(page) => Event::PageLoaded { ticket, page },
            Err(e) => Event::PageFailed {
                ticket,
                error: e.to_string(),
            },
        })
    }

    /// Handles permission request results.
    ///
    /// Returns the initial search, if one is configured and access was granted.
    fn map_permission_result(&self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("web access granted");
                self.config.initial_query.clone().map(Event::Search)
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - searches will fail");
                None
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Returns `true` if the action changed what is on screen.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
                false
            }
            Action::Fetch(fetch) => {
                let request = SearchRequest::build(&self.config, fetch);
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers,
                    vec![],
                    request.context,
                );
                false
            }
            Action::Notify { message } => {
                self.app.show_toast(message.clone());
                set_timeout(self.config.toast_seconds);
                true
            }
            Action::ScrollToLatest { first_new } => {
                self.app.reveal(*first_new);
                true
            }
        }
    }
}
