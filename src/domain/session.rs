//! Search session controller.
//!
//! This module owns the lifecycle of one search: the query text, the page
//! cursor, the accumulated results and the request in flight. It decides when a
//! fetch must be issued and how a response is merged, but never performs I/O
//! itself. Callers receive a [`FetchRequest`] to dispatch and report the outcome
//! back through [`SearchSession::apply_page`] or [`SearchSession::apply_failure`].
//!
//! # State Machine
//!
//! ```text
//!   any phase ── set_query("") ──────────────────────────► Idle
//!   any phase ── set_query(text) ────────────────────────► Fetching
//!   Fetching  ── apply_page ─────────────────────────────► Ready
//!   Fetching  ── apply_failure ──────────────────────────► Failed
//!   Ready | Failed ── request_next_page (has_more) ──────► Fetching
//! ```
//!
//! Every dispatched fetch carries a [`FetchTicket`] with a monotonically
//! increasing generation. Only the response whose ticket matches the outstanding
//! fetch is applied; anything else is reported as [`FetchOutcome::Stale`] and
//! leaves the session untouched.
//!
//! # Example
//!
//! ```
//! use photoseek::domain::{Image, SearchPage, SearchSession, FetchOutcome};
//!
//! let mut session = SearchSession::new();
//! let request = session.set_query("dogs").expect("non-empty query fetches");
//! assert_eq!(request.page, 1);
//! assert!(session.is_loading());
//!
//! let page = SearchPage {
//!     results: vec![Image::new("a", "dog"), Image::new("b", "puppy")],
//!     total: 30,
//!     total_pages: 3,
//! };
//! let outcome = session.apply_page(request.ticket, page);
//! assert!(matches!(outcome, FetchOutcome::Appended { page: 1, .. }));
//! assert!(session.show_load_more());
//! ```

use crate::domain::Image;
use std::fmt;

/// Generation token identifying one dispatched fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Wraps a raw generation number.
    #[must_use]
    pub const fn new(generation: u64) -> Self {
        Self(generation)
    }

    /// Returns the raw generation number.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fetch the caller must dispatch to the query service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Ticket to hand back with the response.
    pub ticket: FetchTicket,
    /// Non-empty query text.
    pub query: String,
    /// Page to fetch, 1-based.
    pub page: u32,
}

/// One page of results as returned by the query service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    /// Images on this page, in API order.
    pub results: Vec<Image>,
    /// Total number of matches across all pages.
    pub total: u64,
    /// Total number of pages at the requested page size.
    pub total_pages: u32,
}

/// Lifecycle phase of the session.
///
/// A single tagged value replaces independent `loading`/`error` flags so that
/// combinations like "loading and failed" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// No query; nothing to fetch.
    Idle,

    /// A fetch for `(query, page)` is outstanding.
    Fetching {
        query: String,
        page: u32,
        ticket: FetchTicket,
        /// `has_more` as it was before dispatch; restored if the fetch fails.
        has_more: bool,
    },

    /// The last fetch succeeded.
    Ready {
        query: String,
        page: u32,
        has_more: bool,
    },

    /// The last fetch failed. Accumulated results are kept.
    Failed {
        query: String,
        page: u32,
        has_more: bool,
    },
}

/// Result of applying a response to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Images were appended.
    Appended {
        /// Page the images belong to.
        page: u32,
        /// Index of the first appended image in the result list.
        first_new: usize,
        /// Number of appended images.
        count: usize,
    },

    /// The query matched nothing. Pagination is disabled for this session.
    NoResults,

    /// The fetch failed; the error flag is raised.
    Failed,

    /// The response belongs to a fetch that is no longer outstanding.
    Stale,
}

/// State of the search controller.
///
/// Owns the accumulated results; the presentation layer only reads it.
#[derive(Debug, Clone)]
pub struct SearchSession {
    phase: SessionPhase,
    results: Vec<Image>,
    last_generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Creates an idle session with no results.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            results: Vec::new(),
            last_generation: 0,
        }
    }

    /// Starts a new session for `text`.
    ///
    /// Resets the page to 1 and clears the results before anything else. An
    /// empty query moves the session to [`SessionPhase::Idle`] and returns
    /// `None`; otherwise the fetch for page 1 is returned. Any fetch still
    /// outstanding from the previous query becomes stale.
    pub fn set_query(&mut self, text: &str) -> Option<FetchRequest> {
        let _span = tracing::debug_span!("set_query", query = %text).entered();

        self.results.clear();

        if text.is_empty() {
            tracing::debug!("empty query, session idle");
            self.phase = SessionPhase::Idle;
            return None;
        }

        Some(self.dispatch(text.to_string(), 1, false))
    }

    /// Advances to the next page.
    ///
    /// Only valid while no fetch is outstanding and more pages remain; returns
    /// `None` (and changes nothing) otherwise.
    pub fn request_next_page(&mut self) -> Option<FetchRequest> {
        let (query, page) = match &self.phase {
            SessionPhase::Ready { query, page, has_more: true }
            | SessionPhase::Failed { query, page, has_more: true } => (query.clone(), *page),
            other => {
                tracing::debug!(phase = ?other, "next page refused");
                return None;
            }
        };

        tracing::debug!(query = %query, next_page = page + 1, "advancing page");
        Some(self.dispatch(query, page + 1, true))
    }

    /// Applies a successful response.
    ///
    /// A zero `total` disables pagination without touching the results.
    /// Otherwise the page's images are appended in arrival order (duplicates
    /// across pages are kept) and `has_more` becomes `total_pages != page`.
    pub fn apply_page(&mut self, ticket: FetchTicket, response: SearchPage) -> FetchOutcome {
        let Some((query, page, _)) = self.take_outstanding(ticket) else {
            return FetchOutcome::Stale;
        };

        if response.total == 0 {
            tracing::debug!(query = %query, page, "query returned no results");
            self.phase = SessionPhase::Ready { query, page, has_more: false };
            return FetchOutcome::NoResults;
        }

        let first_new = self.results.len();
        let count = response.results.len();
        self.results.extend(response.results);
        let has_more = response.total_pages != page;

        tracing::debug!(
            query = %query,
            page,
            appended = count,
            total_results = self.results.len(),
            total_pages = response.total_pages,
            has_more,
            "page applied"
        );

        self.phase = SessionPhase::Ready { query, page, has_more };
        FetchOutcome::Appended { page, first_new, count }
    }

    /// Applies a failed fetch.
    ///
    /// Raises the error flag and keeps both the results and `has_more` as they
    /// were before the attempt.
    pub fn apply_failure(&mut self, ticket: FetchTicket) -> FetchOutcome {
        let Some((query, page, has_more)) = self.take_outstanding(ticket) else {
            return FetchOutcome::Stale;
        };

        tracing::debug!(query = %query, page, "fetch failed");
        self.phase = SessionPhase::Failed { query, page, has_more };
        FetchOutcome::Failed
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Current query text, empty when idle.
    #[must_use]
    pub fn query(&self) -> &str {
        match &self.phase {
            SessionPhase::Idle => "",
            SessionPhase::Fetching { query, .. }
            | SessionPhase::Ready { query, .. }
            | SessionPhase::Failed { query, .. } => query,
        }
    }

    /// Current page cursor (1 when idle).
    #[must_use]
    pub const fn page(&self) -> u32 {
        match &self.phase {
            SessionPhase::Idle => 1,
            SessionPhase::Fetching { page, .. }
            | SessionPhase::Ready { page, .. }
            | SessionPhase::Failed { page, .. } => *page,
        }
    }

    /// Accumulated results in arrival order.
    #[must_use]
    pub fn images(&self) -> &[Image] {
        &self.results
    }

    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Fetching { .. })
    }

    /// Whether the last fetch failed.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        matches!(self.phase, SessionPhase::Failed { .. })
    }

    /// Whether more pages remain beyond the current one.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        match &self.phase {
            SessionPhase::Idle => false,
            SessionPhase::Fetching { has_more, .. }
            | SessionPhase::Ready { has_more, .. }
            | SessionPhase::Failed { has_more, .. } => *has_more,
        }
    }

    /// Whether the "load more" affordance should be offered.
    #[must_use]
    pub const fn show_load_more(&self) -> bool {
        self.has_more() && !self.is_loading()
    }

    /// Ticket of the outstanding fetch, if any.
    #[must_use]
    pub const fn outstanding(&self) -> Option<FetchTicket> {
        match &self.phase {
            SessionPhase::Fetching { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    fn dispatch(&mut self, query: String, page: u32, has_more: bool) -> FetchRequest {
        self.last_generation += 1;
        let ticket = FetchTicket::new(self.last_generation);

        tracing::debug!(query = %query, page, ticket = %ticket, "dispatching fetch");

        self.phase = SessionPhase::Fetching {
            query: query.clone(),
            page,
            ticket,
            has_more,
        };

        FetchRequest { ticket, query, page }
    }

    /// Returns `(query, page, has_more)` of the outstanding fetch if `ticket` matches it.
    fn take_outstanding(&self, ticket: FetchTicket) -> Option<(String, u32, bool)> {
        match &self.phase {
            SessionPhase::Fetching { query, page, ticket: current, has_more } if *current == ticket => {
                Some((query.clone(), *page, *has_more))
            }
            _ => {
                tracing::debug!(
                    ticket = %ticket,
                    outstanding = ?self.outstanding(),
                    "discarding stale response"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(ids: &[&str], total: u64, total_pages: u32) -> SearchPage {
        SearchPage {
            results: ids.iter().map(|id| Image::new(*id, *id)).collect(),
            total,
            total_pages,
        }
    }

    #[test]
    fn new_session_is_idle() {
        let session = SearchSession::new();
        assert_eq!(session.phase(), &SessionPhase::Idle);
        assert_eq!(session.page(), 1);
        assert!(!session.is_loading());
        assert!(!session.has_error());
        assert!(!session.has_more());
    }

    #[test]
    fn tickets_increase_with_every_dispatch() {
        let mut session = SearchSession::new();
        let first = session.set_query("a").unwrap();
        let second = session.set_query("b").unwrap();
        assert!(second.ticket > first.ticket);
    }

    #[test]
    fn next_page_refused_while_fetching() {
        let mut session = SearchSession::new();
        let request = session.set_query("dogs").unwrap();
        session.apply_page(request.ticket, page_of(&["a"], 30, 3));

        let second = session.request_next_page().unwrap();
        assert_eq!(second.page, 2);
        assert!(session.request_next_page().is_none());
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn next_page_refused_when_exhausted() {
        let mut session = SearchSession::new();
        let request = session.set_query("cats").unwrap();
        session.apply_page(request.ticket, page_of(&["a"], 1, 1));
        assert!(session.request_next_page().is_none());
    }

    #[test]
    fn failure_keeps_has_more_and_allows_advancing() {
        let mut session = SearchSession::new();
        let request = session.set_query("dogs").unwrap();
        session.apply_page(request.ticket, page_of(&["a", "b"], 30, 3));
        let second = session.request_next_page().unwrap();

        assert_eq!(session.apply_failure(second.ticket), FetchOutcome::Failed);
        assert!(session.has_error());
        assert!(session.has_more());
        assert_eq!(session.images().len(), 2);

        let third = session.request_next_page().unwrap();
        assert_eq!(third.page, 3);
        assert!(!session.has_error());
    }

    #[test]
    fn failure_on_first_page_disables_load_more() {
        let mut session = SearchSession::new();
        let request = session.set_query("dogs").unwrap();
        session.apply_failure(request.ticket);
        assert!(!session.show_load_more());
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut session = SearchSession::new();
        let old = session.set_query("old").unwrap();
        let current = session.set_query("new").unwrap();

        assert_eq!(session.apply_failure(old.ticket), FetchOutcome::Stale);
        assert_eq!(session.outstanding(), Some(current.ticket));
        assert!(!session.has_error());
    }

    #[test]
    fn empty_page_with_nonzero_total_appends_nothing() {
        let mut session = SearchSession::new();
        let request = session.set_query("x").unwrap();
        let outcome = session.apply_page(request.ticket, page_of(&[], 5, 1));
        assert_eq!(outcome, FetchOutcome::Appended { page: 1, first_new: 0, count: 0 });
        assert!(!session.has_more());
    }
}
