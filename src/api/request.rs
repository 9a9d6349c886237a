//! Search request construction and ticket round-tripping.
//!
//! The plugin never performs HTTP itself: it hands a [`SearchRequest`] to the
//! Zellij host, which answers later with a `WebRequestResult` event carrying the
//! same context map. The context is how a response finds its [`FetchTicket`].

use crate::domain::{FetchRequest, FetchTicket};
use crate::Config;
use std::collections::BTreeMap;

/// Context key holding the fetch generation.
const CONTEXT_GENERATION: &str = "generation";

/// Context key holding the query, for logging only.
const CONTEXT_QUERY: &str = "query";

/// Context key holding the page, for logging only.
const CONTEXT_PAGE: &str = "page";

/// Context key marking requests issued by the search controller.
const CONTEXT_SOURCE: &str = "source";

/// Value of [`CONTEXT_SOURCE`] for search requests.
const SEARCH_SOURCE: &str = "photoseek-search";

/// A fully-built `GET` request for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Absolute URL including the query string.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Opaque context echoed back by the host with the response.
    pub context: BTreeMap<String, String>,
}

impl SearchRequest {
    /// Builds the request for `fetch` against the configured API.
    ///
    /// # Examples
    ///
    /// ```
    /// use photoseek::api::SearchRequest;
    /// use photoseek::domain::{FetchRequest, FetchTicket};
    /// use photoseek::Config;
    ///
    /// let config = Config { access_key: "KEY".to_string(), ..Default::default() };
    /// let fetch = FetchRequest { ticket: FetchTicket::new(7), query: "red fox".to_string(), page: 2 };
    ///
    /// let request = SearchRequest::build(&config, &fetch);
    /// assert_eq!(
    ///     request.url,
    ///     "https://api.unsplash.com/search/photos?query=red%20fox&page=2&per_page=12"
    /// );
    /// assert_eq!(request.headers["Authorization"], "Client-ID KEY");
    /// ```
    #[must_use]
    pub fn build(config: &Config, fetch: &FetchRequest) -> Self {
        let url = format!(
            "{}search/photos?query={}&page={}&per_page={}",
            config.api_base_url,
            urlencoding::encode(&fetch.query),
            fetch.page,
            config.per_page,
        );

        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), format!("Client-ID {}", config.access_key));
        headers.insert("Accept-Version".to_string(), "v1".to_string());

        let mut context = BTreeMap::new();
        context.insert(CONTEXT_SOURCE.to_string(), SEARCH_SOURCE.to_string());
        context.insert(CONTEXT_GENERATION.to_string(), fetch.ticket.generation().to_string());
        context.insert(CONTEXT_QUERY.to_string(), fetch.query.clone());
        context.insert(CONTEXT_PAGE.to_string(), fetch.page.to_string());

        tracing::debug!(url = %url, ticket = %fetch.ticket, "built search request");

        Self { url, headers, context }
    }
}

/// Recovers the ticket from a response context.
///
/// Returns `None` when the context does not belong to a search request, so the
/// caller can ignore responses to other web requests.
#[must_use]
pub fn ticket_from_context(context: &BTreeMap<String, String>) -> Option<FetchTicket> {
    if context.get(CONTEXT_SOURCE).map(String::as_str) != Some(SEARCH_SOURCE) {
        return None;
    }

    context
        .get(CONTEXT_GENERATION)
        .and_then(|g| g.parse::<u64>().ok())
        .map(FetchTicket::new)
}
