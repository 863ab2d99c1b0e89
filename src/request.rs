use crate::config::WatchConfig;
use crate::error::Error;
use url::Url;

/// Base origin of the marketplace
pub const ENDPOINT: &str = "https://www.carousell.sg";

/// A search request against the marketplace.
///
/// Built with `with_*` modifiers before being turned into a URL:
///
/// ```
/// use carousell_watch::request::SearchRequest;
///
/// let request = SearchRequest::new()
///     .with_search("mechanical keyboard")
///     .with_price_ceil(300)
///     .with_recent();
/// assert!(request.to_url().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SearchRequest {
    endpoint: String,
    search_term: String,
    query: Vec<(String, String)>,
}

impl SearchRequest {
    /// Creates a blank request against the default endpoint.
    pub fn new() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            search_term: String::new(),
            query: Vec::new(),
        }
    }

    /// Appends a search term. Terms are double-quoted and concatenate
    /// into a single search path segment.
    pub fn with_search(mut self, term: &str) -> Self {
        self.search_term.push_str(&format!("\"{}\"", term));
        self
    }

    /// Adds a minimum price filter.
    pub fn with_price_floor(mut self, px: u32) -> Self {
        self.query.push(("price_start".to_string(), px.to_string()));
        self
    }

    /// Adds a maximum price filter.
    pub fn with_price_ceil(mut self, px: u32) -> Self {
        self.query.push(("price_end".to_string(), px.to_string()));
        self
    }

    /// Restricts results to the latest listings.
    pub fn with_recent(mut self) -> Self {
        self.query.push(("addRecent".to_string(), "true".to_string()));
        self.query.push(("sort_by".to_string(), "3".to_string()));
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Fails when no search term was supplied. Checked before any
    /// network activity.
    pub fn validate(&self) -> Result<(), Error> {
        if self.search_term.is_empty() {
            return Err(Error::MissingSearchTerm);
        }
        Ok(())
    }

    /// Builds the full search URL, percent-encoding the search terms.
    pub fn to_url(&self) -> Result<Url, Error> {
        self.validate()?;

        let mut url = Url::parse(&self.endpoint)?;
        url.path_segments_mut()
            .expect("endpoint is a base url")
            .pop_if_empty()
            .push("search")
            .push(&self.search_term);

        for (key, value) in &self.query {
            url.query_pairs_mut().append_pair(key, value);
        }

        Ok(url)
    }

    /// Builds a request from a watch configuration. Zero price bounds
    /// mean "unset" and are not forwarded.
    pub fn from_config(config: &WatchConfig) -> Self {
        let mut request = Self::new();
        for term in &config.search_terms {
            request = request.with_search(term);
        }
        if config.recent {
            request = request.with_recent();
        }
        if config.price_floor != 0 {
            request = request.with_price_floor(config.price_floor);
        }
        if config.price_ceil != 0 {
            request = request.with_price_ceil(config.price_ceil);
        }
        request
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new()
    }
}
