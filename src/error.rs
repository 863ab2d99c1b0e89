use thiserror::Error;

/// Errors surfaced by the fetch and notification paths.
///
/// Malformed listing containers and unparsable prices are not errors:
/// extraction degrades to partial records and prices degrade to zero.
#[derive(Debug, Error)]
pub enum Error {
    /// A request was issued without any search term.
    #[error("no search term provided")]
    MissingSearchTerm,

    /// The search URL could not be constructed.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport-level failure talking to the marketplace.
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The marketplace answered with a non-success status.
    #[error("unexpected response status {status}")]
    Http { status: u16 },

    /// The Slack access token is not configured.
    #[error("invalid slack access token, please set \"SLACK_ACCESS_TOKEN\"")]
    MissingToken,
}
