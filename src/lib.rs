//! Fetches Carousell (Singapore) listings and notifies a Slack channel
//! about new posts.
//!
//! The extraction and dedup primitives are usable on their own: parse a
//! search-result page, run [`extract::extract`] over it, and feed the
//! records through an [`AlertCache`] to decide which ones are genuinely
//! new.

// Re-export modules
pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod listing;
pub mod notify;
pub mod poller;
pub mod request;

// Re-export commonly used types for convenience
pub use cache::AlertCache;
pub use error::Error;
pub use listing::Listing;
pub use request::SearchRequest;
