use crate::error::Error;
use crate::extract;
use crate::listing::Listing;
use crate::request::SearchRequest;
use scraper::Html;
use std::time::Duration;

/// HTTP transport for search-result pages.
///
/// Owns the shared client; one fetcher serves a whole polling session.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    /// Fetches the search-result page for a request and extracts its
    /// listings.
    ///
    /// Transport and HTTP failures are fatal to the caller; there is no
    /// retry or backoff here.
    pub async fn fetch_listings(&self, request: &SearchRequest) -> Result<Vec<Listing>, Error> {
        let url = request.to_url()?;

        ::log::info!("Send req [{}]", url);
        let response = self.client.get(url).send().await?;
        ::log::info!("Recv resp status_code[{}]", response.status());

        if !response.status().is_success() {
            return Err(Error::Http {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let document = Html::parse_document(&body);
        Ok(extract::extract(&document))
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
