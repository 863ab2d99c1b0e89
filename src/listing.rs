use serde::{Deserialize, Serialize};

/// A single Carousell post with the information extracted off a listing card.
///
/// Field values are best-effort: a card that exposes fewer text fragments
/// than expected keeps its id but leaves the text fields empty, and an
/// unparsable price degrades to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Stable identifier taken from the card's identity attribute,
    /// used as the dedup key.
    pub id: String,

    /// Listing title
    pub title: String,

    /// Short description shown on the card
    pub description: String,

    /// Asking price in SGD, 0.0 when unparsable
    pub price: f64,

    /// Item condition, e.g. "Like new"
    pub condition: String,

    /// Absolute link to the listing, empty when the card exposed no link
    pub url: String,

    /// Seller username
    pub user: String,

    /// Relative posting time, e.g. "2 days ago"
    pub time: String,
}

impl Listing {
    /// Returns a summarized one-listing output suitable for console or chat.
    pub fn summary(&self) -> String {
        format!(
            "{} - S${:.0} - {}\n{}\n",
            self.title, self.price, self.condition, self.url
        )
    }
}

/// Summarized output for a batch of listings.
pub fn summarize(listings: &[Listing]) -> Vec<String> {
    listings.iter().map(Listing::summary).collect()
}
