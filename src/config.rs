use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a watch session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Search terms, at least one required before any fetch
    pub search_terms: Vec<String>,

    /// Whether to restrict results to the latest listings
    #[serde(default)]
    pub recent: bool,

    /// Minimum price of a listing, 0 meaning unset
    #[serde(default)]
    pub price_floor: u32,

    /// Maximum price of a listing, 0 meaning unset
    #[serde(default)]
    pub price_ceil: u32,

    /// Polling interval in minutes
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,

    /// Slack channel id to post notifications to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_channel: Option<String>,
}

/// Default value for interval_minutes
fn default_interval_minutes() -> u64 {
    10
}

impl WatchConfig {
    /// Creates a configuration with default values for the given terms.
    pub fn new(search_terms: Vec<String>) -> Self {
        Self {
            search_terms,
            recent: false,
            price_floor: 0,
            price_ceil: 0,
            interval_minutes: default_interval_minutes(),
            slack_channel: None,
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
