use carousell_watch::config::WatchConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carousell-watch")]
#[command(about = "Fetches Carousell listings and notifies user about new listings")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Search recent listings
    #[arg(short, long, global = true)]
    pub recent: bool,

    /// Minimum price of listing (0 means unset)
    #[arg(short = 'f', long, global = true, default_value_t = 0)]
    pub price_floor: u32,

    /// Maximum price of listing (0 means unset)
    #[arg(short = 'c', long, global = true, default_value_t = 0)]
    pub price_ceil: u32,

    /// Enable verbose mode with logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load search parameters from a JSON config file instead of flags
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetches carousell listings
    Get {
        /// Search terms, at least one should be provided
        terms: Vec<String>,

        /// Display listings output in summarized form
        #[arg(short, long)]
        shorthand: bool,
    },

    /// Notify user on new carousell listings
    Notify {
        /// Search terms, at least one should be provided
        terms: Vec<String>,

        /// Slack channel id to send notifications, e.g. C0341H4MD1P
        #[arg(long)]
        slack_channel: Option<String>,

        /// Interval in minutes
        #[arg(short, long)]
        interval: Option<u64>,
    },
}

/// Builds the watch configuration from the config file when given,
/// otherwise from the command-line flags.
pub fn build_config(
    args: &Args,
    terms: &[String],
) -> Result<WatchConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &args.config {
        return WatchConfig::from_file(path);
    }

    let mut config = WatchConfig::new(terms.to_vec());
    config.recent = args.recent;
    config.price_floor = args.price_floor;
    config.price_ceil = args.price_ceil;
    Ok(config)
}
