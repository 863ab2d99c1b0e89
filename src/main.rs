use clap::Parser;

use carousell_watch::config::WatchConfig;
use carousell_watch::error::Error;
use carousell_watch::fetch::Fetcher;
use carousell_watch::notify::Slack;
use carousell_watch::poller;
use carousell_watch::request::SearchRequest;

mod args;
use args::{Args, Command, build_config};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.command {
        Command::Get { terms, shorthand } => run_get(&args, terms, *shorthand).await,
        Command::Notify {
            terms,
            slack_channel,
            interval,
        } => run_notify(&args, terms, slack_channel.as_deref(), *interval).await,
    }
}

/// Logging is discarded entirely unless verbose mode is requested.
fn init_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::new()
            .filter_level(::log::LevelFilter::Off)
            .init();
    }
}

async fn run_get(args: &Args, terms: &[String], shorthand: bool) {
    let config = load_config(args, terms);
    let request = SearchRequest::from_config(&config);
    let fetcher = Fetcher::new();

    let listings = match fetcher.fetch_listings(&request).await {
        Ok(listings) => listings,
        Err(e) => fail(e),
    };

    // If user specifies that they want a summarized version of the output
    if shorthand {
        for listing in &listings {
            print!("{}", listing.summary());
            println!();
        }
        return;
    }

    println!("Obtained {} listings", listings.len());
    println!("{:#?}", listings);
}

async fn run_notify(
    args: &Args,
    terms: &[String],
    slack_channel: Option<&str>,
    interval: Option<u64>,
) {
    let mut config = load_config(args, terms);
    if let Some(channel) = slack_channel {
        config.slack_channel = Some(channel.to_string());
    }
    if let Some(minutes) = interval {
        config.interval_minutes = minutes;
    }

    let channel = match config.slack_channel.clone() {
        Some(channel) => channel,
        None => {
            eprintln!("Error: no slack channel provided, use --slack-channel or the config file");
            std::process::exit(1);
        }
    };

    let request = SearchRequest::from_config(&config);

    // Initialization banner
    println!(
        "\n***\nSetting up slack notifications with parameters:\nSearch Terms: {}\nInterval: {}\nSlack Channel: {}\n***\n",
        request.search_term(),
        config.interval_minutes,
        channel
    );

    let slack = match Slack::from_env() {
        Ok(slack) => slack,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let fetcher = Fetcher::new();
    if let Err(e) = poller::run(&fetcher, &request, &slack, &channel, config.interval_minutes).await
    {
        fail(e);
    }
}

fn load_config(args: &Args, terms: &[String]) -> WatchConfig {
    match build_config(args, terms) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    }
}

fn fail(error: Error) -> ! {
    match error {
        Error::MissingSearchTerm => eprintln!("Error: {}", error),
        _ => {
            ::log::error!("{}", error);
            eprintln!("Something unexpected happened");
        }
    }
    std::process::exit(1);
}
