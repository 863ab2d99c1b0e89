use crate::cache::AlertCache;
use crate::error::Error;
use crate::fetch::Fetcher;
use crate::notify::Slack;
use crate::request::SearchRequest;
use std::time::Duration;

/// Runs the watch loop until a fetch fails.
///
/// The first fetch is the baseline: its listings are stored without
/// notification, since everything on the page is "new" to a fresh cache.
/// Every cycle after that runs with the anomaly check enabled, posting
/// one message per released listing.
///
/// One cycle runs to completion before the next is scheduled; the cache
/// is owned exclusively by this loop.
pub async fn run(
    fetcher: &Fetcher,
    request: &SearchRequest,
    slack: &Slack,
    channel: &str,
    interval_minutes: u64,
) -> Result<(), Error> {
    let mut cache = AlertCache::new();

    let listings = fetcher.fetch_listings(request).await?;
    cache.store(&listings);
    ::log::info!("Stored baseline of {} listings", listings.len());

    // tokio intervals must be non-zero
    let minutes = interval_minutes.max(1);
    let mut ticker = tokio::time::interval(Duration::from_secs(minutes * 60));
    // The first tick of a tokio interval completes immediately
    ticker.tick().await;

    loop {
        println!("Waiting for {} mins before next query", minutes);
        ticker.tick().await;

        let listings = fetcher.fetch_listings(request).await?;

        let mut released = Vec::new();
        cache.process_and_store(&listings, |listing| released.push(listing.clone()), true);
        ::log::info!(
            "Cycle fetched {} listings, releasing {} for notification",
            listings.len(),
            released.len()
        );

        for listing in &released {
            slack.notify(channel, &listing.summary()).await;
        }
    }
}
