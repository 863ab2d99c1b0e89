use crate::listing::Listing;
use std::collections::HashMap;

/// Process-lifetime cache of listing ids that have already been handled.
///
/// Entries are never evicted, so memory grows with the number of distinct
/// listings observed over a search session. Each polling session owns its
/// own cache; nothing here is shared across concurrent sessions.
#[derive(Debug, Default)]
pub struct AlertCache {
    alerts: HashMap<String, bool>,
}

impl AlertCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            alerts: HashMap::new(),
        }
    }

    /// Returns whether a listing id has been seen before.
    pub fn contains(&self, id: &str) -> bool {
        self.alerts.contains_key(id)
    }

    /// Number of distinct ids seen so far.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Marks every listing in the batch as seen without notifying.
    ///
    /// Used once per session to take the baseline snapshot.
    pub fn store(&mut self, listings: &[Listing]) {
        for listing in listings {
            self.alerts.insert(listing.id.clone(), true);
        }
    }

    /// Releases the unseen part of a batch to `notify`, then remembers it.
    ///
    /// The batch is partitioned in its original order and every id is
    /// marked seen as a side effect, so re-processing the same batch is a
    /// no-op the second time.
    ///
    /// When `check_listings` is set and *every* listing in the batch is
    /// unseen, the whole batch is withheld: new posts arrive sparsely
    /// relative to a full result page, so an all-new batch is far more
    /// likely an upstream glitch (page swap, search reset, parse failure)
    /// than a genuine burst. Pass `false` to bypass the check.
    pub fn process_and_store<F>(&mut self, listings: &[Listing], mut notify: F, check_listings: bool)
    where
        F: FnMut(&Listing),
    {
        let mut to_be_alerted = Vec::new();
        for listing in listings {
            if !self.alerts.contains_key(&listing.id) {
                self.alerts.insert(listing.id.clone(), true);
                to_be_alerted.push(listing);
            }
        }

        if to_be_alerted.len() != listings.len() || !check_listings {
            for listing in to_be_alerted {
                notify(listing);
            }
        }
    }
}
