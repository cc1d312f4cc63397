//! Cache Store Module
//!
//! The map behind the response cache. Not synchronized on its own; the
//! [`ResponseCache`](crate::cache::ResponseCache) wraps it in a single mutex
//! shared with the reaper.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to response body mapping with a fixed expiry interval.
#[derive(Debug)]
pub struct CacheStore {
    /// Response bodies keyed by request URL
    entries: HashMap<String, CacheEntry>,
    /// Entries older than this are removed by the next sweep
    interval: Duration,
    /// Activity counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
            stats: CacheStats::new(),
        }
    }

    // == Interval ==
    /// Returns the configured expiry interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Insert ==
    /// Stores `payload` under `key`, replacing any previous entry.
    ///
    /// The creation instant is reset, so a re-inserted key starts aging from zero.
    pub fn insert(&mut self, key: String, payload: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    // == Lookup ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Staleness is not checked here: an entry past its interval is still
    /// returned until a sweep removes it.
    pub fn lookup(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove Expired ==
    /// Removes every entry whose age exceeds the interval as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn remove_expired_at(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        removed
    }

    /// Removes every entry whose age exceeds the interval right now.
    pub fn remove_expired(&mut self) -> usize {
        self.remove_expired_at(Instant::now())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
