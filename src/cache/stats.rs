//! Cache Statistics Module
//!
//! Tracks lookup hits and misses and the number of entries the reaper removed.

use std::fmt;

// == Cache Stats ==
/// Snapshot of cache activity counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry (stale or not)
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Entries removed by reaper sweeps
    pub reaped: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the lookup hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Reaped ==
    /// Adds `count` to the reaped counter.
    pub fn record_reaped(&mut self, count: usize) {
        self.reaped += count as u64;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entries: {}, hits: {}, misses: {}, reaped: {}, hit rate: {:.1}%",
            self.total_entries,
            self.hits,
            self.misses,
            self.reaped,
            self.hit_rate() * 100.0
        )
    }
}
