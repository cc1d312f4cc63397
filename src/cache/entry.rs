//! Cache Entry Module
//!
//! Defines a single memoized response body and its creation time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A raw response body together with the instant it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response body, undecoded
    pub payload: Vec<u8>,
    /// When the entry was inserted (or last replaced)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self::with_created_at(payload, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn with_created_at(payload: Vec<u8>, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `interval` as of `now`.
    ///
    /// Boundary condition: the comparison is strict, so an entry whose age is
    /// exactly `interval` is still live and survives until the next sweep.
    pub fn is_expired_at(&self, now: Instant, interval: Duration) -> bool {
        self.age_at(now) > interval
    }
}
