//! Response Cache Module
//!
//! Thread-safe handle over a [`CacheStore`] plus the reaper that expires it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_reaper;

/// Smallest accepted interval; a zero-period ticker is invalid.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

// == Response Cache ==
/// Memoizes raw response bodies by request URL for a fixed interval.
///
/// Every operation, including the reaper's sweep, takes one mutex over the
/// whole map. Lookups do not check freshness: an entry older than the
/// interval stays visible until the next sweep removes it, so the worst-case
/// staleness is just under twice the interval.
///
/// Each cache owns its reaper. Calling [`shutdown`](Self::shutdown) or
/// dropping the cache stops it. Share a cache between callers with an `Arc`.
///
/// # Example
/// ```rust,no_run
/// use std::time::Duration;
/// use pokedex::cache::ResponseCache;
///
/// #[tokio::main]
/// async fn main() {
///     let cache = ResponseCache::new(Duration::from_secs(5));
///     cache.insert("https://pokeapi.co/api/v2/location-area/", b"{}".to_vec());
///     assert!(cache.lookup("https://pokeapi.co/api/v2/location-area/").is_some());
/// }
/// ```
#[derive(Debug)]
pub struct ResponseCache {
    store: Arc<Mutex<CacheStore>>,
    shutdown_tx: watch::Sender<bool>,
    reaper: JoinHandle<()>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Intervals below [`MIN_INTERVAL`] are raised to it.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime context.
    pub fn new(interval: Duration) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper(Arc::clone(&store), interval, shutdown_rx);

        Self {
            store,
            shutdown_tx,
            reaper,
        }
    }

    fn locked(&self) -> MutexGuard<'_, CacheStore> {
        // The map is never left half-updated, so a poisoned lock is still usable
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Insert ==
    /// Stores `payload` under `key`, replacing any previous entry and
    /// resetting its age.
    pub fn insert(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        self.locked().insert(key.into(), payload.into());
    }

    // == Lookup ==
    /// Returns the payload stored under `key`, stale or not, or `None` if
    /// there is no entry.
    pub fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        self.locked().lookup(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.locked().stats()
    }

    // == Length ==
    /// Returns the current number of entries, including stale ones not yet swept.
    pub fn len(&self) -> usize {
        self.locked().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.locked().is_empty()
    }

    // == Interval ==
    /// Returns the expiry interval, which is also the reaper's period.
    pub fn interval(&self) -> Duration {
        self.locked().interval()
    }

    // == Shutdown ==
    /// Signals the reaper to stop. Entries already stored remain readable but
    /// no longer expire.
    ///
    /// Called automatically on drop.
    pub fn shutdown(&self) {
        if !self.shutdown_tx.send_replace(true) {
            debug!("Stopping cache reaper");
        }
    }

    // == Reaper State ==
    /// Returns true once the reaper task has exited.
    pub fn is_reaper_finished(&self) -> bool {
        self.reaper.is_finished()
    }
}

impl Drop for ResponseCache {
    fn drop(&mut self) {
        self.shutdown_tx.send_replace(true);
    }
}
