//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the reaper for `store`.
///
/// The first sweep runs as soon as the task starts, then once every
/// `interval`. Each sweep holds the store's lock for the full scan. The task
/// exits when `true` is sent on the shutdown channel or when its sender is
/// dropped.
///
/// # Arguments
/// * `store` - The store shared with the cache's callers
/// * `interval` - Sweep period; must be non-zero
/// * `shutdown_rx` - Receiving half of the cache's stop signal
///
/// # Returns
/// A JoinHandle for the spawned task.
pub fn spawn_reaper(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("Starting cache reaper with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    // Lock is released before the next await
                    let (removed, remaining) = {
                        let mut guard = store.lock().unwrap_or_else(PoisonError::into_inner);
                        let removed = guard.remove_expired();
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!(
                            "Cache sweep: removed {} expired entries, {} remaining",
                            removed, remaining
                        );
                    } else {
                        debug!("Cache sweep: no expired entries found");
                    }
                }
            }
        }

        debug!("Cache reaper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_store(interval: Duration) -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new(interval)))
    }

    #[tokio::test]
    async fn test_reaper_removes_expired_entries() {
        let interval = Duration::from_millis(50);
        let store = shared_store(interval);
        store
            .lock()
            .unwrap()
            .insert("expire_soon".to_string(), b"value".to_vec());

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store.clone(), interval, shutdown_rx);

        // Several ticks past the interval
        tokio::time::sleep(Duration::from_millis(250)).await;

        {
            let mut guard = store.lock().unwrap();
            assert_eq!(guard.lookup("expire_soon"), None);
            assert_eq!(guard.stats().reaped, 1);
        }

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_reaper_preserves_fresh_entries() {
        let interval = Duration::from_secs(3600);
        let store = shared_store(interval);
        store
            .lock()
            .unwrap()
            .insert("long_lived".to_string(), b"value".to_vec());

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store.clone(), interval, shutdown_rx);

        // Let the immediate first sweep run
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(
            store.lock().unwrap().lookup("long_lived"),
            Some(b"value".to_vec())
        );

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_reaper_stops_on_shutdown_signal() {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(
            shared_store(Duration::from_secs(1)),
            Duration::from_secs(1),
            shutdown_rx,
        );

        shutdown_tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("reaper should stop after shutdown signal")
            .unwrap();
    }

    #[tokio::test]
    async fn test_reaper_stops_when_sender_dropped() {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(
            shared_store(Duration::from_secs(1)),
            Duration::from_secs(1),
            shutdown_rx,
        );

        drop(shutdown_tx);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("reaper should stop once the cache is gone")
            .unwrap();
    }

    #[tokio::test]
    async fn test_reaper_releases_store_after_stopping() {
        let store = shared_store(Duration::from_secs(1));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store.clone(), Duration::from_secs(1), shutdown_rx);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();

        assert_eq!(Arc::strong_count(&store), 1);
    }
}
