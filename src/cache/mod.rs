//! Cache Module
//!
//! Time-expiring memoization of raw HTTP response bodies keyed by request URL.

mod entry;
mod response_cache;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use response_cache::{ResponseCache, MIN_INTERVAL};
pub use stats::CacheStats;
pub use store::CacheStore;
