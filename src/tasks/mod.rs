//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: removes cache entries older than the cache interval, once per interval

mod reaper;

pub use reaper::spawn_reaper;
