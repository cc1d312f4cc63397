//! Configuration Module
//!
//! Handles loading the explorer's configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default catalog API root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the catalog API, always ending in `/`
    pub base_url: String,
    /// Cache expiry interval (and reaper period) in seconds
    pub cache_interval: u64,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_BASE_URL` - Catalog API root (default: https://pokeapi.co/api/v2/)
    /// - `POKEDEX_CACHE_INTERVAL_SECS` - Cache expiry interval in seconds (default: 5)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("POKEDEX_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.base_url),
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval)
                .max(1),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout)
                .max(1),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_interval: 5,
            http_timeout: 10,
        }
    }
}

/// Trims whitespace and guarantees a trailing slash so endpoint paths can be appended.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}
