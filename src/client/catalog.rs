//! Catalog Client
//!
//! HTTP access to the catalog API with response memoization.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::{normalize_base_url, Config};
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Fetches catalog documents, serving repeated URLs from a [`ResponseCache`].
///
/// The cache is keyed by the full request URL and holds the raw body. A body
/// is cached as soon as it has been read, before it is decoded, so a
/// document that fails to decode is not requested again until it expires.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    cache: Arc<ResponseCache>,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client rooted at `base_url` that memoizes into `cache`.
    pub fn new(base_url: &str, cache: Arc<ResponseCache>, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| PokedexError::Request {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            cache,
            base_url,
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config, cache: Arc<ResponseCache>) -> Result<Self> {
        Self::new(&config.base_url, cache, config.http_timeout())
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    // == Endpoints ==
    /// URL of the first page of the location area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the raw body at `url`, from the cache when present.
    ///
    /// On a miss the response is fetched, rejected if its status is above
    /// 299, and its complete body is inserted into the cache under `url`.
    /// Failed requests are never cached.
    pub async fn fetch_raw(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.lookup(url) {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }
        debug!("Cache miss for {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| PokedexError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() > 299 {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        } else if status != reqwest::StatusCode::OK {
            warn!("Request to {} returned status {}", url, status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| PokedexError::Request {
                url: url.to_string(),
                source,
            })?
            .to_vec();

        debug!("Caching {} bytes for {}", body.len(), url);
        self.cache.insert(url, body.clone());

        Ok(body)
    }

    /// Fetches `url` through the cache and decodes it as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_raw(url).await?;
        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    // == Documents ==
    /// Fetches one page of the location area listing.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// requests the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.location_areas_url()).await,
        }
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}
