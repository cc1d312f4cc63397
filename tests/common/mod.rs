//! Fake catalog server shared by the integration tests.
//!
//! Serves a five-area listing in pages of two, a couple of detail records and
//! one deliberately malformed document, and records every request URI.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use pokedex::{CatalogClient, ResponseCache};

pub const AREAS: [&str; 5] = [
    "canalave-city-area",
    "eterna-city-area",
    "pastoria-city-area",
    "sunyshore-city-area",
    "veilstone-city-area",
];

const PAGE_SIZE: usize = 2;

#[derive(Clone)]
struct FakeState {
    origin: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeState {
    fn record(&self, uri: &Uri) {
        self.requests.lock().unwrap().push(uri.to_string());
    }
}

/// Handle to a running fake catalog.
pub struct FakeCatalog {
    /// API root, e.g. `http://127.0.0.1:PORT/api/v2/`
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalog {
    /// Number of requests received for `path_and_query`.
    pub fn hits(&self, path_and_query: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|uri| uri.as_str() == path_and_query)
            .count()
    }

    pub fn total_requests(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// A client over a fresh cache with the given interval.
    pub fn client(&self, interval: Duration) -> CatalogClient {
        let cache = Arc::new(ResponseCache::new(interval));
        CatalogClient::new(&self.base_url, cache, Duration::from_secs(5)).unwrap()
    }
}

/// Binds the fake catalog to an ephemeral port and serves it in the background.
pub async fn spawn_fake_catalog() -> FakeCatalog {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = FakeState {
        origin: origin.clone(),
        requests: Arc::clone(&requests),
    };
    let app = Router::new()
        .route("/api/v2/location-area/", get(location_area_page))
        .route("/api/v2/location-area/:name", get(location_area_detail))
        .route("/api/v2/pokemon/:name", get(pokemon_detail))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeCatalog {
        base_url: format!("{}/api/v2/", origin),
        requests,
    }
}

#[derive(Deserialize)]
struct PageQuery {
    #[serde(default)]
    offset: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    PAGE_SIZE
}

async fn location_area_page(
    State(state): State<FakeState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Json<serde_json::Value> {
    state.record(&uri);

    let page_url = |offset: usize| {
        format!(
            "{}/api/v2/location-area/?offset={}&limit={}",
            state.origin, offset, query.limit
        )
    };
    let results: Vec<_> = AREAS
        .iter()
        .skip(query.offset)
        .take(query.limit)
        .map(|name| {
            json!({
                "name": name,
                "url": format!("{}/api/v2/location-area/{}/", state.origin, name),
            })
        })
        .collect();
    let next_offset = query.offset + query.limit;
    let next = (next_offset < AREAS.len()).then(|| page_url(next_offset));
    let previous = (query.offset > 0).then(|| page_url(query.offset.saturating_sub(query.limit)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn location_area_detail(
    State(state): State<FakeState>,
    uri: Uri,
    Path(name): Path<String>,
) -> Response {
    state.record(&uri);

    match name.as_str() {
        "canalave-city-area" => Json(json!({
            "id": 1,
            "name": name,
            "pokemon_encounters": [
                { "pokemon": { "name": "tentacool", "url": "" }, "version_details": [] },
                { "pokemon": { "name": "wingull", "url": "" }, "version_details": [] },
            ],
        }))
        .into_response(),
        "broken-area" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn pokemon_detail(
    State(state): State<FakeState>,
    uri: Uri,
    Path(name): Path<String>,
) -> Response {
    state.record(&uri);

    match name.as_str() {
        "pidgey" => Json(json!({
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "stats": [
                { "base_stat": 40, "effort": 0, "stat": { "name": "hp", "url": "" } },
                { "base_stat": 56, "effort": 1, "stat": { "name": "speed", "url": "" } },
            ],
            "types": [
                { "slot": 1, "type": { "name": "normal", "url": "" } },
                { "slot": 2, "type": { "name": "flying", "url": "" } },
            ],
        }))
        .into_response(),
        "mewtwo" => Json(json!({
            "name": "mewtwo",
            "base_experience": 340,
            "height": 20,
            "weight": 1220,
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}
