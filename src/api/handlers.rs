//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Handlers are thin
//! orchestration: check the cache, delegate to the upstream fetcher on a
//! miss, populate the cache on success, return the payload.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::Result;
use crate::metrics::HttpMetrics;
use crate::models::{HealthResponse, TrendingQuery};
use crate::tmdb::{TmdbClient, TrendingWindow, MAX_PAGES};

/// Application state shared across all handlers.
///
/// The cache is one shared instance across all concurrent requests. There is
/// no per-key exclusivity: concurrent misses on the same key each fetch
/// upstream independently, and the last writer wins.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Upstream catalog API client
    pub tmdb: Arc<TmdbClient>,
    /// Prometheus registry and HTTP metric families
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: ResponseCache, tmdb: TmdbClient, metrics: HttpMetrics) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            tmdb: Arc::new(tmdb),
            metrics: Arc::new(metrics),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ResponseCache::new(config.max_entries, config.cache_ttl);
        let tmdb = TmdbClient::new(config)?;
        let metrics = HttpMetrics::new()?;
        Ok(Self::new(cache, tmdb, metrics))
    }
}

// == Cache Keys ==
/// The cache key fully determines request equivalence; two requests with the
/// same key are served identical payloads within the TTL window.

fn trending_cache_key(window: TrendingWindow) -> String {
    format!("trending_movies_{}_{}", window.as_str(), MAX_PAGES)
}

fn movie_details_cache_key(id: &str) -> String {
    format!("movie_details_{}", id)
}

/// Handler for GET /movies/trending
///
/// Returns trending movies aggregated across up to [`MAX_PAGES`] upstream
/// pages. Unknown window values are coerced to `day`.
pub async fn trending_handler(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<Value>> {
    let window = TrendingWindow::from_query(query.window.as_deref());
    let cache_key = trending_cache_key(window);

    if let Some(cached) = state.cache.write().await.get(&cache_key) {
        debug!(key = %cache_key, "Serving trending movies from cache");
        return Ok(Json(cached));
    }

    let movies = state.tmdb.fetch_trending(window).await.map_err(|err| {
        error!(error = %err, window = window.as_str(), "Error fetching trending movies");
        err
    })?;

    let payload = Value::Array(movies);
    state
        .cache
        .write()
        .await
        .insert(cache_key, payload.clone());

    Ok(Json(payload))
}

/// Handler for GET /movies/:id
///
/// Returns a single movie detail record, passed through from upstream and
/// cached. Ids are not validated locally; bad ids fail at the upstream.
pub async fn movie_details_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let cache_key = movie_details_cache_key(&id);

    if let Some(cached) = state.cache.write().await.get(&cache_key) {
        debug!(key = %cache_key, "Serving movie details from cache");
        return Ok(Json(cached));
    }

    let details = state.tmdb.fetch_movie_details(&id).await.map_err(|err| {
        error!(error = %err, movie_id = %id, "Error fetching movie details");
        err
    })?;

    state
        .cache
        .write()
        .await
        .insert(cache_key, details.clone());

    Ok(Json(details))
}

/// Handler for GET /metrics
///
/// Renders the Prometheus text exposition of all registered families.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<Response> {
    let body = state.metrics.render()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}

/// Handler for GET /health
///
/// Always 200.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        // Unroutable base URL: any test that accidentally reaches upstream fails
        let config = Config {
            tmdb_base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        AppState::from_config(&config).unwrap()
    }

    #[test]
    fn test_trending_cache_key_format() {
        assert_eq!(
            trending_cache_key(TrendingWindow::Day),
            "trending_movies_day_5"
        );
        assert_eq!(
            trending_cache_key(TrendingWindow::Week),
            "trending_movies_week_5"
        );
    }

    #[test]
    fn test_movie_details_cache_key_format() {
        assert_eq!(movie_details_cache_key("42"), "movie_details_42");
    }

    #[tokio::test]
    async fn test_trending_handler_served_from_cache() {
        let state = test_state();
        state.cache.write().await.insert(
            "trending_movies_day_5".to_string(),
            json!([{"id": 1, "title": "Cached Movie"}]),
        );

        let result = trending_handler(
            State(state),
            Query(TrendingQuery { window: None }),
        )
        .await;

        let Json(payload) = result.expect("cached payload should be returned");
        assert_eq!(payload, json!([{"id": 1, "title": "Cached Movie"}]));
    }

    #[tokio::test]
    async fn test_movie_details_handler_served_from_cache() {
        let state = test_state();
        state
            .cache
            .write()
            .await
            .insert("movie_details_42".to_string(), json!({"id": 42}));

        let result =
            movie_details_handler(State(state), Path("42".to_string())).await;

        let Json(payload) = result.expect("cached payload should be returned");
        assert_eq!(payload, json!({"id": 42}));
    }

    #[tokio::test]
    async fn test_movie_details_handler_upstream_unreachable() {
        let state = test_state();

        let result =
            movie_details_handler(State(state.clone()), Path("42".to_string())).await;
        assert!(result.is_err());

        // Failed fetches never populate the cache
        assert!(state.cache.write().await.get("movie_details_42").is_none());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(response) = health_handler().await;
        assert_eq!(response.status, "OK, backend is running");
    }
}
