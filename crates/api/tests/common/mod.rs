//! Shared builders and helpers for the API integration tests.
//!
//! All tests run against the in-memory store and cache adapters plus a
//! fresh event bus; no external services are involved.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use playhub_api::auth::jwt::JwtConfig;
use playhub_api::config::ServerConfig;
use playhub_api::router::build_app_router;
use playhub_api::state::AppState;
use playhub_cache::{CacheError, CacheStore, MemoryCache};
use playhub_db::store::Stores;
use playhub_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        redis_url: None,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_hours: 24,
        },
    }
}

/// A fully wired application over in-memory collaborators, with the
/// injected handles exposed so tests can inspect or seed them directly.
pub struct TestApp {
    pub state: AppState,
    pub stores: Stores,
    pub cache: Arc<MemoryCache>,
    pub bus: Arc<EventBus>,
}

/// Wire an [`AppState`] over fresh in-memory collaborators.
pub fn build_test_state() -> TestApp {
    let stores = Stores::memory();
    let cache = Arc::new(MemoryCache::new());
    let bus = Arc::new(EventBus::default());
    let state = AppState::new(test_config(), stores.clone(), cache.clone(), bus.clone());
    TestApp {
        state,
        stores,
        cache,
        bus,
    }
}

/// Wire an [`AppState`] over caller-supplied stores and cache (for failure
/// injection), returning the bus alongside.
pub fn build_custom_state(stores: Stores, cache: Arc<dyn CacheStore>) -> (AppState, Arc<EventBus>) {
    let bus = Arc::new(EventBus::default());
    let state = AppState::new(test_config(), stores, cache, bus.clone());
    (state, bus)
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Failure-injection doubles
// ---------------------------------------------------------------------------

/// A cache whose every operation fails, for degrade-path tests.
pub struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Backend("cache is down".into()))
    }

    async fn set(&self, _key: &str, _value: Vec<u8>, _ttl_secs: u64) -> Result<(), CacheError> {
        Err(CacheError::Backend("cache is down".into()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Backend("cache is down".into()))
    }
}
