//! HTTP API gateway for AadiNet.
//!
//! Exposes a health check plus the v1 API for terminal sessions and the
//! project/skill catalogue, so any web front end can drive the terminal.
//!
//! Built on Axum for high performance async HTTP.

pub mod api_v1;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Request bodies above this size are rejected.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the full router: health check plus the nested v1 API.
///
/// Layers applied:
/// - Request body size limit (64 KB)
/// - In-memory rate limiting per client (`/health` exempt)
/// - CORS allowing any origin for GET/POST
/// - HTTP trace logging
pub fn build_router(api_state: api_v1::SharedApiState) -> Router {
    let rate_limiter = Arc::new(RateLimiter::new(
        api_state.config.gateway.rate_limit_per_minute as usize,
        Duration::from_secs(60),
    ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_v1::v1_router(api_state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(move |req, next| {
            let limiter = rate_limiter.clone();
            rate_limit_middleware(limiter, req, next)
        }))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(config: aadinet_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let api_state = Arc::new(api_v1::ApiV1State::new(config));
    let app = build_router(api_state);

    info!(addr = %addr, "Gateway starting with v1 API");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Rate Limiter ---

/// Per-client sliding window: at most `max_requests` in any `window`.
struct RateLimiter {
    max_requests: usize,
    window: Duration,
    clients: std::sync::Mutex<HashMap<String, VecDeque<Instant>>>,
}

/// Clients tracked before idle ones are swept.
const SWEEP_THRESHOLD: usize = 10_000;

impl RateLimiter {
    fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: std::sync::Mutex::new(HashMap::new()),
        }
    }

    /// Record a request. `Err` carries how long until the oldest hit expires.
    fn check(&self, client_key: &str) -> Result<(), Duration> {
        self.check_at(client_key, Instant::now())
    }

    fn check_at(&self, client_key: &str, now: Instant) -> Result<(), Duration> {
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());

        if clients.len() > SWEEP_THRESHOLD {
            clients.retain(|_, hits| {
                hits.back().is_some_and(|t| now.duration_since(*t) < self.window)
            });
        }

        let hits = clients.entry(client_key.to_string()).or_default();
        while hits.front().is_some_and(|t| now.duration_since(*t) >= self.window) {
            hits.pop_front();
        }

        if hits.len() >= self.max_requests {
            let retry_after = hits
                .front()
                .map(|oldest| self.window.saturating_sub(now.duration_since(*oldest)))
                .unwrap_or(self.window);
            return Err(retry_after);
        }

        hits.push_back(now);
        Ok(())
    }
}

/// Client key for rate limiting: the first `X-Forwarded-For` hop, or
/// "anonymous" when the header is missing.
fn client_key(req: &axum::extract::Request) -> String {
    req.headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "anonymous".to_string())
}

/// Rejects over-limit clients with 429 and a `Retry-After` header.
/// `/health` is never limited.
async fn rate_limit_middleware(
    limiter: Arc<RateLimiter>,
    req: axum::extract::Request,
    next: Next,
) -> Response {
    if req.uri().path() == "/health" {
        return next.run(req).await;
    }

    let client_key = client_key(&req);
    match limiter.check(&client_key) {
        Ok(()) => next.run(req).await,
        Err(retry_after) => {
            warn!(client = %client_key.chars().take(40).collect::<String>(), "Rate limit exceeded");
            let seconds = retry_after.as_secs().max(1).to_string();
            (StatusCode::TOO_MANY_REQUESTS, [(header::RETRY_AFTER, seconds)]).into_response()
        }
    }
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state(rate_limit: u32) -> api_v1::SharedApiState {
        let mut config = aadinet_config::AppConfig::default();
        config.terminal.processing_delay_ms = 0;
        config.gateway.rate_limit_per_minute = rate_limit;
        Arc::new(api_v1::ApiV1State::new(config))
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = build_router(test_state(60));

        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn v1_is_nested() {
        let app = build_router(test_state(60));
        let req = Request::builder()
            .uri("/v1/skills")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rate_limit_applies_per_client_but_not_to_health() {
        let app = build_router(test_state(2));

        for _ in 0..2 {
            let req = Request::builder()
                .uri("/v1/commands")
                .header("X-Forwarded-For", "10.0.0.1")
                .body(Body::empty())
                .unwrap();
            let response = app.clone().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let req = Request::builder()
            .uri("/v1/commands")
            .header("X-Forwarded-For", "10.0.0.1")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(response.headers().contains_key(header::RETRY_AFTER));

        let req = Request::builder()
            .uri("/v1/commands")
            .header("X-Forwarded-For", "10.0.0.2")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let req = Request::builder()
            .uri("/health")
            .header("X-Forwarded-For", "10.0.0.1")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let state = test_state(60);
        let app = build_router(state);

        let req = Request::builder()
            .method("POST")
            .uri("/v1/sessions")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let body = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let huge = "x".repeat(MAX_BODY_BYTES + 1);
        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/sessions/{id}/commands"))
            .header("content-type", "application/json")
            .body(Body::from(serde_json::json!({ "input": huge }).to_string()))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn limiter_window_slides() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let start = Instant::now();
        assert!(limiter.check_at("a", start).is_ok());
        assert_eq!(
            limiter.check_at("a", start + Duration::from_secs(30)),
            Err(Duration::from_secs(30))
        );
        assert!(limiter.check_at("a", start + Duration::from_secs(61)).is_ok());
    }

    #[test]
    fn client_key_uses_first_forwarded_hop() {
        let req = Request::builder()
            .header("X-Forwarded-For", "1.2.3.4, 5.6.7.8")
            .body(Body::empty())
            .unwrap();
        assert_eq!(client_key(&req), "1.2.3.4");

        let req = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_key(&req), "anonymous");
    }
}
