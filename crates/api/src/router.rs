//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same
//! middleware stack.

use std::time::Duration;

use axum::http::uri::Authority;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{ConfigError, ServerConfig};
use crate::routes;
use crate::state::AppState;

/// Methods the `/api` group accepts cross-origin.
const API_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Methods the `/actuator` group accepts cross-origin.
const ACTUATOR_METHODS: [Method; 2] = [Method::GET, Method::OPTIONS];

/// Build the full application [`Router`] with all middleware layers.
///
/// Each route group carries its own CORS policy. The shared middleware
/// stack is applied bottom-up:
///
/// 1. Set request ID on incoming requests
/// 2. Structured request/response tracing
/// 3. Propagate request ID to response
/// 4. Request timeout
/// 5. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Result<Router, ConfigError> {
    let origins = parse_origins(&config.cors_origins)?;
    let request_id_header = HeaderName::from_static("x-request-id");

    let router = Router::new()
        .nest(
            "/api",
            routes::api_routes().layer(cors_layer(origins.clone(), API_METHODS)),
        )
        .nest(
            "/actuator",
            routes::actuator_routes().layer(cors_layer(origins, ACTUATOR_METHODS)),
        )
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state);

    Ok(router)
}

/// Parse configured origins into header values, failing on the first bad one.
///
/// Each entry must be a concrete `http(s)://host[:port]` origin. A wildcard
/// cannot be combined with credentials, so `*` is rejected here as well.
fn parse_origins(origins: &[String]) -> Result<Vec<HeaderValue>, ConfigError> {
    origins.iter().map(|origin| parse_origin(origin)).collect()
}

fn parse_origin(origin: &str) -> Result<HeaderValue, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidCorsOrigin {
        origin: origin.to_string(),
        reason,
    };

    let Some((scheme, authority)) = origin.split_once("://") else {
        return Err(invalid("expected scheme://host[:port]".to_string()));
    };
    if !matches!(scheme, "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{scheme}'")));
    }
    if authority.is_empty() || authority.contains(['/', '?', '#', '@', '*']) {
        return Err(invalid("expected scheme://host[:port]".to_string()));
    }
    authority
        .parse::<Authority>()
        .map_err(|e| invalid(e.to_string()))?;

    HeaderValue::from_str(origin).map_err(|e| invalid(e.to_string()))
}

/// CORS policy for one route group: fixed methods, any request headers
/// (mirrored, since credentials rule out a wildcard), credentials allowed.
fn cors_layer<const N: usize>(origins: Vec<HeaderValue>, methods: [Method; N]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
