use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const UP: &str = "UP";
const DOWN: &str = "DOWN";

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status (`UP` or `DOWN`).
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub components: HealthComponents,
}

#[derive(Debug, Serialize)]
pub struct HealthComponents {
    /// Backing todo store.
    pub db: ComponentHealth,
}

#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: &'static str,
}

/// GET /actuator/health -- returns service and store health.
///
/// Responds 503 when the store is unreachable so load balancers can act on
/// the status code alone.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_status = match state.todos.health_check().await {
        Ok(()) => UP,
        Err(err) => {
            tracing::warn!(error = %err, "Store health check failed");
            DOWN
        }
    };

    let code = if db_status == UP {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: db_status,
        version: env!("CARGO_PKG_VERSION"),
        components: HealthComponents {
            db: ComponentHealth { status: db_status },
        },
    };

    (code, Json(body))
}

/// Mount health check routes (intended for `/actuator`, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
