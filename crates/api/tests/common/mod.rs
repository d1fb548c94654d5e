//! Shared helpers for API integration tests.
//!
//! Builds the real router (same middleware stack as `main.rs`) on top of an
//! in-memory store, and provides one-shot request helpers.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::config::{LogFormat, ServerConfig};
use todo_api::router::build_app_router;
use todo_api::service::TodoService;
use todo_api::state::AppState;
use todo_core::types::TodoId;
use todo_db::models::todo::{Todo, TodoDraft};
use todo_db::repositories::MemoryTodoRepo;
use todo_db::{StoreError, StoreResult, TodoStore};

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![ALLOWED_ORIGIN.to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over the given store.
pub fn build_app_with_store(store: Arc<dyn TodoStore>) -> Router {
    let state = AppState {
        todos: TodoService::new(store),
    };
    build_app_router(state, &test_config()).unwrap()
}

/// Build the full application router over a fresh in-memory store.
///
/// The returned repo shares storage with the app, so tests can inspect it.
pub fn build_test_app() -> (Router, MemoryTodoRepo) {
    let repo = MemoryTodoRepo::new();
    let app = build_app_with_store(Arc::new(repo.clone()));
    (app, repo)
}

/// Store whose every operation fails as if the database were down.
pub struct UnavailableStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl TodoStore for UnavailableStore {
    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        unavailable()
    }

    async fn find_by_completed(&self, _completed: bool) -> StoreResult<Vec<Todo>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: TodoId) -> StoreResult<Option<Todo>> {
        unavailable()
    }

    async fn exists_by_id(&self, _id: TodoId) -> StoreResult<bool> {
        unavailable()
    }

    async fn save(&self, _draft: TodoDraft) -> StoreResult<Todo> {
        unavailable()
    }

    async fn delete_by_id(&self, _id: TodoId) -> StoreResult<()> {
        unavailable()
    }

    async fn health_check(&self) -> StoreResult<()> {
        unavailable()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// CORS preflight for `uri` from `origin` asking to use `method`.
pub async fn preflight(app: Router, uri: &str, origin: &str, method: Method) -> Response {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, method.as_str())
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
