pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /todos                 list (?completed=), create
/// /todos/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todos", todo::router())
}

/// Build the `/actuator` route tree.
///
/// ```text
/// /health                store-backed health report
/// ```
pub fn actuator_routes() -> Router<AppState> {
    health::router()
}
