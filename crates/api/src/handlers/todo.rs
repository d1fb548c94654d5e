//! Handlers for the `/todos` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use todo_core::error::CoreError;
use todo_core::todo::TODO_ENTITY;

use crate::dto::todo::{TodoRequest, TodoResponse};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::CompletedFilter;
use crate::response::ApiResponse;
use crate::state::AppState;

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: TODO_ENTITY,
        id,
    })
}

/// GET /api/todos?completed={bool}
///
/// Without `completed` every todo is returned; with it only matching ones.
/// Newest first either way.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<CompletedFilter>, QueryRejection>,
) -> AppResult<ApiResponse<Vec<TodoResponse>>> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let todos = match params.completed {
        Some(completed) => state.todos.list_by_status(completed).await?,
        None => state.todos.list_all().await?,
    };
    Ok(ApiResponse::ok(todos, "Todos retrieved successfully"))
}

/// GET /api/todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<TodoResponse>> {
    let todo = state
        .todos
        .get_by_id(&id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ApiResponse::ok(todo, "Todo retrieved successfully"))
}

/// POST /api/todos
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<TodoRequest>,
) -> AppResult<ApiResponse<TodoResponse>> {
    let todo = state.todos.create(input).await?;
    Ok(ApiResponse::success(
        StatusCode::CREATED,
        todo,
        "Todo created successfully",
    ))
}

/// PUT /api/todos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<TodoRequest>,
) -> AppResult<ApiResponse<TodoResponse>> {
    let todo = state
        .todos
        .update(&id, input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ApiResponse::ok(todo, "Todo updated successfully"))
}

/// DELETE /api/todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    if state.todos.delete(&id).await? {
        Ok(ApiResponse::message(StatusCode::OK, "Todo deleted successfully"))
    } else {
        Err(not_found(id))
    }
}
