use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_core::error::CoreError;
use todo_db::StoreError;
use validator::ValidationErrors;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`] so every failure is rendered as an
/// [`ApiResponse`] envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing store could not be reached or rejected the operation.
    #[error("Storage unavailable: {0}")]
    Store(#[from] StoreError),

    /// A request that could not be decoded (malformed body or query).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl AppError {
    /// HTTP status and client-facing message for this error.
    ///
    /// Server-side failures are logged here and replaced with a generic
    /// message so store details never reach the client.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Entity not found");
                (StatusCode::NOT_FOUND, format!("{entity} not found"))
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, format!("Validation failed: {msg}"))
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage unavailable".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        ApiResponse::<()>::error(status, message).into_response()
    }
}
