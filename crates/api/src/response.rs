//! Shared response envelope for API handlers.
//!
//! Every `/api` response, success or failure, is an [`ApiResponse`]:
//!
//! ```json
//! { "message": "...", "error": "...", "data": ..., "timestamp": "...", "statusCode": 200 }
//! ```
//!
//! Fields without a value are omitted rather than serialized as `null`.
//! `statusCode` always mirrors the HTTP status of the response, so a create
//! answers `201 Created` with `"statusCode": 201` in the body. Clients that
//! expect a fixed `200` for every success must read the HTTP status instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use todo_core::types::Timestamp;

/// Uniform response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: Timestamp,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    pub fn success(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
            data: Some(data),
            timestamp: Utc::now(),
            status_code: status.as_u16(),
        }
    }

    /// `200 OK` envelope carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::success(StatusCode::OK, data, message)
    }

    /// Failure envelope with no data.
    pub fn error(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
            data: None,
            timestamp: Utc::now(),
            status_code: status.as_u16(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl ApiResponse<()> {
    /// Successful envelope with a message and no data.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
            data: None,
            timestamp: Utc::now(),
            status_code: status.as_u16(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
