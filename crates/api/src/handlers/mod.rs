//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the matching service and map results to
//! [`ApiResponse`](crate::response::ApiResponse) envelopes or [`AppError`](crate::error::AppError).

pub mod todo;
