//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error responses so
//! every endpoint fails the same way. Validation and conflict rejections
//! surface the core model's user-facing messages unchanged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotsync_core::errors::ScheduleError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain `ScheduleError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

/// Converts application errors to HTTP responses.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Conflict(_) => StatusCode::CONFLICT,
            ScheduleError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ScheduleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // JSON body carrying the user-facing message
        let message = self.0.to_string();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows using `?` with functions that return `Result<T, ScheduleError>`
/// in handlers that return `Result<T, AppError>`.
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Wraps repository-level reports as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Database(err))
    }
}
