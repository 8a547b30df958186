//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use medisense_core::ResolveError;
use serde::Serialize;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
}

impl AppError {
    pub fn bad_request(e: impl std::fmt::Display) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::BadRequest(message) = self;
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
    }
}
