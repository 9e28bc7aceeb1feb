//! # API Errors
//!
//! Every handler failure becomes `{success: false, message}` with one of four
//! fixed messages. The detail string is logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::observability::{Event, Logger, Severity};

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Error taxonomy at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed payload shape (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Read produced nothing to show (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Write cannot be carried out (422)
    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    /// Gateway fault or other unexpected failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad request",
            ApiError::NotFound(_) => "Not found",
            ApiError::Unprocessable(_) => "Unprocessable entity",
            ApiError::Internal(_) => "Internal server error",
        }
    }

    /// Internal detail, for logs only
    pub fn detail(&self) -> &str {
        match self {
            ApiError::BadRequest(d)
            | ApiError::NotFound(d)
            | ApiError::Unprocessable(d)
            | ApiError::Internal(d) => d,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(reason) => ApiError::NotFound(reason),
            CatalogError::Unprocessable(reason) => ApiError::Unprocessable(reason),
            CatalogError::Store(store_err) => ApiError::Internal(store_err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: &'static str,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            message: err.message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let severity = if status.is_server_error() {
            Severity::Error
        } else {
            Severity::Warn
        };
        Logger::log(
            severity,
            Event::RequestFailed.as_str(),
            &[("status", status.as_str()), ("detail", self.detail())],
        );

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
