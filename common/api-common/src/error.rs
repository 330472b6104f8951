//! Error handling utilities for HTTP services
//!
//! Every failed request is answered with the same JSON envelope:
//! `{"error": "<kind>", "detail": "<diagnostic>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;

/// An error that is rendered as an HTTP response
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct ApiError {
    /// HTTP status to answer with
    pub status: StatusCode,
    /// Machine readable error kind (e.g. `os_read_failure`)
    pub kind: &'static str,
    /// Human readable diagnostic
    pub detail: String,
}

/// Wire format of an error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, detail: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            detail: detail.into(),
        }
    }

    /// The body that will be sent for this error
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.kind.to_string(),
            detail: self.detail.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(kind = self.kind, "{}", self.detail);
        }
        (self.status, Json(self.body())).into_response()
    }
}

/// Trait for converting errors into API errors
///
/// Implement this for domain error types so handlers can use `?` via
/// [`ResultExt::to_api_err`].
///
/// # Example
///
/// ```rust,ignore
/// impl IntoApiError for MyError {
///     fn into_api_error(self) -> ApiError {
///         internal_error(self.to_string())
///     }
/// }
/// ```
pub trait IntoApiError {
    /// Convert this error into an API error
    fn into_api_error(self) -> ApiError;
}

impl IntoApiError for serde_json::Error {
    fn into_api_error(self) -> ApiError {
        internal_error(format!("JSON error: {}", self))
    }
}

/// Extension trait for Result types to convert to API errors
pub trait ResultExt<T> {
    /// Convert the error to an API error
    fn to_api_err(self) -> ApiResult<T>;
}

impl<T, E: IntoApiError> ResultExt<T> for Result<T, E> {
    fn to_api_err(self) -> ApiResult<T> {
        self.map_err(|e| e.into_api_error())
    }
}

/// Create a 500 error of kind `internal`
pub fn internal_error(detail: impl Into<String>) -> ApiError {
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", detail)
}
