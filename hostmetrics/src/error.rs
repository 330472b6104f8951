//! Error types for metric collection
//!
//! Two failure families exist: the OS could not give us a reading
//! ([`ProbeError`]), or it gave us one that breaks the documented ranges
//! ([`ValidationError`]). Both surface as 500s.

use api_common::{ApiError, IntoApiError};
use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised while reading raw counters from the host
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The OS interface returned an error
    #[error("failed to read {counter}: {source}")]
    Os {
        counter: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The OS interface is missing or reported nothing
    #[error("{counter} unavailable: {reason}")]
    Unavailable {
        counter: &'static str,
        reason: String,
    },

    /// The OS reported a value that cannot be used as input (e.g. zero total memory)
    #[error("{counter} reported an unusable value: {reason}")]
    Invalid {
        counter: &'static str,
        reason: String,
    },
}

/// A snapshot field outside its documented range
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{snapshot}.{field} = {value} violates {constraint}")]
pub struct ValidationError {
    pub snapshot: &'static str,
    pub field: &'static str,
    pub value: f64,
    pub constraint: String,
}

/// Any failure on the way from the OS to a response
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("probe task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type alias for metric collection
pub type MetricsResult<T> = Result<T, MetricsError>;

impl IntoApiError for MetricsError {
    fn into_api_error(self) -> ApiError {
        let kind = match &self {
            MetricsError::Probe(_) => "os_read_failure",
            MetricsError::Validation(_) => "validation_failure",
            MetricsError::Join(_) => "internal",
        };
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, kind, self.to_string())
    }
}
