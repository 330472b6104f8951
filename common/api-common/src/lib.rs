//! API Common - Shared utilities for HTTP services
//!
//! This crate provides common functionality used by the service binaries:
//!
//! - **Initialization**: [`init_tracing`] for standardized log setup
//! - **Results**: Helper functions for producing JSON bodies
//! - **Errors**: [`ApiError`] envelope plus traits for converting domain errors into it
//!
//! # Example
//!
//! ```rust,ignore
//! use api_common::{json_success, ApiResult};
//!
//! async fn handler() -> ApiResult<axum::Json<serde_json::Value>> {
//!     let data = collect_something()?;
//!     json_success(&data)
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use error::{internal_error, ApiError, ApiResult, ErrorBody, IntoApiError, ResultExt};
pub use init::{init_tracing, LogFormat};
pub use result::{json_success, pretty_json};
