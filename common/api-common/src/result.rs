//! Result helpers for JSON responses

use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiResult, ResultExt};

/// Create a successful JSON body from any serializable data
///
/// Serialization happens eagerly so a failure becomes a proper 500 envelope
/// instead of an empty body.
///
/// # Example
///
/// ```rust,ignore
/// use api_common::json_success;
///
/// async fn handler() -> ApiResult<Json<Value>> {
///     json_success(&MyData { value: 42 })
/// }
/// ```
pub fn json_success<T: Serialize>(data: &T) -> ApiResult<Json<Value>> {
    let value = serde_json::to_value(data).to_api_err()?;
    Ok(Json(value))
}

/// Pretty-printed JSON for terminal output
pub fn pretty_json<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
