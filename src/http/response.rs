//! Response envelope shared by every endpoint.
//!
//! # Responsibilities
//! - Wrap payloads in the `{success, data, total, message}` envelope
//! - Omit `data`/`total` when a response carries neither
//! - Stamp responses with an RFC 3339 UTC timestamp
//!
//! # Design Decisions
//! - `total` is only present on list responses, where it mirrors `data.len()`
//! - Error responses reuse the same envelope with `success: false`

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// The uniform response body.
///
/// Serialization skips `data` and `total` when they are `None`, so error
/// responses come out as `{"success": false, "message": "..."}` with no
/// stray null fields.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a single payload.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            total: None,
            message: message.into(),
        }
    }

    /// Failed response carrying only a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            total: None,
            message: message.into(),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful list response; `total` reflects the collection size.
    pub fn list(data: Vec<T>, message: impl Into<String>) -> Self {
        let total = data.len();
        Self {
            success: true,
            data: Some(data),
            total: Some(total),
            message: message.into(),
        }
    }
}

/// Current UTC time as an RFC 3339 string with microsecond precision.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
