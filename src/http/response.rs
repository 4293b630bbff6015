//! Response builders.
//!
//! # Responsibilities
//! - Plain-text 200 responses
//! - JSON responses with any status
//! - Stamp every JSON body with `timestamp` (float seconds since epoch)
//!
//! # Design Decisions
//! - `Content-Type` is set explicitly, without a charset parameter
//! - JSON is pretty-printed (2-space indent)

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const TEXT_PLAIN: &str = "text/plain";
pub const APPLICATION_JSON: &str = "application/json";

/// Wraps a response body so `timestamp` is always the last field.
#[derive(Debug, Serialize)]
pub struct Stamped<T> {
    #[serde(flatten)]
    pub inner: T,
    pub timestamp: f64,
}

impl<T> Stamped<T> {
    pub fn now(inner: T) -> Self {
        Self {
            inner,
            timestamp: unix_timestamp(),
        }
    }
}

/// Current time as fractional seconds since the Unix epoch.
pub fn unix_timestamp() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// 200 with a `text/plain` body.
pub fn plain_text(message: &'static str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN))],
        message,
    )
        .into_response()
}

/// `status` with a pretty-printed `application/json` body carrying a timestamp.
pub fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    match serde_json::to_string_pretty(&Stamped::now(body)) {
        Ok(json) => Response::builder()
            .status(status)
            .header(header::CONTENT_TYPE, APPLICATION_JSON)
            .body(Body::from(json))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
