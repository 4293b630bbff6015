//! Error types for request handling and server startup.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::config::ValidationError;
use crate::http::response::json_response;

/// Errors raised while interpreting a request's query parameters.
///
/// Each maps to a 400 with the usual `{error, timestamp}` body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// A numeric query parameter did not parse.
    #[error("Invalid value for '{param}': {value}")]
    InvalidNumber { param: &'static str, value: String },

    /// `ms` parsed but cannot be slept for (negative, NaN, infinite, too large).
    #[error("Invalid delay: {0}ms")]
    InvalidDelay(String),

    /// `code` parsed but is not a valid HTTP status.
    #[error("Invalid status code: {0}")]
    InvalidStatusCode(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejecting request");
        json_response(
            StatusCode::BAD_REQUEST,
            ErrorBody {
                error: self.to_string(),
            },
        )
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration failed validation.
    #[error("Invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
