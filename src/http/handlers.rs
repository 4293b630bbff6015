//! Endpoint handlers.
//!
//! Each handler maps one request straight to one response; nothing is shared
//! between requests except the failure injector.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RequestError;
use crate::http::request::{
    delay_param, format_seconds, header_map, parse_body, status_param, QueryParams,
};
use crate::http::response::{json_response, plain_text};
use crate::http::server::AppState;

pub const HELLO_MESSAGE: &str = "Hello from test upstream!";

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
}

#[derive(Serialize)]
struct DelayBody {
    delayed: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct NotFoundBody<'a> {
    error: &'static str,
    path: &'a str,
}

#[derive(Serialize)]
struct UnsupportedBody {
    error: &'static str,
    method: String,
}

#[derive(Serialize)]
struct EchoBody<'a> {
    method: &'a str,
    path: &'a str,
    headers: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
}

/// `GET /`
pub async fn hello() -> Response {
    plain_text(HELLO_MESSAGE)
}

/// `GET /health`
pub async fn health() -> Response {
    json_response(StatusCode::OK, StatusBody { status: "healthy" })
}

/// `GET /delay?ms=X`: sleeps, then reports the delay in seconds.
pub async fn delay(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, RequestError> {
    let query = QueryParams::parse(query.as_deref());
    let duration = delay_param(&query, state.config.faults.default_delay_ms)?;

    tokio::time::sleep(duration).await;

    Ok(json_response(
        StatusCode::OK,
        DelayBody {
            delayed: format!("{}s", format_seconds(duration.as_secs_f64())),
        },
    ))
}

/// `GET /error?code=N`: answers with the requested status.
pub async fn error(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, RequestError> {
    let query = QueryParams::parse(query.as_deref());
    let status = status_param(&query, state.config.faults.default_error_code)?;

    Ok(json_response(
        status,
        ErrorBody {
            error: format!("Simulated error {}", status.as_u16()),
        },
    ))
}

/// `GET /random`: 503 with the configured probability, else 200.
pub async fn random(State(state): State<AppState>) -> Response {
    if state.failures.should_fail() {
        json_response(
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorBody {
                error: "Random failure".to_string(),
            },
        )
    } else {
        json_response(StatusCode::OK, StatusBody { status: "success" })
    }
}

/// `GET /echo`
pub async fn echo(method: Method, uri: Uri, headers: HeaderMap) -> Response {
    json_response(
        StatusCode::OK,
        EchoBody {
            method: method.as_str(),
            path: raw_path(&uri),
            headers: header_map(&headers),
            body: None,
        },
    )
}

/// `POST` on any path: echoes the request along with its parsed body.
pub async fn echo_post(uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    json_response(
        StatusCode::OK,
        EchoBody {
            method: Method::POST.as_str(),
            path: raw_path(&uri),
            headers: header_map(&headers),
            body: Some(parse_body(&body)),
        },
    )
}

/// Paths outside the table.
pub async fn fallback(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    match method {
        Method::POST => echo_post(uri, headers, body).await,
        Method::GET | Method::HEAD => not_found(&uri),
        other => unsupported(other),
    }
}

/// Table paths hit with something other than GET, HEAD or POST.
pub async fn unsupported_method(method: Method) -> Response {
    unsupported(method)
}

fn not_found(uri: &Uri) -> Response {
    json_response(
        StatusCode::NOT_FOUND,
        NotFoundBody {
            error: "Not found",
            path: uri.path(),
        },
    )
}

fn unsupported(method: Method) -> Response {
    json_response(
        StatusCode::NOT_IMPLEMENTED,
        UnsupportedBody {
            error: "Unsupported method",
            method: method.to_string(),
        },
    )
}

/// Path plus query exactly as requested.
fn raw_path(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}
