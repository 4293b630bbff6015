//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Emit one access-log line per request
//!
//! # Design Decisions
//! - Uses tracing for all output except the startup banner
//! - Lines are prefixed with a bracketed local timestamp
//! - Log level configurable via RUST_LOG

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "test_upstream=info,tower_http=warn";
const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d %H:%M:%S]";

/// Install the global subscriber. Call once, from `main`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_target(false),
        )
        .init();
}

/// Access-log middleware: `"GET /echo?x=1 HTTP/1.1" 200`.
pub async fn access_log(request: Request, next: Next) -> Response {
    let line = request_line(&request);
    let response = next.run(request).await;
    tracing::info!("\"{}\" {}", line, response.status().as_u16());
    response
}

fn request_line(request: &Request) -> String {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    format!("{} {} {:?}", request.method(), target, request.version())
}
