//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener, naming the address on failure
//! - Print the endpoint banner
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The banner goes to stdout, not the log, so it survives RUST_LOG=off

use tokio::net::TcpListener;

use crate::config::UpstreamConfig;
use crate::error::ServerError;
use crate::routing::Endpoint;

/// Bind the configured address.
pub async fn bind(config: &UpstreamConfig) -> Result<TcpListener, ServerError> {
    let addr = &config.listener.bind_address;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(address = %listener.local_addr()?, "Listener bound");
    Ok(listener)
}

/// Startup banner listing every endpoint.
pub fn banner(port: u16) -> String {
    let mut lines = vec![
        format!("Test upstream server running on port {}", port),
        "Available endpoints:".to_string(),
    ];
    for endpoint in Endpoint::ALL {
        let (path, description) = endpoint.usage();
        lines.push(format!("  GET  {:<13} - {}", path, description));
    }
    lines.push(format!("  POST {:<13} - {}", "/echo", "Echo request with body"));
    lines.push("  Press Ctrl+C to stop".to_string());
    lines.join("\n")
}
