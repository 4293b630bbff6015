//! Test upstream server.
//!
//! A stand-in backend with canned endpoints (hello, health, delay, error,
//! random failure, echo) for driving a reverse proxy under test.
//!
//! ```text
//!     Proxy under test ──▶ listener ──▶ access log ──▶ endpoint table ──▶ handler
//!                                                                           │
//!     Proxy under test ◀──────────── text/plain or stamped JSON ◀───────────┘
//! ```

use clap::Parser;

use test_upstream::lifecycle::{startup, wait_for_signal};
use test_upstream::observability::logging::init_logging;
use test_upstream::{Shutdown, UpstreamConfig, UpstreamServer};

#[derive(Parser)]
#[command(name = "test-upstream")]
#[command(about = "Canned HTTP upstream for reverse proxy tests", long_about = None)]
struct Cli {
    /// Port to listen on (all interfaces).
    #[arg(default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    let config = UpstreamConfig::with_port(cli.port);
    let server = UpstreamServer::new(config)?;
    let listener = startup::bind(server.config()).await?;
    let port = listener.local_addr()?.port();

    println!("{}", startup::banner(port));

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        println!("\nShutting down server on port {}", port);
        signal_shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
