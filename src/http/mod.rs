//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware)
//!     → routing (endpoint table)
//!     → handlers.rs (one behaviour per endpoint)
//!         → request.rs (query, headers, body)
//!         → response.rs (plain text / stamped JSON)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use server::{AppState, UpstreamServer};
