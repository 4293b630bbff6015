//! Test upstream: a canned HTTP backend for exercising a reverse proxy.

pub mod config;
pub mod error;
pub mod faults;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::UpstreamConfig;
pub use error::{RequestError, ServerError};
pub use http::UpstreamServer;
pub use lifecycle::Shutdown;
