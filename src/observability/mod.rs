//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request:
//!     → logging.rs access_log (one line: request line + status)
//!     → tower_http TraceLayer (debug spans)
//!
//! Consumers:
//!     → stdout, filtered by RUST_LOG
//! ```

pub mod logging;
