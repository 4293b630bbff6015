//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! CLI arguments (port)
//!     → schema.rs (UpstreamConfig with defaults)
//!     → validation.rs (semantic checks)
//!     → UpstreamConfig (validated, immutable)
//!     → shared via Arc with the handlers
//! ```
//!
//! # Design Decisions
//! - No config file: everything has a default, callers override in code
//! - Validation separates syntactic (types/serde) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::{FaultConfig, LimitsConfig, ListenerConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
