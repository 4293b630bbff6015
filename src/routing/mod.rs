//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (axum Router built from the table)
//!     → table.rs (Endpoint lookup by exact path)
//!     → GET handler | POST echo | 404 | 501
//! ```
//!
//! # Design Decisions
//! - Exact path match only, no trailing-slash normalization
//! - The endpoint set is a closed enum, so it can be enumerated in tests
//!   and in the startup banner

pub mod router;
pub mod table;

pub use router::build_router;
pub use table::Endpoint;
