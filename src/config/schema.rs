//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config tree can be dumped or built from
//! structured data by library callers.

use serde::{Deserialize, Serialize};

/// Root configuration for the test upstream.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Simulated fault settings (`/random`, `/delay`, `/error`).
    pub faults: FaultConfig,

    /// Request limits.
    pub limits: LimitsConfig,
}

impl UpstreamConfig {
    /// Default configuration bound to all interfaces on `port`.
    pub fn with_port(port: u16) -> Self {
        let mut config = Self::default();
        config.listener.bind_address = format!("0.0.0.0:{}", port);
        config
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Fault simulation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FaultConfig {
    /// Probability in `[0, 1]` that `/random` answers 503.
    pub failure_rate: f64,

    /// Seed for the `/random` generator. `None` uses process randomness.
    pub random_seed: Option<u64>,

    /// Delay used by `/delay` when `ms` is absent.
    pub default_delay_ms: f64,

    /// Status used by `/error` when `code` is absent.
    pub default_error_code: u16,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            failure_rate: 0.3,
            random_seed: None,
            default_delay_ms: 1000.0,
            default_error_code: 500,
        }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}
