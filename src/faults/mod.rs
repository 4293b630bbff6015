//! Fault simulation subsystem.
//!
//! # Data Flow
//! ```text
//! GET /random
//!     → FailureInjector::should_fail()
//!     → RandomSource::next_f64() (process-wide or seeded)
//!     → draw < failure_rate ? 503 : 200
//! ```
//!
//! # Design Decisions
//! - Randomness is injected, so tests can seed it or pin it

pub mod random;

use std::sync::Arc;

use crate::config::FaultConfig;

pub use random::{RandomSource, SeededRandom, ThreadRandom};

/// Decides whether a simulated request should fail.
#[derive(Debug, Clone)]
pub struct FailureInjector {
    rate: f64,
    source: Arc<dyn RandomSource>,
}

impl FailureInjector {
    pub fn new(rate: f64, source: Arc<dyn RandomSource>) -> Self {
        Self { rate, source }
    }

    /// Build from config: seeded when `random_seed` is set.
    pub fn from_config(config: &FaultConfig) -> Self {
        let source: Arc<dyn RandomSource> = match config.random_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self::new(config.failure_rate, source)
    }

    pub fn should_fail(&self) -> bool {
        self.source.next_f64() < self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_f64(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(FailureInjector::new(0.3, Arc::new(Fixed(0.29))).should_fail());
        assert!(!FailureInjector::new(0.3, Arc::new(Fixed(0.3))).should_fail());
        assert!(!FailureInjector::new(0.0, Arc::new(Fixed(0.0))).should_fail());
    }

    #[test]
    fn test_seeded_rate_is_close() {
        let config = FaultConfig {
            random_seed: Some(42),
            ..FaultConfig::default()
        };
        let injector = FailureInjector::from_config(&config);
        let failures = (0..10_000).filter(|_| injector.should_fail()).count();
        let observed = failures as f64 / 10_000.0;
        assert!((observed - 0.3).abs() < 0.03, "observed rate {}", observed);
    }
}
