//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: UpstreamConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::UpstreamConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("bind address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("failure rate {0} is outside [0, 1]")]
    FailureRate(f64),

    #[error("default delay {0}ms must be a finite, non-negative number")]
    DefaultDelay(f64),

    #[error("default error code {0} is not a final HTTP status (200..=999)")]
    DefaultErrorCode(u16),

    #[error("max body size must be greater than zero")]
    BodyLimit,
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &UpstreamConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let rate = config.faults.failure_rate;
    if !(0.0..=1.0).contains(&rate) {
        errors.push(ValidationError::FailureRate(rate));
    }

    let delay = config.faults.default_delay_ms;
    if !delay.is_finite() || delay < 0.0 {
        errors.push(ValidationError::DefaultDelay(delay));
    }

    if !(200..=999).contains(&config.faults.default_error_code) {
        errors.push(ValidationError::DefaultErrorCode(
            config.faults.default_error_code,
        ));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::BodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&UpstreamConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = UpstreamConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.faults.failure_rate = 1.5;
        config.faults.default_delay_ms = f64::NAN;
        config.faults.default_error_code = 42;
        config.limits.max_body_bytes = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0], ValidationError::BindAddress("not-an-address".into()));
        assert_eq!(errors[1], ValidationError::FailureRate(1.5));
        assert_eq!(errors[3], ValidationError::DefaultErrorCode(42));
        assert_eq!(errors[4], ValidationError::BodyLimit);
    }

    #[test]
    fn test_informational_default_code_is_rejected() {
        let mut config = UpstreamConfig::default();
        config.faults.default_error_code = 150;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::DefaultErrorCode(150)]
        );
        config.faults.default_error_code = 200;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rate_bounds_are_inclusive() {
        let mut config = UpstreamConfig::default();
        config.faults.failure_rate = 0.0;
        assert!(validate_config(&config).is_ok());
        config.faults.failure_rate = 1.0;
        assert!(validate_config(&config).is_ok());
    }
}
