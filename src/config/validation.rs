//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (fallback status is a real HTTP status)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: DispatchConfig → Result
//! - Runs before a config is accepted into the system

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::schema::DispatchConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The fallback status is outside the representable 100..=999 range.
    #[error("fallback status {0} is not a valid HTTP status code")]
    InvalidFallbackStatus(u16),
}

/// Check a deserialized config for semantic problems.
pub fn validate_config(config: &DispatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if StatusCode::from_u16(config.fallback.status).is_err() {
        errors.push(ValidationError::InvalidFallbackStatus(
            config.fallback.status,
        ));
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
    fn default_config_is_valid() {
        assert!(validate_config(&DispatchConfig::default()).is_ok());
    }

    #[test]
    fn out_of_range_status_is_rejected() {
        let mut config = DispatchConfig::default();
        config.fallback.status = 1000;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("1000"));
    }

    #[test]
    fn unusual_but_valid_status_is_accepted() {
        let mut config = DispatchConfig::default();
        config.fallback.status = 404;
        assert!(validate_config(&config).is_ok());
    }
}
