//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SwitchdConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::SwitchdConfig;
use crate::observability::logging::LOG_LEVELS;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("source.poll_interval_secs must be greater than 0")]
    ZeroPollInterval,

    #[error("{field} is not a valid socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("admin.api_key must not be empty when the admin API is enabled")]
    EmptyApiKey,

    #[error("admin.max_body_bytes must be greater than 0")]
    ZeroBodyLimit,

    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// Check a deserialized config for semantic errors.
pub fn validate_config(config: &SwitchdConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Watching only applies when there is a file to watch.
    let source = &config.source;
    if source.watch && source.path.is_some() && source.poll_interval_secs == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }

    let admin = &config.admin;
    if admin.enabled {
        check_address(&mut errors, "admin.bind_address", &admin.bind_address);
        if admin.api_key.trim().is_empty() {
            errors.push(ValidationError::EmptyApiKey);
        }
        if admin.max_body_bytes == 0 {
            errors.push(ValidationError::ZeroBodyLimit);
        }
    }

    let observability = &config.observability;
    if observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &observability.metrics_address,
        );
    }
    if !LOG_LEVELS.contains(&observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
