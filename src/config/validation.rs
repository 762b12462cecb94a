//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject version tables the dispatcher would refuse
//! - Validate value ranges and addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("vendor.name must not be empty")]
    EmptyVendorName,

    #[error("vendor.name must not contain whitespace: {0:?}")]
    VendorNameWhitespace(String),

    #[error("vendor.versions must contain at least one version")]
    NoVersions,

    #[error("vendor.versions[{0}].identifier must not be empty")]
    EmptyIdentifier(usize),

    #[error("duplicate version identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("{field} is not a valid socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let vendor = &config.vendor;
    if vendor.name.is_empty() {
        errors.push(ValidationError::EmptyVendorName);
    } else if vendor.name.chars().any(char::is_whitespace) {
        errors.push(ValidationError::VendorNameWhitespace(vendor.name.clone()));
    }

    if vendor.versions.is_empty() {
        errors.push(ValidationError::NoVersions);
    }
    let mut seen = HashSet::new();
    for (i, version) in vendor.versions.iter().enumerate() {
        if version.identifier.is_empty() {
            errors.push(ValidationError::EmptyIdentifier(i));
        } else if !seen.insert(version.identifier.as_str()) {
            errors.push(ValidationError::DuplicateIdentifier(version.identifier.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
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
