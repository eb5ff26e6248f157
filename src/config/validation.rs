//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject configs that could never resolve at runtime
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ConnectConfig → Result<(), Vec<ValidationError>>
//! - Runs before a file-loaded config is accepted; configs built directly
//!   in code are not gated here; resolve-time validation still applies

use thiserror::Error;

use crate::config::schema::ConnectConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Neither a `connection` block nor any `connections` entry.
    #[error("no connection is configured")]
    NoConnections,

    /// A connection entry with no discovery_key, uri, or host can never
    /// produce a usable descriptor.
    #[error("connection {index} has none of discovery_key, uri, or host")]
    UnresolvableConnection { index: usize },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ConnectConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let entries = config.connection_entries();
    if entries.is_empty() {
        errors.push(ValidationError::NoConnections);
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.discovery_key.is_none() && entry.uri.is_empty() && entry.host.is_empty() {
            errors.push(ValidationError::UnresolvableConnection { index });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
