// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for topology and seed operations

use thiserror::Error;

/// Errors that can occur while resolving ring topology
///
/// Absent entities (unknown ring, unknown instance) are not errors; lookups
/// return `None` for those.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// The inventory or attribute store could not be read or written.
    ///
    /// Covers network failures, timeouts, interruption and malformed payloads
    /// alike; callers cannot tell retryable causes apart from this kind.
    #[error("Backing store unavailable: {0}")]
    BackingStoreUnavailable(String),

    /// A write was attempted against a read-only repository
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for topology operations
pub type TopologyResult<T> = Result<T, TopologyError>;

impl TopologyError {
    /// Shorthand for a backing store failure with context
    pub fn unavailable(context: &str, err: impl std::fmt::Display) -> Self {
        TopologyError::BackingStoreUnavailable(format!("{}: {}", context, err))
    }

    /// Whether this error means the backing store could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, TopologyError::BackingStoreUnavailable(_))
    }
}

impl From<serde_json::Error> for TopologyError {
    fn from(err: serde_json::Error) -> Self {
        TopologyError::BackingStoreUnavailable(format!("malformed payload: {}", err))
    }
}

impl From<reqwest::Error> for TopologyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TopologyError::BackingStoreUnavailable(format!("request timed out: {}", err))
        } else {
            TopologyError::BackingStoreUnavailable(err.to_string())
        }
    }
}
