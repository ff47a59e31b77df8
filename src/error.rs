//! Error types for cache operations
//!
//! Two failure kinds exist: configuration errors raised once at construction,
//! and lookup errors raised from `get` when an identifier has no live entry.
//! Everything else (empty identifiers, touching a missing id) is an expected
//! outcome and is signalled with a `bool` return instead.

use thiserror::Error;

/// Main error type for cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// Invalid configuration - the cache cannot be constructed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Lookup failed - no live (non-expired) entry for the identifier
    #[error("No entry found for id: {id}")]
    NotFound { id: String },
}

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

impl CacheError {
    pub(crate) fn not_found(id: &str) -> Self {
        CacheError::NotFound { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CacheError::InvalidConfig("capacity must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: capacity must be positive"
        );

        let not_found = CacheError::not_found("page:Rust");
        assert_eq!(not_found.to_string(), "No entry found for id: page:Rust");
    }

    #[test]
    fn test_error_matching() {
        let error = CacheError::not_found("missing");
        assert!(matches!(error, CacheError::NotFound { .. }));
    }
}
