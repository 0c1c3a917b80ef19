//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction.
///
/// Runtime cache operations never fail; a missing key is reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A builder handler was left unset before `build()`
    #[error("Missing handler: `{0}` must be set before build")]
    MissingHandler(&'static str),

    /// Invalid cache configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_handler_message() {
        let err = CacheError::MissingHandler("get");
        assert_eq!(err.to_string(), "Missing handler: `get` must be set before build");
    }

    #[test]
    fn test_invalid_config_message() {
        let err = CacheError::InvalidConfig("max_size must be greater than 0".to_string());
        assert!(err.to_string().starts_with("Invalid config:"));
    }
}
