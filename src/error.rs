//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Both variants are expected, locally-recoverable conditions: the caller
/// decides whether to retry, overwrite via `set`, or propagate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A live entry already exists for the key (raised by `add`)
    #[error("item already exists: {0}")]
    AlreadyExists(String),

    /// No live entry exists for the key (raised by `replace` and `get`)
    #[error("item not found: {0}")]
    NotFound(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_key() {
        let err = CacheError::AlreadyExists("aKey".to_string());
        assert_eq!(err.to_string(), "item already exists: aKey");

        let err = CacheError::NotFound("bKey".to_string());
        assert_eq!(err.to_string(), "item not found: bKey");
    }
}
