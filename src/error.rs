//! Cache facade error types

use thiserror::Error;

/// Cache facade errors
///
/// [`CacheError::Miss`] is an expected outcome, not a fault; callers branch
/// on it (via [`CacheError::is_miss`] or a `match`) to fall through to a
/// recompute path. Every other variant is a genuine failure. None are
/// retried internally.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache miss for key: {0}")]
    Miss(String),

    #[error("store connection unavailable: {0}")]
    Connection(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("store write failed: {0}")]
    StoreWrite(String),

    #[error("store read failed: {0}")]
    StoreRead(String),
}

impl CacheError {
    /// Whether this error is the expected "key absent" outcome.
    #[must_use]
    pub fn is_miss(&self) -> bool {
        matches!(self, Self::Miss(_))
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_is_distinguishable_by_kind() {
        let miss = CacheError::Miss("user:42".to_string());
        let read = CacheError::StoreRead("connection reset".to_string());

        assert!(miss.is_miss());
        assert!(!read.is_miss());
    }

    #[test]
    fn test_display_carries_context() {
        let err = CacheError::StoreWrite("timed out".to_string());
        assert_eq!(err.to_string(), "store write failed: timed out");
    }
}
