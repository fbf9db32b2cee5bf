//! # recache
//!
//! Typed object cache facade over a remote key-value store.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Application Layer                     │
//! └─────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Cache Facade                        │
//! │      (encode → timed write, read → classify → decode)    │
//! └─────────────────────────────────────────────────────────┘
//!            │                                  │
//!            ▼                                  ▼
//! ┌─────────────────────┐           ┌─────────────────────┐
//! │       Codec          │           │    Store Client      │
//! │  (injected, no       │           │  (Redis, one conn    │
//! │   default encoding)  │           │   per operation)     │
//! └─────────────────────┘           └─────────────────────┘
//! ```
//!
//! The facade classifies every read as a hit or a miss and keeps monotonic
//! counters for both. A miss is a first-class outcome surfaced as
//! [`CacheError::Miss`], distinct from transport and codec failures, so
//! callers can branch into a recompute path without string matching.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use recache::{Cache, Item, JsonCodec, RedisStore, StoreConfig};
//!
//! let store = RedisStore::connect(&StoreConfig::default())?;
//! let cache = Cache::new(store, JsonCodec);
//!
//! cache.set(Item { key: "user:42", object: &user, expiration: Duration::from_secs(300) }).await?;
//!
//! let mut cached = User::default();
//! match cache.get("user:42", &mut cached).await {
//!     Ok(()) => { /* hit */ }
//!     Err(e) if e.is_miss() => { /* recompute and re-populate */ }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod codec;
pub mod error;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use cache::{Cache, DEFAULT_EXPIRATION, Item};
pub use codec::{Codec, CodecError, JsonCodec};
pub use error::{CacheError, Result};
pub use stats::Stats;
pub use store::{RedisStore, Store, StoreConfig, StoreConnection, StoreError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
