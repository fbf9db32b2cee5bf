//! # Cache Facade
//!
//! Orchestrates encode → timed write on the way in and
//! read → classify → decode on the way out.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::Codec;
use crate::error::{CacheError, Result};
use crate::stats::{Stats, StatsCounter};
use crate::store::{Store, StoreConnection};

/// Expiration applied when a requested value is below [`MIN_EXPIRATION`].
///
/// Guards against accidental zero/near-zero TTLs causing thrash, and
/// against effectively-permanent writes being mistaken for short-lived
/// ones. Longer TTLs pass through without restriction.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(120);

/// Requested expirations below this floor are replaced by
/// [`DEFAULT_EXPIRATION`].
pub const MIN_EXPIRATION: Duration = Duration::from_secs(1);

/// One value to cache. Transient; built by the caller per [`Cache::set`]
/// call. Only its encoded bytes persist in the store.
#[derive(Debug)]
pub struct Item<'a, T: ?Sized> {
    /// Cache key. Must be non-empty.
    pub key: &'a str,
    /// Value to encode and store.
    pub object: &'a T,
    /// Requested time-to-live, subject to the expiration floor.
    pub expiration: Duration,
}

/// Cache facade over a remote store and an injected codec.
///
/// Safe for many concurrent callers: each call acquires its own store
/// connection and releases it before returning, and the hit/miss counters
/// are the only shared mutable state. Wrap the store in an `Arc` to share
/// it with other parts of the process. No operation is retried here.
pub struct Cache<S, C> {
    store: S,
    codec: C,
    stats: StatsCounter,
}

impl<S: Store, C: Codec> Cache<S, C> {
    /// Create a facade over `store` using `codec` for values.
    ///
    /// Both collaborators are required; there is no default encoding.
    pub fn new(store: S, codec: C) -> Self {
        Self {
            store,
            codec,
            stats: StatsCounter::default(),
        }
    }

    /// Encode `item.object` and write it under `item.key` with a TTL.
    ///
    /// The TTL sent to the store is `item.expiration` in whole seconds
    /// (sub-second precision truncated), raised to [`DEFAULT_EXPIRATION`]
    /// when the requested value is below one second. Never touches the
    /// hit/miss counters.
    ///
    /// # Errors
    ///
    /// [`CacheError::Encode`] when the codec cannot represent the object,
    /// [`CacheError::Connection`] when no connection can be acquired, and
    /// [`CacheError::StoreWrite`] when the store fails the write.
    pub async fn set<T>(&self, item: Item<'_, T>) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let payload = self
            .codec
            .encode(item.object)
            .map_err(|e| CacheError::Encode(e.to_string()))?;

        let expiration = if item.expiration < MIN_EXPIRATION {
            DEFAULT_EXPIRATION
        } else {
            item.expiration
        };

        let mut conn = self
            .store
            .connection()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;
        conn.write_expiring(item.key, expiration.as_secs(), &payload)
            .await
            .map_err(|e| CacheError::StoreWrite(e.to_string()))?;

        tracing::debug!(key = item.key, ttl_secs = expiration.as_secs(), "cache write");
        Ok(())
    }

    /// Read the value stored under `key` and decode it into `dest`.
    ///
    /// An absent key is the expected [`CacheError::Miss`] outcome and
    /// increments the miss counter; any present payload increments the hit
    /// counter, even when decoding then fails. A present-but-empty payload
    /// returns success and leaves `dest` untouched.
    ///
    /// # Errors
    ///
    /// [`CacheError::Miss`] when the key is absent,
    /// [`CacheError::Connection`] when no connection can be acquired,
    /// [`CacheError::StoreRead`] when the read fails for another reason,
    /// and [`CacheError::Decode`] when the stored bytes cannot be decoded.
    pub async fn get<T>(&self, key: &str, dest: &mut T) -> Result<()>
    where
        T: DeserializeOwned,
    {
        let mut conn = self
            .store
            .connection()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;
        let read = conn.read(key).await;
        drop(conn);

        let payload = match read {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                self.stats.record_miss();
                tracing::debug!(key, "cache miss");
                return Err(CacheError::Miss(key.to_string()));
            }
            Err(e) => return Err(CacheError::StoreRead(e.to_string())),
        };

        self.stats.record_hit();
        tracing::debug!(key, "cache hit");

        if payload.is_empty() {
            // Present-but-empty sentinel; nothing to decode.
            return Ok(());
        }
        *dest = self
            .codec
            .decode(&payload)
            .map_err(|e| CacheError::Decode(e.to_string()))?;
        Ok(())
    }

    /// Point-in-time snapshot of the hit/miss counters.
    pub fn stats(&self) -> Stats {
        self.stats.snapshot()
    }
}
