//! # Store Module
//!
//! Contract for the remote key-value store, plus the Redis implementation.

pub mod redis_client;

pub use redis_client::{RedisSession, RedisStore, StoreConfig};

use async_trait::async_trait;
use std::sync::Arc;

/// Store operation error.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(#[from] pub Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    /// Build an error from a plain message.
    #[must_use]
    pub fn msg(msg: impl Into<String>) -> Self {
        Self(msg.into().into())
    }
}

/// Client handing out one connection per operation.
///
/// Acquisition can fail (pool exhausted, store unreachable) and is never
/// retried here; retry policy belongs to the caller.
#[async_trait]
pub trait Store: Send + Sync {
    type Conn: StoreConnection;

    /// Acquire a connection for a single operation.
    ///
    /// # Errors
    ///
    /// Returns an error when no usable session can be produced.
    async fn connection(&self) -> Result<Self::Conn, StoreError>;
}

/// A single acquired session, released when dropped.
///
/// Callers use a session for exactly one request and let it go out of
/// scope immediately after, on every exit path.
#[async_trait]
pub trait StoreConnection: Send {
    /// Write `payload` under `key` with a time-to-live in whole seconds.
    ///
    /// # Errors
    ///
    /// Returns an error when the store rejects or fails the write.
    async fn write_expiring(
        &mut self,
        key: &str,
        ttl_secs: u64,
        payload: &[u8],
    ) -> Result<(), StoreError>;

    /// Read the payload stored under `key`.
    ///
    /// `None` is the distinguished "missing key" signal; an empty payload
    /// is a present value.
    ///
    /// # Errors
    ///
    /// Returns an error when the read fails for any reason other than the
    /// key being absent.
    async fn read(&mut self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

// One store instance is typically shared process-wide.
#[async_trait]
impl<S: Store> Store for Arc<S> {
    type Conn = S::Conn;

    async fn connection(&self) -> Result<Self::Conn, StoreError> {
        (**self).connection().await
    }
}
