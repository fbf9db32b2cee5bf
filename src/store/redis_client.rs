//! Redis-backed store client.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

use super::{Store, StoreConnection, StoreError};

/// Redis store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
        }
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        Self(Box::new(err))
    }
}

/// Redis store client.
///
/// Each operation acquires its own session and releases it by drop, so the
/// client itself holds no connection state beyond the underlying `Client`.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Create a store client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the connection URL is invalid.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::open(config.url.as_str())?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Store for RedisStore {
    type Conn = RedisSession;

    async fn connection(&self) -> Result<RedisSession, StoreError> {
        let conn = self.client.get_multiplexed_async_connection().await?;
        Ok(RedisSession { conn })
    }
}

/// One acquired Redis session.
pub struct RedisSession {
    conn: MultiplexedConnection,
}

#[async_trait]
impl StoreConnection for RedisSession {
    async fn write_expiring(
        &mut self,
        key: &str,
        ttl_secs: u64,
        payload: &[u8],
    ) -> Result<(), StoreError> {
        let _: () = self.conn.set_ex(key, payload, ttl_secs).await?;
        Ok(())
    }

    async fn read(&mut self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        // GET distinguishes nil (absent) from an empty bulk string.
        let value: Option<Vec<u8>> = self.conn.get(key).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_localhost() {
        let config = StoreConfig::default();
        assert_eq!(config.url, "redis://127.0.0.1:6379");
    }

    #[test]
    fn test_connect_rejects_invalid_url() {
        let config = StoreConfig {
            url: "not-a-redis-url".to_string(),
        };
        assert!(RedisStore::connect(&config).is_err());
    }
}
