//! Redis cache adapter behind a deadpool connection pool.

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config, Pool, Runtime};

use crate::store::{CacheError, CacheStore};

/// Shared-Redis [`CacheStore`].
///
/// Expiry is delegated to Redis via `SET EX`. Pool exhaustion and command
/// errors surface as [`CacheError::Backend`]; callers degrade rather than
/// fail.
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    /// Build a pool from a `redis://` URL.
    pub fn new(url: &str) -> Result<Self, CacheError> {
        let pool = Config::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::Backend(format!("failed to create Redis pool: {e}")))?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (shared with other components).
    pub fn from_pool(pool: Pool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> Result<deadpool_redis::Connection, CacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError::Backend(format!("failed to get Redis connection: {e}")))
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.conn().await?;
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Backend(format!("GET {key}: {e}")))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| CacheError::Backend(format!("SET {key}: {e}")))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| CacheError::Backend(format!("DEL {key}: {e}")))?;
        Ok(())
    }
}
