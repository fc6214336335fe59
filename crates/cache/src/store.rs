//! Port interface for the key-value cache with per-key expiration.

use async_trait::async_trait;

/// Errors surfaced by a cache adapter.
///
/// Never fatal: a failed `get` degrades to a miss, a failed `set` leaves
/// the next read to repopulate, a failed `delete` is reported to the caller
/// as a warning while the TTL bounds the staleness window.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The cache backend is unavailable or timing out.
    #[error("cache backend failure: {0}")]
    Backend(String),
}

/// Key-value cache with per-key expiration. No transactions.
///
/// Values are opaque bytes; the serialization codec belongs to the caller.
/// An expired entry behaves exactly like an absent one.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read a value. `Ok(None)` covers both miss and expiry.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store a value that expires `ttl_secs` from now, replacing any
    /// previous entry under the same key.
    async fn set(&self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<(), CacheError>;

    /// Remove a key. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
