//! In-process cache adapter with per-entry TTL.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{CacheError, CacheStore};

/// A cached value with its expiry bookkeeping.
#[derive(Debug, Clone)]
struct CachedEntry {
    data: Vec<u8>,
    cached_at: Instant,
    ttl: Duration,
}

impl CachedEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > self.ttl
    }
}

/// In-process [`CacheStore`] backed by a `HashMap`.
///
/// Expired entries are dropped lazily on access. This adapter never
/// returns [`CacheError`]; it exists so single-instance deployments and
/// tests run without a Redis.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CachedEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (non-expired) entries. Test helper.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|e| !e.is_expired()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.data.clone())),
                Some(_) => {}
            }
        }

        // Expired: drop the entry so the map does not grow unbounded.
        self.entries.write().await.remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<(), CacheError> {
        let entry = CachedEntry::new(value, Duration::from_secs(ttl_secs));
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let cache = MemoryCache::new();

        cache
            .set("games", b"payload".to_vec(), 60)
            .await
            .expect("set should succeed");

        let value = cache.get("games").await.expect("get should succeed");
        assert_eq!(value, Some(b"payload".to_vec()));
    }

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let cache = MemoryCache::new();

        let value = cache.get("absent").await.expect("get should succeed");
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn delete_removes_entry_and_is_idempotent() {
        let cache = MemoryCache::new();

        cache.set("games", b"payload".to_vec(), 60).await.unwrap();
        cache.delete("games").await.expect("delete should succeed");
        assert!(cache.get("games").await.unwrap().is_none());

        // Deleting an absent key must also succeed.
        cache.delete("games").await.expect("second delete should succeed");
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let cache = MemoryCache::new();

        cache.set("games", b"old".to_vec(), 60).await.unwrap();
        cache.set("games", b"new".to_vec(), 60).await.unwrap();

        let value = cache.get("games").await.unwrap();
        assert_eq!(value, Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn expired_entry_behaves_as_absent() {
        let cache = MemoryCache::new();

        // Zero TTL: the entry is expired as soon as any time elapses.
        cache.set("games", b"payload".to_vec(), 0).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(
            cache.get("games").await.unwrap().is_none(),
            "expired entry must read as a miss"
        );
        // The lazy purge on get must have dropped the entry.
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn unexpired_entry_survives_elapsed_time() {
        let cache = MemoryCache::new();

        cache.set("games", b"payload".to_vec(), 1800).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(cache.get("games").await.unwrap().is_some());
    }
}
