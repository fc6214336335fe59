//! Cache-aside read service.
//!
//! Every read checks the cache first, falls back to the persistent store
//! on a miss, and repopulates the cache with an operation-specific TTL.
//! The cache is a latency optimization only: if it is unreachable or holds
//! a corrupt entry, the read degrades to the store and still succeeds.

use std::future::Future;
use std::sync::Arc;

use playhub_cache::CacheStore;
use playhub_core::cache_keys;
use playhub_core::error::CoreError;
use playhub_core::types::DbId;
use playhub_db::models::{Game, Notification, SubscriptionType};
use playhub_db::store::{GameStore, NotificationStore, Stores, SubscriptionTypeStore};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Read side of the API: games, subscription types, notifications.
pub struct QueryService {
    games: Arc<dyn GameStore>,
    subscription_types: Arc<dyn SubscriptionTypeStore>,
    notifications: Arc<dyn NotificationStore>,
    cache: Arc<dyn CacheStore>,
}

impl QueryService {
    pub fn new(stores: &Stores, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            games: stores.games.clone(),
            subscription_types: stores.subscription_types.clone(),
            notifications: stores.notifications.clone(),
            cache,
        }
    }

    /// All games, served from cache when fresh.
    pub async fn get_games(&self) -> Result<Vec<Game>, CoreError> {
        self.read_through(
            cache_keys::GAMES_KEY,
            cache_keys::GAMES_TTL_SECS,
            self.games.list(),
        )
        .await
    }

    /// All subscription types, served from cache when fresh.
    pub async fn get_subscription_types(&self) -> Result<Vec<SubscriptionType>, CoreError> {
        self.read_through(
            cache_keys::SUBSCRIPTION_TYPES_KEY,
            cache_keys::SUBSCRIPTION_TYPES_TTL_SECS,
            self.subscription_types.list(),
        )
        .await
    }

    /// One user's notifications, newest first, served from cache when fresh.
    pub async fn get_notifications(&self, user_id: DbId) -> Result<Vec<Notification>, CoreError> {
        let key = cache_keys::notifications_key(user_id);
        self.read_through(
            &key,
            cache_keys::NOTIFICATIONS_TTL_SECS,
            self.notifications.list_for_user(user_id),
        )
        .await
    }

    /// The shared cache-aside read path.
    ///
    /// `fetch` is lazy: the store is only queried on a cache miss. Cache
    /// failures and corrupt entries are logged and treated as misses;
    /// store failures propagate.
    async fn read_through<T, F>(&self, key: &str, ttl_secs: u64, fetch: F) -> Result<Vec<T>, CoreError>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = Result<Vec<T>, CoreError>>,
    {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => {
                    tracing::debug!(key, "cache hit");
                    return Ok(value);
                }
                Err(e) => {
                    // Corrupt entry: soft state, safe to discard and rebuild.
                    tracing::warn!(key, error = %e, "corrupt cache entry, repopulating");
                }
            },
            Ok(None) => {
                tracing::debug!(key, "cache miss");
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "cache unavailable, reading through to store");
            }
        }

        let fresh = fetch.await?;

        match serde_json::to_vec(&fresh) {
            Ok(bytes) => {
                if let Err(e) = self.cache.set(key, bytes, ttl_secs).await {
                    tracing::warn!(key, error = %e, "failed to repopulate cache");
                }
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to encode cache entry");
            }
        }

        Ok(fresh)
    }
}
