//! Write service: repository mutation, cache invalidation, event publish.
//!
//! Ordering per operation is insert/update -> invalidate -> publish; that
//! ordering, not locking, is the consistency mechanism. Secondary-effect
//! failures (a cache delete, a payload encode, a fanout target) degrade to
//! [`Warning`]s on an otherwise successful response; only repository
//! failures fail the operation.

use std::sync::Arc;

use playhub_cache::CacheStore;
use playhub_core::cache_keys;
use playhub_core::error::CoreError;
use playhub_core::topics;
use playhub_core::types::DbId;
use playhub_core::warning::Warning;
use playhub_db::models::{CreateGame, CreateSubscriptionType, Game, SubscriptionType};
use playhub_db::store::{
    GameStore, NotificationStore, Stores, SubscriptionTypeStore, UserStore,
};
use playhub_events::{ChannelEvent, EventBus};

use crate::notifications::FanoutEngine;

/// Write side of the API.
pub struct CommandService {
    games: Arc<dyn GameStore>,
    subscription_types: Arc<dyn SubscriptionTypeStore>,
    users: Arc<dyn UserStore>,
    notifications: Arc<dyn NotificationStore>,
    cache: Arc<dyn CacheStore>,
    bus: Arc<EventBus>,
    fanout: FanoutEngine,
}

impl CommandService {
    pub fn new(
        stores: &Stores,
        cache: Arc<dyn CacheStore>,
        bus: Arc<EventBus>,
        fanout: FanoutEngine,
    ) -> Self {
        Self {
            games: stores.games.clone(),
            subscription_types: stores.subscription_types.clone(),
            users: stores.users.clone(),
            notifications: stores.notifications.clone(),
            cache,
            bus,
            fanout,
        }
    }

    /// Launch a game: insert it, invalidate the games cache, fan out one
    /// notification per subscriber, publish the launch event.
    ///
    /// The insert is the only fallible step from the caller's perspective;
    /// everything after it degrades to warnings.
    pub async fn launch_game(&self, input: CreateGame) -> Result<(Game, Vec<Warning>), CoreError> {
        let game = self.games.insert(input).await?;
        tracing::info!(game_id = game.id, title = %game.title, "Game launched");

        let mut warnings = Vec::new();
        self.invalidate(cache_keys::GAMES_KEY, &mut warnings).await;

        warnings.extend(self.fanout.notify_subscribers(&game).await);

        match ChannelEvent::game_launched(&game) {
            Ok(event) => self.bus.publish(event),
            Err(e) => {
                tracing::warn!(game_id = game.id, error = %e, "Failed to encode launch event payload");
                warnings.push(Warning::publish(topics::NEW_GAME_LAUNCHED, e));
            }
        }

        Ok((game, warnings))
    }

    /// Create a subscription type and invalidate its cached listing.
    pub async fn create_subscription_type(
        &self,
        input: CreateSubscriptionType,
    ) -> Result<(SubscriptionType, Vec<Warning>), CoreError> {
        let subscription_type = self.subscription_types.insert(input).await?;
        tracing::info!(
            subscription_type_id = subscription_type.id,
            name = %subscription_type.name,
            "Subscription type created"
        );

        let mut warnings = Vec::new();
        self.invalidate(cache_keys::SUBSCRIPTION_TYPES_KEY, &mut warnings)
            .await;

        Ok((subscription_type, warnings))
    }

    /// Subscribe a user to a subscription type.
    ///
    /// Appending an id already in the set is a no-op, not an error. Only
    /// this user's notifications cache key is invalidated.
    pub async fn subscribe_user(
        &self,
        user_id: DbId,
        subscription_type_id: DbId,
    ) -> Result<(bool, Vec<Warning>), CoreError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })?;

        let mut subscriptions = user.subscription_type_ids;
        if !subscriptions.contains(&subscription_type_id) {
            subscriptions.push(subscription_type_id);
            self.users
                .update_subscriptions(user_id, &subscriptions)
                .await?;
            tracing::info!(user_id, subscription_type_id, "User subscribed");
        }

        let mut warnings = Vec::new();
        self.invalidate(&cache_keys::notifications_key(user_id), &mut warnings)
            .await;

        Ok((true, warnings))
    }

    /// Mark a notification as seen.
    ///
    /// Re-marking an already-seen notification succeeds without change.
    /// Invalidates the owning user's notifications cache key.
    pub async fn mark_notification_seen(
        &self,
        notification_id: DbId,
    ) -> Result<(bool, Vec<Warning>), CoreError> {
        let notification = self
            .notifications
            .find_by_id(notification_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Notification",
                id: notification_id,
            })?;

        self.notifications.set_seen(notification_id).await?;

        let mut warnings = Vec::new();
        self.invalidate(
            &cache_keys::notifications_key(notification.user_id),
            &mut warnings,
        )
        .await;

        Ok((true, warnings))
    }

    /// Delete a cache key, converting failure to a warning.
    ///
    /// The TTL bounds staleness when a delete is lost, so the write still
    /// reports success.
    async fn invalidate(&self, key: &str, warnings: &mut Vec<Warning>) {
        if let Err(e) = self.cache.delete(key).await {
            tracing::warn!(key, error = %e, "Cache invalidation failed");
            warnings.push(Warning::cache_invalidation(key, e));
        }
    }
}
