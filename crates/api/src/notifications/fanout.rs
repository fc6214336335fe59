//! Launch-to-notification fanout engine.
//!
//! Translates one game launch into N notification records + N events, one
//! per user whose subscription set intersects the game's subscription
//! types. Each notification is persisted before its event is published, so
//! a subscriber that queries the repository on receipt always finds the
//! row. The target user's cached notification list is invalidated between
//! the two, keeping the invalidate-after-write rule intact for fanout
//! writes too.

use std::sync::Arc;

use playhub_cache::CacheStore;
use playhub_core::cache_keys;
use playhub_core::topics;
use playhub_core::types::DbId;
use playhub_core::warning::Warning;
use playhub_db::models::{CreateNotification, Game};
use playhub_db::store::{NotificationStore, UserStore};
use playhub_events::{ChannelEvent, EventBus};

/// Generates per-subscriber notifications for a game launch.
pub struct FanoutEngine {
    users: Arc<dyn UserStore>,
    notifications: Arc<dyn NotificationStore>,
    cache: Arc<dyn CacheStore>,
    bus: Arc<EventBus>,
}

impl FanoutEngine {
    /// Create an engine with the given store, cache, and bus handles.
    pub fn new(
        users: Arc<dyn UserStore>,
        notifications: Arc<dyn NotificationStore>,
        cache: Arc<dyn CacheStore>,
        bus: Arc<EventBus>,
    ) -> Self {
        Self {
            users,
            notifications,
            cache,
            bus,
        }
    }

    /// Notify every subscriber of `game`, returning one warning per failed
    /// target or degraded effect.
    ///
    /// Per-user failures are isolated: one user's persist or publish
    /// failure never prevents the remaining matched users from being
    /// processed.
    pub async fn notify_subscribers(&self, game: &Game) -> Vec<Warning> {
        let subscribers = match self
            .users
            .find_subscribed_to_any(&game.subscription_type_ids)
            .await
        {
            Ok(users) => users,
            Err(e) => {
                tracing::error!(game_id = game.id, error = %e, "Failed to load subscriber set");
                return vec![Warning::fanout_selection(e)];
            }
        };

        tracing::debug!(
            game_id = game.id,
            subscriber_count = subscribers.len(),
            "Fanning out launch notifications"
        );

        let mut warnings = Vec::new();
        for user in subscribers {
            self.notify_user(user.id, game, &mut warnings).await;
        }
        warnings
    }

    /// Persist one notification, invalidate the target's cached list, then
    /// publish the event.
    async fn notify_user(&self, user_id: DbId, game: &Game, warnings: &mut Vec<Warning>) {
        let input = CreateNotification {
            user_id,
            content: format!("New game launched: {}", game.title),
        };

        let notification = match self.notifications.insert(input).await {
            Ok(notification) => notification,
            Err(e) => {
                tracing::warn!(
                    user_id,
                    game_id = game.id,
                    error = %e,
                    "Failed to persist fanout notification"
                );
                warnings.push(Warning::notification_persist(user_id, e));
                return;
            }
        };

        let key = cache_keys::notifications_key(user_id);
        if let Err(e) = self.cache.delete(&key).await {
            tracing::warn!(key = %key, error = %e, "Cache invalidation failed");
            warnings.push(Warning::cache_invalidation(&key, e));
        }

        match ChannelEvent::subscription_notification(&notification) {
            Ok(event) => self.bus.publish(event),
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Failed to encode notification event payload");
                warnings.push(Warning::publish(topics::NEW_SUBSCRIPTION_NOTIFICATION, e));
            }
        }
    }
}
