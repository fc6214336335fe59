//! In-memory store adapter.
//!
//! Backs the integration tests and redis-less local runs. Ids are
//! allocated from a single monotonic counter; collections live behind one
//! `RwLock` since contention is not a concern for this adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use playhub_core::error::CoreError;
use playhub_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::{
    CreateGame, CreateNotification, CreateSubscriptionType, CreateUser, Game, Notification,
    SubscriptionType, User,
};
use crate::store::{GameStore, NotificationStore, SubscriptionTypeStore, UserStore};

#[derive(Debug, Default)]
struct State {
    games: Vec<Game>,
    subscription_types: Vec<SubscriptionType>,
    users: HashMap<DbId, User>,
    notifications: Vec<Notification>,
    next_id: DbId,
}

impl State {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory implementation of all four store ports.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn insert(&self, input: CreateGame) -> Result<Game, CoreError> {
        let mut state = self.state.write().await;
        let game = Game {
            id: state.allocate_id(),
            title: input.title,
            genre: input.genre,
            release_date: input.release_date,
            subscription_type_ids: input.subscription_type_ids,
            created_at: Utc::now(),
        };
        state.games.push(game.clone());
        Ok(game)
    }

    async fn list(&self) -> Result<Vec<Game>, CoreError> {
        Ok(self.state.read().await.games.clone())
    }
}

#[async_trait]
impl SubscriptionTypeStore for MemoryStore {
    async fn insert(&self, input: CreateSubscriptionType) -> Result<SubscriptionType, CoreError> {
        let mut state = self.state.write().await;
        let subscription_type = SubscriptionType {
            id: state.allocate_id(),
            name: input.name,
            description: input.description,
            associated_game_ids: input.associated_game_ids,
            created_at: Utc::now(),
        };
        state.subscription_types.push(subscription_type.clone());
        Ok(subscription_type)
    }

    async fn list(&self) -> Result<Vec<SubscriptionType>, CoreError> {
        Ok(self.state.read().await.subscription_types.clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, input: CreateUser) -> Result<User, CoreError> {
        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.email == input.email) {
            return Err(CoreError::AlreadyExists {
                entity: "User",
                field: "email",
                value: input.email,
            });
        }
        let user = User {
            id: state.allocate_id(),
            email: input.email,
            password_hash: input.password_hash,
            subscription_type_ids: Vec::new(),
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn update_subscriptions(
        &self,
        user_id: DbId,
        subscription_type_ids: &[DbId],
    ) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        let user = state
            .users
            .get_mut(&user_id)
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })?;
        user.subscription_type_ids = subscription_type_ids.to_vec();
        Ok(())
    }

    async fn find_subscribed_to_any(
        &self,
        subscription_type_ids: &[DbId],
    ) -> Result<Vec<User>, CoreError> {
        let state = self.state.read().await;
        let mut matched: Vec<User> = state
            .users
            .values()
            .filter(|u| {
                u.subscription_type_ids
                    .iter()
                    .any(|id| subscription_type_ids.contains(id))
            })
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep results deterministic.
        matched.sort_by_key(|u| u.id);
        Ok(matched)
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn insert(&self, input: CreateNotification) -> Result<Notification, CoreError> {
        let mut state = self.state.write().await;
        let notification = Notification {
            id: state.allocate_id(),
            user_id: input.user_id,
            content: input.content,
            seen: false,
            created_at: Utc::now(),
        };
        state.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Notification>, CoreError> {
        let state = self.state.read().await;
        Ok(state.notifications.iter().find(|n| n.id == id).cloned())
    }

    async fn list_for_user(&self, user_id: DbId) -> Result<Vec<Notification>, CoreError> {
        let state = self.state.read().await;
        let mut notifications: Vec<Notification> = state
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notifications)
    }

    async fn set_seen(&self, id: DbId) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        let notification = state
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Notification",
                id,
            })?;
        notification.seen = true;
        Ok(())
    }
}
