//! Abstract persistent repository ports.
//!
//! One trait per collection, consumed by the query/command services as
//! injected `Arc<dyn ...>` handles. Adapters: [`crate::MemoryStore`] and
//! [`crate::PgStore`]. Every method maps backend failures to
//! [`CoreError::StoreUnavailable`]; absence is `Ok(None)` on finds and
//! [`CoreError::NotFound`] on targeted updates.

use std::sync::Arc;

use async_trait::async_trait;
use playhub_core::error::CoreError;
use playhub_core::types::DbId;

use crate::models::{
    CreateGame, CreateNotification, CreateSubscriptionType, CreateUser, Game, Notification,
    SubscriptionType, User,
};
use crate::{DbPool, MemoryStore, PgStore};

/// Durable collection of [`Game`] rows.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert a new game and return it with its generated id.
    async fn insert(&self, input: CreateGame) -> Result<Game, CoreError>;

    /// All games, oldest first.
    async fn list(&self) -> Result<Vec<Game>, CoreError>;
}

/// Durable collection of [`SubscriptionType`] rows.
#[async_trait]
pub trait SubscriptionTypeStore: Send + Sync {
    async fn insert(&self, input: CreateSubscriptionType) -> Result<SubscriptionType, CoreError>;

    /// All subscription types, oldest first.
    async fn list(&self) -> Result<Vec<SubscriptionType>, CoreError>;
}

/// Durable collection of [`User`] rows.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, input: CreateUser) -> Result<User, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CoreError>;

    /// Replace a user's subscription set. Fails with `NotFound` when the
    /// user does not exist.
    async fn update_subscriptions(
        &self,
        user_id: DbId,
        subscription_type_ids: &[DbId],
    ) -> Result<(), CoreError>;

    /// Users whose subscription set intersects `subscription_type_ids`.
    /// An empty input selects nobody.
    async fn find_subscribed_to_any(
        &self,
        subscription_type_ids: &[DbId],
    ) -> Result<Vec<User>, CoreError>;
}

/// Durable collection of [`Notification`] rows.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn insert(&self, input: CreateNotification) -> Result<Notification, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Notification>, CoreError>;

    /// A user's notifications, newest first.
    async fn list_for_user(&self, user_id: DbId) -> Result<Vec<Notification>, CoreError>;

    /// Set `seen = true`. Idempotent on an already-seen notification;
    /// fails with `NotFound` when the notification does not exist.
    async fn set_seen(&self, id: DbId) -> Result<(), CoreError>;
}

/// Bundle of the four store handles a deployment injects into the services.
///
/// Explicitly-owned handles, no process-wide singletons: construct once in
/// `main` (or a test) and clone into each component.
#[derive(Clone)]
pub struct Stores {
    pub games: Arc<dyn GameStore>,
    pub subscription_types: Arc<dyn SubscriptionTypeStore>,
    pub users: Arc<dyn UserStore>,
    pub notifications: Arc<dyn NotificationStore>,
}

impl Stores {
    /// All four collections backed by one PostgreSQL pool.
    pub fn postgres(pool: DbPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            games: store.clone(),
            subscription_types: store.clone(),
            users: store.clone(),
            notifications: store,
        }
    }

    /// All four collections backed by one in-memory store.
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            games: store.clone(),
            subscription_types: store.clone(),
            users: store.clone(),
            notifications: store,
        }
    }
}
