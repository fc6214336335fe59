//! `subscription_types` table access.

use async_trait::async_trait;
use playhub_core::error::CoreError;

use crate::models::{CreateSubscriptionType, SubscriptionType};
use crate::store::SubscriptionTypeStore;

use super::{unavailable, PgStore};

/// Column list for `subscription_types` queries.
const COLUMNS: &str = "id, name, description, associated_game_ids, created_at";

#[async_trait]
impl SubscriptionTypeStore for PgStore {
    async fn insert(&self, input: CreateSubscriptionType) -> Result<SubscriptionType, CoreError> {
        let query = format!(
            "INSERT INTO subscription_types (name, description, associated_game_ids) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubscriptionType>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.associated_game_ids)
            .fetch_one(self.pool())
            .await
            .map_err(unavailable)
    }

    async fn list(&self) -> Result<Vec<SubscriptionType>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM subscription_types ORDER BY id");
        sqlx::query_as::<_, SubscriptionType>(&query)
            .fetch_all(self.pool())
            .await
            .map_err(unavailable)
    }
}
