//! `users` table access.

use async_trait::async_trait;
use playhub_core::error::CoreError;
use playhub_core::types::DbId;

use crate::models::{CreateUser, User};
use crate::store::UserStore;

use super::{is_unique_violation, unavailable, PgStore};

/// Column list for `users` queries.
const COLUMNS: &str = "id, email, password_hash, subscription_type_ids, created_at";

#[async_trait]
impl UserStore for PgStore {
    async fn insert(&self, input: CreateUser) -> Result<User, CoreError> {
        let query = format!(
            "INSERT INTO users (email, password_hash) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(self.pool())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    CoreError::AlreadyExists {
                        entity: "User",
                        field: "email",
                        value: input.email.clone(),
                    }
                } else {
                    unavailable(e)
                }
            })
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(unavailable)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(self.pool())
            .await
            .map_err(unavailable)
    }

    async fn update_subscriptions(
        &self,
        user_id: DbId,
        subscription_type_ids: &[DbId],
    ) -> Result<(), CoreError> {
        let result = sqlx::query("UPDATE users SET subscription_type_ids = $2 WHERE id = $1")
            .bind(user_id)
            .bind(subscription_type_ids)
            .execute(self.pool())
            .await
            .map_err(unavailable)?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            });
        }
        Ok(())
    }

    async fn find_subscribed_to_any(
        &self,
        subscription_type_ids: &[DbId],
    ) -> Result<Vec<User>, CoreError> {
        if subscription_type_ids.is_empty() {
            return Ok(Vec::new());
        }
        // `&&` is the PostgreSQL array-overlap operator.
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE subscription_type_ids && $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(subscription_type_ids)
            .fetch_all(self.pool())
            .await
            .map_err(unavailable)
    }
}
