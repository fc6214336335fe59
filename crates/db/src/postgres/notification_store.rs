//! `notifications` table access.

use async_trait::async_trait;
use playhub_core::error::CoreError;
use playhub_core::types::DbId;

use crate::models::{CreateNotification, Notification};
use crate::store::NotificationStore;

use super::{unavailable, PgStore};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, user_id, content, seen, created_at";

#[async_trait]
impl NotificationStore for PgStore {
    async fn insert(&self, input: CreateNotification) -> Result<Notification, CoreError> {
        let query = format!(
            "INSERT INTO notifications (user_id, content) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.user_id)
            .bind(&input.content)
            .fetch_one(self.pool())
            .await
            .map_err(unavailable)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Notification>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(unavailable)
    }

    async fn list_for_user(&self, user_id: DbId) -> Result<Vec<Notification>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(self.pool())
            .await
            .map_err(unavailable)
    }

    async fn set_seen(&self, id: DbId) -> Result<(), CoreError> {
        // No `seen = false` guard: re-marking an already-seen notification
        // is an idempotent success, not an error.
        let result = sqlx::query("UPDATE notifications SET seen = true WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(unavailable)?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound {
                entity: "Notification",
                id,
            });
        }
        Ok(())
    }
}
