//! Notification entity model and DTOs.

use playhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// Created only by the fanout engine on a game launch. `seen` flips
/// false -> true exactly once; re-marking is a no-op. Cached as serde_json
/// bytes, so the codec must round-trip `seen` and the ids exactly.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub seen: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a notification. New notifications are always unseen.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: DbId,
    pub content: String,
}
