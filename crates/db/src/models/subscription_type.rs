//! Subscription type entity model and DTOs.

use playhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `subscription_types` table. Immutable once created.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SubscriptionType {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Games already associated with this subscription type at creation.
    pub associated_game_ids: Vec<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a new subscription type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriptionType {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub associated_game_ids: Vec<DbId>,
}
