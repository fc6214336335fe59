//! Game entity model and DTOs.

use chrono::NaiveDate;
use playhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `games` table. Immutable once launched.
///
/// Serializes losslessly: games are cached as serde_json bytes and must
/// round-trip field-exact through the cache codec.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub release_date: NaiveDate,
    /// Subscription types whose subscribers get notified of this launch.
    pub subscription_type_ids: Vec<DbId>,
    pub created_at: Timestamp,
}

/// DTO for launching a new game.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub title: String,
    pub genre: String,
    pub release_date: NaiveDate,
    #[serde(default)]
    pub subscription_type_ids: Vec<DbId>,
}
