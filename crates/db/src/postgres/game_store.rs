//! `games` table access.

use async_trait::async_trait;
use playhub_core::error::CoreError;

use crate::models::{CreateGame, Game};
use crate::store::GameStore;

use super::{unavailable, PgStore};

/// Column list for `games` queries.
const COLUMNS: &str = "id, title, genre, release_date, subscription_type_ids, created_at";

#[async_trait]
impl GameStore for PgStore {
    async fn insert(&self, input: CreateGame) -> Result<Game, CoreError> {
        let query = format!(
            "INSERT INTO games (title, genre, release_date, subscription_type_ids) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_date)
            .bind(&input.subscription_type_ids)
            .fetch_one(self.pool())
            .await
            .map_err(unavailable)
    }

    async fn list(&self) -> Result<Vec<Game>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY id");
        sqlx::query_as::<_, Game>(&query)
            .fetch_all(self.pool())
            .await
            .map_err(unavailable)
    }
}
