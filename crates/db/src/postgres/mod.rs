//! PostgreSQL store adapter.
//!
//! One module per collection, each in the repository style: a `COLUMNS`
//! constant and runtime-bound queries against the shared pool.

mod game_store;
mod notification_store;
mod subscription_type_store;
mod user_store;

use playhub_core::error::CoreError;

use crate::DbPool;

/// PostgreSQL implementation of all four store ports, sharing one pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Map a backend failure to the domain taxonomy.
///
/// Uniqueness conflicts are classified per call site (the caller knows the
/// offending value); everything else is a store-unavailable condition.
pub(crate) fn unavailable(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::StoreUnavailable(err.to_string())
}

/// True when `err` is a PostgreSQL unique-constraint violation (23505)
/// on a constraint following the `uq_` naming convention.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_"))
        }
        _ => false,
    }
}
