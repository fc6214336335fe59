//! Domain error taxonomy.
//!
//! Read operations either return data or propagate [`CoreError::StoreUnavailable`];
//! cache-layer failures never appear here (they degrade to miss behaviour at
//! the call site). Secondary-effect failures on writes are reported as
//! [`crate::Warning`]s, not errors.

use crate::types::DbId;

/// Domain-level error shared across the service and storage layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A unique key is already taken (e.g. signup email).
    #[error("{entity} with {field} '{value}' already exists")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// The persistent repository is unreachable. Fatal to the operation.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Input failed a domain check (empty title, short password, ...).
    #[error("{0}")]
    Validation(String),

    /// Credentials were rejected.
    #[error("{0}")]
    Unauthorized(String),
}

impl CoreError {
    /// Convenience constructor for the common not-found case.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}
