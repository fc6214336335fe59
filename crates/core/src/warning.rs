//! Degraded-success warnings attached to write responses.
//!
//! A write whose primary insert/update succeeded but whose secondary
//! effects (cache invalidation, event publish, per-user fanout) failed
//! still reports success -- with one [`Warning`] per failed effect so the
//! caller can see what was skipped. Secondary-effect failures never roll
//! back or mask the primary result.

use serde::Serialize;

use crate::types::DbId;

/// Which secondary effect of a write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A cache key delete failed; the entry stays stale until its TTL.
    CacheInvalidation,
    /// An event payload could not be published.
    Publish,
    /// A notification record could not be persisted during fanout.
    NotificationPersist,
    /// The subscriber set could not be loaded during fanout.
    FanoutSelection,
}

/// A single degraded-success warning.
#[derive(Debug, Clone, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    /// Affected user, when the failure was scoped to one fanout target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
    pub detail: String,
}

impl Warning {
    /// A cache key delete failed after a successful write.
    pub fn cache_invalidation(key: &str, detail: impl std::fmt::Display) -> Self {
        Self {
            kind: WarningKind::CacheInvalidation,
            user_id: None,
            detail: format!("failed to invalidate '{key}': {detail}"),
        }
    }

    /// An event payload could not be encoded or handed to the bus.
    pub fn publish(topic: &str, detail: impl std::fmt::Display) -> Self {
        Self {
            kind: WarningKind::Publish,
            user_id: None,
            detail: format!("failed to publish '{topic}': {detail}"),
        }
    }

    /// One fanout target's notification could not be persisted.
    pub fn notification_persist(user_id: DbId, detail: impl std::fmt::Display) -> Self {
        Self {
            kind: WarningKind::NotificationPersist,
            user_id: Some(user_id),
            detail: detail.to_string(),
        }
    }

    /// The subscriber set query failed; no notifications were generated.
    pub fn fanout_selection(detail: impl std::fmt::Display) -> Self {
        Self {
            kind: WarningKind::FanoutSelection,
            user_id: None,
            detail: detail.to_string(),
        }
    }
}
