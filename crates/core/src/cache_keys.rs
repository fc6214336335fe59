//! Well-known cache key and TTL constants.
//!
//! These must match the keys deleted by the command service when it
//! invalidates after a write; a mismatch leaves a stale entry alive until
//! its TTL runs out.

use crate::types::DbId;

/// Cached result set of `getGames`.
pub const GAMES_KEY: &str = "games";

/// Cached result set of `getSubscriptionTypes`.
pub const SUBSCRIPTION_TYPES_KEY: &str = "subscriptionTypes";

/// TTL for the games result set, in seconds.
pub const GAMES_TTL_SECS: u64 = 3600;

/// TTL for the subscription types result set, in seconds.
pub const SUBSCRIPTION_TYPES_TTL_SECS: u64 = 3600;

/// TTL for a user's notifications result set, in seconds.
pub const NOTIFICATIONS_TTL_SECS: u64 = 1800;

/// Cache key for a single user's notification list.
pub fn notifications_key(user_id: DbId) -> String {
    format!("notifications:{user_id}")
}
