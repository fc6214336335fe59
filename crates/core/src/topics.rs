//! Well-known event topic name constants.
//!
//! These must match the topics the command service and fanout engine
//! publish on and the topics WebSocket clients subscribe to.

/// Published once per game launch, carrying the new game snapshot.
pub const NEW_GAME_LAUNCHED: &str = "NEW_GAME_LAUNCHED";

/// Published once per (launch, subscribed user), carrying the persisted
/// notification.
pub const NEW_SUBSCRIPTION_NOTIFICATION: &str = "NEW_SUBSCRIPTION_NOTIFICATION";
