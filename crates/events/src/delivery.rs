//! Payload resolution for subscription delivery.
//!
//! Before a `NEW_SUBSCRIPTION_NOTIFICATION` event is handed to a
//! subscriber, its payload must resolve to a complete [`Notification`]. A
//! payload without one is rejected with an error, never papered over with
//! an empty value -- a malformed event on this topic means a producer bug,
//! and the subscriber should see it as such.

use playhub_core::topics;
use playhub_db::models::Notification;

use crate::bus::ChannelEvent;

/// Why a payload failed to resolve.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The event is not a subscription notification at all.
    #[error("expected topic '{expected}', got '{actual}'")]
    WrongTopic {
        expected: &'static str,
        actual: String,
    },

    /// The payload has no `notification` field.
    #[error("notification payload is missing its notification")]
    MissingNotification,

    /// The `notification` field does not decode to a [`Notification`].
    #[error("malformed notification payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Resolve the notification carried by a `NEW_SUBSCRIPTION_NOTIFICATION`
/// event.
pub fn resolve_subscription_notification(
    event: &ChannelEvent,
) -> Result<Notification, ResolveError> {
    if event.topic != topics::NEW_SUBSCRIPTION_NOTIFICATION {
        return Err(ResolveError::WrongTopic {
            expected: topics::NEW_SUBSCRIPTION_NOTIFICATION,
            actual: event.topic.clone(),
        });
    }

    let value = event
        .payload
        .get("notification")
        .filter(|v| !v.is_null())
        .ok_or(ResolveError::MissingNotification)?;

    Ok(serde_json::from_value(value.clone())?)
}
