//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`ChannelEvent`]s. It is
//! designed to be shared via `Arc<EventBus>` across the application.
//! Publishing never blocks on subscriber delivery; a slow subscriber lags
//! and is told so, it cannot stall a writer.

use chrono::Utc;
use playhub_core::topics;
use playhub_core::types::Timestamp;
use playhub_db::models::{Game, Notification};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ChannelEvent
// ---------------------------------------------------------------------------

/// An event published on the bus: a topic plus an entity snapshot.
///
/// Payloads are never persisted; a subscriber that wants durable state
/// queries the repository after receiving the event (notification rows are
/// persisted before their event is published, so the row is always there).
#[derive(Debug, Clone)]
pub struct ChannelEvent {
    /// Topic name, one of the constants in `playhub_core::topics`.
    pub topic: String,

    /// JSON snapshot of the entity the event is about.
    pub payload: serde_json::Value,

    /// When the event was created (UTC).
    pub timestamp: Timestamp,
}

impl ChannelEvent {
    /// Create an event with an explicit topic and payload.
    pub fn new(topic: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            topic: topic.into(),
            payload,
            timestamp: Utc::now(),
        }
    }

    /// Build the launch event carrying the new game snapshot.
    pub fn game_launched(game: &Game) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            topics::NEW_GAME_LAUNCHED,
            serde_json::json!({ "game": serde_json::to_value(game)? }),
        ))
    }

    /// Build the per-subscriber fanout event carrying a persisted
    /// notification.
    pub fn subscription_notification(
        notification: &Notification,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            topics::NEW_SUBSCRIPTION_NOTIFICATION,
            serde_json::json!({ "notification": serde_json::to_value(notification)? }),
        ))
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ChannelEvent`]. There is no
/// backlog: a subscriber only sees events published after it subscribed.
pub struct EventBus {
    sender: broadcast::Sender<ChannelEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// live events are delivery-only, never replayed.
    pub fn publish(&self, event: ChannelEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChannelEvent> {
        self.sender.subscribe()
    }

    /// Subscribe to a single topic.
    ///
    /// Each call returns an independent live sequence: every subscriber to
    /// the same topic receives every matching event published after its
    /// subscription (broadcast, not competing-consumer).
    pub fn subscribe_topic(&self, topic: impl Into<String>) -> TopicSubscription {
        TopicSubscription {
            topic: topic.into(),
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// TopicSubscription
// ---------------------------------------------------------------------------

/// A live, single-topic view over a bus subscription.
///
/// Events on other topics are skipped transparently. Dropping the
/// subscription stops delivery; nothing is replayed on resubscribe.
pub struct TopicSubscription {
    topic: String,
    receiver: broadcast::Receiver<ChannelEvent>,
}

impl TopicSubscription {
    /// Wait for the next event on this subscription's topic.
    ///
    /// Propagates `RecvError::Lagged` so the caller can log the gap, and
    /// `RecvError::Closed` once the bus is dropped.
    pub async fn recv(&mut self) -> Result<ChannelEvent, broadcast::error::RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            if event.topic == self.topic {
                return Ok(event);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
