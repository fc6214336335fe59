//! WebSocket handler forwarding bus events to a connected client.
//!
//! Each connection owns an independent topic subscription: every client
//! sees every event published on its topic after it connected, and nothing
//! before (no backlog). A slow client lags on the broadcast channel rather
//! than stalling publishers.

use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use playhub_core::topics;
use playhub_events::bus::TopicSubscription;
use playhub_events::{resolve_subscription_notification, ChannelEvent};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;

use crate::state::AppState;

/// Interval between keep-alive pings.
const PING_INTERVAL: Duration = Duration::from_secs(30);

/// Query parameters for `GET /ws`.
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    /// Topic to subscribe to. Defaults to `NEW_SUBSCRIPTION_NOTIFICATION`.
    pub topic: Option<String>,
}

/// GET /api/v1/ws?topic=...
///
/// Upgrade to a WebSocket and stream the requested topic until either side
/// disconnects.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    Query(params): Query<WsQuery>,
    ws: WebSocketUpgrade,
) -> Response {
    let topic = params
        .topic
        .unwrap_or_else(|| topics::NEW_SUBSCRIPTION_NOTIFICATION.to_string());

    // Subscribe before the upgrade completes so no event published during
    // the handshake is missed.
    let subscription = state.bus.subscribe_topic(topic.clone());

    ws.on_upgrade(move |socket| handle_socket(socket, subscription, topic))
}

/// Manage a single subscriber connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Spawns a sender task pumping bus events (and pings) into the sink.
///   2. Processes inbound frames on the current task until the client
///      leaves.
async fn handle_socket(socket: WebSocket, subscription: TopicSubscription, topic: String) {
    tracing::debug!(topic = %topic, "WebSocket subscriber connected");

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward bus events to the WebSocket sink.
    let sender_topic = topic.clone();
    let send_task = tokio::spawn(async move {
        let mut subscription = subscription;
        let mut ping = tokio::time::interval(PING_INTERVAL);
        // The first tick completes immediately; consume it.
        ping.tick().await;

        loop {
            tokio::select! {
                result = subscription.recv() => match result {
                    Ok(event) => {
                        let frame = event_frame(&event);
                        if sink.send(Message::Text(frame.into())).await.is_err() {
                            break; // client is gone
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(topic = %sender_topic, skipped, "WebSocket subscriber lagged");
                    }
                    Err(RecvError::Closed) => {
                        tracing::info!(topic = %sender_topic, "Event bus closed, ending subscription");
                        let _ = sink.send(Message::Close(None)).await;
                        break;
                    }
                },
                _ = ping.tick() => {
                    if sink.send(Message::Ping(Vec::new().into())).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    // Receiver loop: the subscription is one-way, so inbound frames only
    // matter for connection lifecycle.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(topic = %topic, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    send_task.abort();
    tracing::debug!(topic = %topic, "WebSocket subscriber disconnected");
}

/// Render one bus event as an outgoing text frame.
///
/// Subscription notification payloads go through the resolve step first: a
/// payload that does not carry a complete notification produces an error
/// frame, never a silently-empty event.
fn event_frame(event: &ChannelEvent) -> String {
    if event.topic == topics::NEW_SUBSCRIPTION_NOTIFICATION {
        match resolve_subscription_notification(event) {
            Ok(notification) => serde_json::json!({
                "type": "event",
                "topic": event.topic,
                "payload": { "notification": notification },
                "timestamp": event.timestamp,
            })
            .to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Rejected malformed notification payload");
                serde_json::json!({
                    "type": "error",
                    "topic": event.topic,
                    "error": e.to_string(),
                })
                .to_string()
            }
        }
    } else {
        serde_json::json!({
            "type": "event",
            "topic": event.topic,
            "payload": event.payload,
            "timestamp": event.timestamp,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use playhub_db::models::Notification;

    #[test]
    fn notification_event_resolves_into_an_event_frame() {
        let notification = Notification {
            id: 5,
            user_id: 9,
            content: "New game launched: Star Forge".to_string(),
            seen: false,
            created_at: Utc::now(),
        };
        let event = ChannelEvent::subscription_notification(&notification).unwrap();

        let frame: serde_json::Value = serde_json::from_str(&event_frame(&event)).unwrap();
        assert_eq!(frame["type"], "event");
        assert_eq!(frame["payload"]["notification"]["id"], 5);
        assert_eq!(frame["payload"]["notification"]["seen"], false);
    }

    #[test]
    fn malformed_notification_event_becomes_an_error_frame() {
        let event = ChannelEvent::new(
            topics::NEW_SUBSCRIPTION_NOTIFICATION,
            serde_json::json!({ "notification": null }),
        );

        let frame: serde_json::Value = serde_json::from_str(&event_frame(&event)).unwrap();
        assert_eq!(frame["type"], "error");
    }

    #[test]
    fn other_topics_pass_their_payload_through() {
        let event = ChannelEvent::new(
            topics::NEW_GAME_LAUNCHED,
            serde_json::json!({ "game": { "id": 1 } }),
        );

        let frame: serde_json::Value = serde_json::from_str(&event_frame(&event)).unwrap();
        assert_eq!(frame["type"], "event");
        assert_eq!(frame["payload"]["game"]["id"], 1);
    }
}
