//! PlayHub event channel.
//!
//! - [`EventBus`] -- in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ChannelEvent`] -- the topic + snapshot envelope carried on the bus.
//! - [`TopicSubscription`] -- a per-subscriber live sequence filtered to
//!   one topic.
//! - [`delivery`] -- the defensive payload-resolution step applied before
//!   notification events are handed to a subscriber.

pub mod bus;
pub mod delivery;

pub use bus::{ChannelEvent, EventBus, TopicSubscription};
pub use delivery::{resolve_subscription_notification, ResolveError};
