//! Live event subscriptions over WebSocket.

pub mod handler;

pub use handler::ws_upgrade;
