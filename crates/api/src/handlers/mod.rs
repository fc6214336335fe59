//! HTTP request handlers, one module per URL resource.

pub mod auth;
pub mod game;
pub mod notification;
pub mod subscription_type;
pub mod user;
