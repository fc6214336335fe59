pub mod auth;
pub mod game;
pub mod health;
pub mod notification;
pub mod subscription_type;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                              live topic subscription (WebSocket)
///
/// /auth/signup                     signup (public)
/// /auth/login                      login (public)
///
/// /games                           list (GET), launch (POST)
///
/// /subscription-types              list (GET), create (POST)
///
/// /users/{id}/notifications        list a user's notifications (GET)
/// /users/{id}/subscriptions        subscribe to a type (POST)
///
/// /notifications/{id}/seen         mark seen (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_upgrade))
        .nest("/auth", auth::router())
        .nest("/games", game::router())
        .nest("/subscription-types", subscription_type::router())
        .nest("/users", user::router())
        .nest("/notifications", notification::router())
}
