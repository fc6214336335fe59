//! Route definitions for the `/users/{id}/...` endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET  /{id}/notifications -> list_notifications
/// POST /{id}/subscriptions -> subscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/notifications", get(user::list_notifications))
        .route("/{id}/subscriptions", post(user::subscribe))
}
