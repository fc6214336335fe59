//! Route definitions for the `/notifications` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST /{id}/seen -> mark_seen
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/seen", post(notification::mark_seen))
}
