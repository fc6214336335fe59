//! Route definitions for the `/subscription-types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::subscription_type;
use crate::state::AppState;

/// Routes mounted at `/subscription-types`.
///
/// ```text
/// GET  / -> list_subscription_types
/// POST / -> create_subscription_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(subscription_type::list_subscription_types)
            .post(subscription_type::create_subscription_type),
    )
}
