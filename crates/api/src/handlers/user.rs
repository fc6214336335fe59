//! Handlers for the `/users/{id}/...` endpoints.

use axum::extract::{Path, State};
use axum::Json;
use playhub_core::types::DbId;
use playhub_db::models::Notification;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::{DataResponse, WriteResponse};
use crate::state::AppState;

/// Request body for `POST /users/{id}/subscriptions`.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub subscription_type_id: DbId,
}

/// GET /api/v1/users/{id}/notifications
///
/// List one user's notifications, newest first, cache-aside.
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let notifications = state.queries.get_notifications(user_id).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// POST /api/v1/users/{id}/subscriptions
///
/// Subscribe a user to a subscription type. Subscribing twice to the same
/// type is a no-op success; an unknown user is a 404.
pub async fn subscribe(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<SubscribeRequest>,
) -> AppResult<Json<WriteResponse<bool>>> {
    let (subscribed, warnings) = state
        .commands
        .subscribe_user(user_id, input.subscription_type_id)
        .await?;
    Ok(Json(WriteResponse {
        data: subscribed,
        warnings,
    }))
}
