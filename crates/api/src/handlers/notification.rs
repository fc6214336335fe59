//! Handlers for the `/notifications` resource.

use axum::extract::{Path, State};
use axum::Json;
use playhub_core::types::DbId;

use crate::error::AppResult;
use crate::response::WriteResponse;
use crate::state::AppState;

/// POST /api/v1/notifications/{id}/seen
///
/// Mark a notification as seen. Re-marking an already-seen notification is
/// an idempotent success; an unknown notification is a 404.
pub async fn mark_seen(
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<Json<WriteResponse<bool>>> {
    let (marked, warnings) = state.commands.mark_notification_seen(notification_id).await?;
    Ok(Json(WriteResponse {
        data: marked,
        warnings,
    }))
}
