//! Handlers for the `/subscription-types` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playhub_db::models::{CreateSubscriptionType, SubscriptionType};

use crate::error::AppResult;
use crate::response::{DataResponse, WriteResponse};
use crate::state::AppState;

/// GET /api/v1/subscription-types
///
/// List all subscription types, cache-aside.
pub async fn list_subscription_types(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SubscriptionType>>>> {
    let subscription_types = state.queries.get_subscription_types().await?;
    Ok(Json(DataResponse {
        data: subscription_types,
    }))
}

/// POST /api/v1/subscription-types
///
/// Create a subscription type.
pub async fn create_subscription_type(
    State(state): State<AppState>,
    Json(input): Json<CreateSubscriptionType>,
) -> AppResult<(StatusCode, Json<WriteResponse<SubscriptionType>>)> {
    let (subscription_type, warnings) = state.commands.create_subscription_type(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(WriteResponse {
            data: subscription_type,
            warnings,
        }),
    ))
}
