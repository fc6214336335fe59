//! Handlers for the `/games` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use playhub_db::models::{CreateGame, Game};

use crate::error::AppResult;
use crate::response::{DataResponse, WriteResponse};
use crate::state::AppState;

/// GET /api/v1/games
///
/// List all games, cache-aside.
pub async fn list_games(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Game>>>> {
    let games = state.queries.get_games().await?;
    Ok(Json(DataResponse { data: games }))
}

/// POST /api/v1/games
///
/// Launch a game. Returns 201 with the created game; secondary-effect
/// failures surface in `warnings`, never as a failed launch.
pub async fn launch_game(
    State(state): State<AppState>,
    Json(input): Json<CreateGame>,
) -> AppResult<(StatusCode, Json<WriteResponse<Game>>)> {
    let (game, warnings) = state.commands.launch_game(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(WriteResponse {
            data: game,
            warnings,
        }),
    ))
}
