//! Route definitions for the `/games` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET  / -> list_games
/// POST / -> launch_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(game::list_games).post(game::launch_game))
}
