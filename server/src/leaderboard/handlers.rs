use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::leaderboard::list_players;
use crate::players::PlayerRecord;
use crate::state::AppState;

/// GET /get-user-details — The full ranked leaderboard, highest score first.
pub async fn get_user_details(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerRecord>>, ApiError> {
    let players = list_players(&state.store, state.scan_page_size).await?;
    Ok(Json(players))
}
