use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::players::{player_key, PlayerRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub username: String,
    /// Accepted for wire compatibility; new players always start at zero.
    #[serde(default)]
    pub score: i64,
}

#[derive(Debug, Serialize)]
pub struct AddUserResponse {
    pub username: String,
    pub score: i64,
    pub state: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct GetUserQuery {
    #[serde(default)]
    pub username: String,
}

/// POST /add-user — Create the player if absent.
///
/// Re-adding an existing player returns the stored record untouched, so
/// the call is idempotent regardless of the score supplied.
pub async fn add_user(
    State(state): State<AppState>,
    Json(req): Json<AddUserRequest>,
) -> Result<Json<AddUserResponse>, ApiError> {
    if req.username.is_empty() {
        return Err(ApiError::BadRequest("username must not be empty".to_string()));
    }

    let key = player_key(&req.username);
    if let Some(existing) = state.store.get(&key).await? {
        return Ok(Json(AddUserResponse {
            username: existing.username,
            score: existing.score,
            state: "already exists",
        }));
    }

    let record = PlayerRecord {
        username: req.username,
        score: 0,
    };
    state.store.set(&key, &record).await?;
    tracing::info!(username = %record.username, "player added");

    Ok(Json(AddUserResponse {
        username: record.username,
        score: record.score,
        state: "newly added",
    }))
}

/// GET /get-user?username=X — Fetch one player's stored record.
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<GetUserQuery>,
) -> Result<Json<PlayerRecord>, ApiError> {
    if query.username.is_empty() {
        return Err(ApiError::BadRequest(
            "missing username parameter".to_string(),
        ));
    }

    match state.store.get(&player_key(&query.username)).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound),
    }
}
