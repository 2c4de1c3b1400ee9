use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::leaderboard::handlers as leaderboard_handlers;
use crate::players::handlers as player_handlers;
use crate::state::AppState;
use crate::ws::handler as ws_handler;

/// Build the full axum Router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Wildcard CORS, preflight included. Origin validation is a known
    // production hardening gap.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/add-user", post(player_handlers::add_user))
        .route("/get-user", get(player_handlers::get_user))
        .route(
            "/get-user-details",
            get(leaderboard_handlers::get_user_details),
        )
        .route("/ws", get(ws_handler::ws_upgrade))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state)
}

/// Basic health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
