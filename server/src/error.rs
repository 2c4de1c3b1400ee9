//! Error taxonomy for the HTTP surface.
//!
//! Streaming connections handle their own failures: protocol errors are
//! discarded, store failures inside the update path are logged only, and a
//! connection error tears down that one connection. Nothing here reaches
//! the WebSocket side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request fields.
    #[error("{0}")]
    BadRequest(String),

    /// Requested username is absent from the store.
    #[error("user not found")]
    NotFound,

    /// The store is unreachable or returned a failure. Details are logged,
    /// not leaked to the caller.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
