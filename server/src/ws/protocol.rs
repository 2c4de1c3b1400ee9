//! The streaming protocol: JSON text frames in both directions.
//!
//! Inbound frames decode once into a tagged enum instead of being
//! field-tested ad hoc; anything that fails to decode is discarded and the
//! connection stays open.

use axum::extract::ws::Message;
use serde::{Deserialize, Serialize};

use crate::leaderboard::broadcast::update_score;
use crate::players::PlayerRecord;
use crate::state::AppState;
use crate::ws::ConnectionSender;

/// The only channel clients can subscribe to.
pub const LEADERBOARD_CHANNEL: &str = "leaderboard_updates";

/// Inbound frames, discriminated by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "subscribe")]
    Subscribe { channel: String },
    #[serde(rename = "update")]
    Update { value: ScoreUpdate },
    #[serde(other)]
    Unknown,
}

/// Payload of an `update` frame.
#[derive(Debug, Deserialize)]
pub struct ScoreUpdate {
    pub username: String,
    pub score: i64,
}

/// Outbound frames.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "subscription_confirmed")]
    SubscriptionConfirmed,
    #[serde(rename = "DataUpdated")]
    DataUpdated { value: PlayerRecord },
}

/// Handle one inbound text frame.
///
/// Malformed frames are discarded without closing the connection or
/// replying. A store failure during an update is logged and not reported
/// back to the client.
pub async fn handle_text_frame(text: &str, tx: &ConnectionSender, state: &AppState) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(error = %e, "discarding malformed frame");
            return;
        }
    };

    match message {
        ClientMessage::Subscribe { channel } if channel == LEADERBOARD_CHANNEL => {
            tracing::info!("client subscribed to leaderboard updates");
            send_message(tx, &ServerMessage::SubscriptionConfirmed);
        }
        ClientMessage::Subscribe { channel } => {
            // No reply on the wire; the registry already carries this
            // connection, so nothing changes server-side either.
            tracing::warn!(channel = %channel, "subscribe to unknown channel ignored");
        }
        ClientMessage::Update { value } => {
            if value.username.is_empty() {
                tracing::warn!("update with empty username discarded");
                return;
            }
            if let Err(e) = update_score(state, &value.username, value.score).await {
                tracing::error!(username = %value.username, error = %e, "score update failed");
            }
        }
        ClientMessage::Unknown => {
            tracing::debug!("discarding frame with unrecognized type");
        }
    }
}

/// Serialize and enqueue an outbound frame for this connection. A closed
/// channel means the actor is already tearing down; the frame is dropped.
pub fn send_message(tx: &ConnectionSender, message: &ServerMessage) {
    match serde_json::to_string(message) {
        Ok(payload) => {
            let _ = tx.send(Message::Text(payload.into()));
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to encode outbound frame");
        }
    }
}
