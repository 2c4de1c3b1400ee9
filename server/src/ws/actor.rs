use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::state::AppState;
use crate::ws::{next_connection_id, protocol};

/// Run the actor-per-connection pattern for an upgraded WebSocket.
///
/// Splits the socket into reader and writer halves:
/// - Writer task: owns the sink, forwards frames from an mpsc channel
/// - Reader loop: decodes inbound frames, dispatches to protocol handlers
///
/// The reader loop is the connection's state machine. Every exit path
/// (close frame, stream end, read error) is a terminal transition through
/// the cleanup below; a read error is never retried.
pub async fn run_connection(socket: WebSocket, state: AppState) {
    let (ws_sender, mut ws_receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel::<Message>();

    let connection_id = next_connection_id();
    state.subscribers.insert(connection_id, tx.clone());
    tracing::info!(connection_id, "subscriber connected");

    // Spawn writer task: forwards mpsc frames to the WebSocket sink
    let writer_handle = tokio::spawn(writer_task(ws_sender, rx));

    loop {
        match ws_receiver.next().await {
            Some(Ok(msg)) => match msg {
                Message::Text(text) => {
                    protocol::handle_text_frame(text.as_str(), &tx, &state).await;
                }
                Message::Close(frame) => {
                    tracing::info!(connection_id, reason = ?frame, "client initiated close");
                    break;
                }
                // Binary, ping and pong frames are not part of the protocol.
                Message::Binary(_) | Message::Ping(_) | Message::Pong(_) => {}
            },
            Some(Err(e)) => {
                tracing::warn!(connection_id, error = %e, "WebSocket receive error");
                break;
            }
            None => {
                tracing::info!(connection_id, "WebSocket stream ended");
                break;
            }
        }
    }

    writer_handle.abort();

    // A broadcast may already have pruned a dead handle; remove is idempotent.
    state.subscribers.remove(&connection_id);
    tracing::info!(connection_id, "subscriber disconnected");
}

/// Writer task: receives frames from the mpsc channel and forwards them to
/// the WebSocket sink.
async fn writer_task(
    mut ws_sender: futures_util::stream::SplitSink<WebSocket, Message>,
    mut rx: mpsc::UnboundedReceiver<Message>,
) {
    while let Some(msg) = rx.recv().await {
        if ws_sender.send(msg).await.is_err() {
            // WebSocket send failed — connection is broken
            break;
        }
    }
}
