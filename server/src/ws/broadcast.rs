use axum::extract::ws::Message;

use crate::ws::protocol::ServerMessage;
use crate::ws::SubscriberRegistry;

/// Push one frame to every registered subscriber.
///
/// Membership is snapshotted before sending so pruning never interferes
/// with the enumeration in progress. A failed send means the receiving
/// actor is gone: that handle is removed unconditionally and delivery
/// continues to the rest. Callers get no per-subscriber outcome.
pub fn broadcast_to_all(registry: &SubscriberRegistry, message: &ServerMessage) {
    let payload = match serde_json::to_string(message) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "failed to encode broadcast frame");
            return;
        }
    };
    let frame = Message::Text(payload.into());

    let snapshot: Vec<_> = registry
        .iter()
        .map(|entry| (*entry.key(), entry.value().clone()))
        .collect();

    for (connection_id, sender) in snapshot {
        if sender.send(frame.clone()).is_err() {
            registry.remove(&connection_id);
            tracing::debug!(connection_id, "pruned dead subscriber");
        }
    }
}
