//! The update path: persist a score change, then fan it out.

use crate::players::{player_key, PlayerRecord};
use crate::state::AppState;
use crate::store::StoreError;
use crate::ws::broadcast::broadcast_to_all;
use crate::ws::protocol::ServerMessage;

/// Persist a score change, then push a `DataUpdated` notification to every
/// live subscriber.
///
/// Persistence failure aborts the operation before anything is pushed and
/// surfaces to the caller. Push failures are local to one subscriber: the
/// dead handle is pruned and the write stays persisted. Concurrent updates
/// to the same username are last-write-wins on store completion order.
pub async fn update_score(
    state: &AppState,
    username: &str,
    score: i64,
) -> Result<PlayerRecord, StoreError> {
    let record = PlayerRecord {
        username: username.to_string(),
        score,
    };
    state.store.set(&player_key(username), &record).await?;

    broadcast_to_all(
        &state.subscribers,
        &ServerMessage::DataUpdated {
            value: record.clone(),
        },
    );

    Ok(record)
}
