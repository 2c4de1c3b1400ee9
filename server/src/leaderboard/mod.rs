//! Leaderboard aggregation: full-scan reconstruction of the ranking.

pub mod broadcast;
pub mod handlers;

use crate::players::{parse_player_key, PlayerRecord, USER_KEY_PREFIX};
use crate::state::SharedStore;
use crate::store::StoreError;

/// Rebuild the full ranking from the store: one cursor-paginated scan over
/// the player keyspace, then one get per key.
///
/// Malformed keys are skipped with a warning. A corrupt record aborts the
/// whole call instead of silently shrinking the ranking. Keys that vanish
/// between scan and get are skipped (store race, not corruption).
///
/// Ordering: score descending, ties broken by username ascending.
pub async fn list_players(
    store: &SharedStore,
    page_size: usize,
) -> Result<Vec<PlayerRecord>, StoreError> {
    let mut players = Vec::new();
    let mut cursor = 0;

    // Do-while: the first page is always fetched, so a freshly-reset cursor
    // is never mistaken for completion and an empty store still works.
    loop {
        let page = store.scan_page(USER_KEY_PREFIX, cursor, page_size).await?;

        for key in &page.keys {
            if parse_player_key(key).is_none() {
                tracing::warn!(key = %key, "skipping malformed player key");
                continue;
            }
            if let Some(record) = store.get(key).await? {
                players.push(record);
            }
        }

        cursor = page.cursor;
        if cursor == 0 {
            break;
        }
    }

    players.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.username.cmp(&b.username))
    });

    Ok(players)
}
