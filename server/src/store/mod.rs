//! Score store port and its backends.
//!
//! The service treats persistence as an opaque key/value store with get,
//! set, and a cursor-paginated prefix scan. Backends provide per-key
//! atomicity only; no multi-key transactions are used or required.

pub mod memory;
pub mod redis;

use async_trait::async_trait;
use thiserror::Error;

use crate::players::PlayerRecord;

/// One page of a prefix scan.
///
/// A returned `cursor` of 0 means the iteration is complete. The starting
/// cursor is also 0, so callers must consume at least one page before
/// treating 0 as completion; an empty store still yields one (empty) page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPage {
    pub keys: Vec<String>,
    pub cursor: u64,
}

/// Errors surfaced by a score store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store is unreachable or returned a failure.
    #[error("store backend error: {0}")]
    Backend(#[from] ::redis::RedisError),

    /// A stored value failed to deserialize as a PlayerRecord.
    #[error("corrupt record at {key}: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },

    /// A record failed to serialize for storage.
    #[error("failed to encode record: {0}")]
    Encode(serde_json::Error),
}

/// Key/value score store port.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Fetch and deserialize one record. `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<PlayerRecord>, StoreError>;

    /// Serialize and overwrite one record in place.
    async fn set(&self, key: &str, record: &PlayerRecord) -> Result<(), StoreError>;

    /// Fetch one page of keys matching `prefix`, resuming from `cursor`
    /// (0 starts a scan). `count` is a page-size hint, as with Redis SCAN.
    async fn scan_page(
        &self,
        prefix: &str,
        cursor: u64,
        count: usize,
    ) -> Result<ScanPage, StoreError>;
}
