//! In-memory score store for tests and local development.
//!
//! Values are kept as raw JSON strings so the corrupt-record path behaves
//! exactly like a real backend. The scan cursor is an offset into the
//! sorted set of matching keys, honoring the same "0 means done, but only
//! after the first page" contract as Redis SCAN.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::players::PlayerRecord;
use crate::store::{ScanPage, ScoreStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value verbatim, bypassing serialization. Lets tests
    /// plant records that will fail to deserialize.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.records
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<PlayerRecord>, StoreError> {
        let raw = self.records.lock().expect("store lock").get(key).cloned();
        match raw {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|source| {
                StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                }
            }),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, record: &PlayerRecord) -> Result<(), StoreError> {
        let payload = serde_json::to_string(record).map_err(StoreError::Encode)?;
        self.records
            .lock()
            .expect("store lock")
            .insert(key.to_string(), payload);
        Ok(())
    }

    async fn scan_page(
        &self,
        prefix: &str,
        cursor: u64,
        count: usize,
    ) -> Result<ScanPage, StoreError> {
        let records = self.records.lock().expect("store lock");
        let matching: Vec<&String> = records
            .keys()
            .filter(|key| key.starts_with(prefix))
            .collect();

        let start = cursor as usize;
        let keys: Vec<String> = matching
            .iter()
            .skip(start)
            .take(count)
            .map(|key| key.to_string())
            .collect();
        let next = start + keys.len();
        let cursor = if next >= matching.len() { 0 } else { next as u64 };

        Ok(ScanPage { keys, cursor })
    }
}
