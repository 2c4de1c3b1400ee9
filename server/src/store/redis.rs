//! Redis-backed score store.
//!
//! Records are stored as JSON strings. The prefix scan maps directly onto
//! `SCAN cursor MATCH prefix* COUNT n`, whose cursor contract the
//! `ScoreStore` trait mirrors.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, IntoConnectionInfo};

use crate::players::PlayerRecord;
use crate::store::{ScanPage, ScoreStore, StoreError};

/// Production store adapter. `ConnectionManager` multiplexes a single
/// connection and reconnects on failure; clones share it.
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis and verify the server with a PING.
    ///
    /// A password given here overrides any credential embedded in the URL,
    /// so the two config sources compose the way operators expect.
    pub async fn connect(url: &str, password: Option<&str>) -> Result<Self, StoreError> {
        let mut info = url.into_connection_info()?;
        if let Some(password) = password {
            info.redis.password = Some(password.to_string());
        }

        let client = Client::open(info)?;
        let mut conn = ConnectionManager::new(client).await?;

        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        tracing::info!(url = %url, "connected to Redis");

        Ok(Self { conn })
    }
}

#[async_trait]
impl ScoreStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<PlayerRecord>, StoreError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(key).await?;
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
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, payload).await?;
        Ok(())
    }

    async fn scan_page(
        &self,
        prefix: &str,
        cursor: u64,
        count: usize,
    ) -> Result<ScanPage, StoreError> {
        let mut conn = self.conn.clone();
        let pattern = format!("{}*", prefix);
        let (cursor, keys): (u64, Vec<String>) = redis::cmd("SCAN")
            .arg(cursor)
            .arg("MATCH")
            .arg(pattern)
            .arg("COUNT")
            .arg(count)
            .query_async(&mut conn)
            .await?;
        Ok(ScanPage { keys, cursor })
    }
}
