//! Player records and the store key scheme.
//!
//! One record per player, keyed by `user:{username}` and overwritten in
//! place on every score change. The store is schema-less, so everything the
//! service knows about a player must round-trip through this key scheme.

pub mod handlers;

use serde::{Deserialize, Serialize};

/// Prefix shared by every player key in the store.
pub const USER_KEY_PREFIX: &str = "user:";

/// A player's persisted state. Identity is the username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub username: String,
    pub score: i64,
}

/// Build the store key for a username.
pub fn player_key(username: &str) -> String {
    format!("{}{}", USER_KEY_PREFIX, username)
}

/// Extract the username from a store key.
///
/// Returns `None` for keys outside the player keyspace or with extra
/// separators (`user:a:b` is not a player key). Callers skip such keys
/// with a warning rather than failing the scan.
pub fn parse_player_key(key: &str) -> Option<&str> {
    let username = key.strip_prefix(USER_KEY_PREFIX)?;
    if username.is_empty() || username.contains(':') {
        return None;
    }
    Some(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_key_roundtrip() {
        let key = player_key("alice");
        assert_eq!(key, "user:alice");
        assert_eq!(parse_player_key(&key), Some("alice"));
    }

    #[test]
    fn test_parse_rejects_foreign_prefix() {
        assert_eq!(parse_player_key("session:alice"), None);
        assert_eq!(parse_player_key("alice"), None);
    }

    #[test]
    fn test_parse_rejects_extra_separator() {
        assert_eq!(parse_player_key("user:a:b"), None);
    }

    #[test]
    fn test_parse_rejects_empty_username() {
        assert_eq!(parse_player_key("user:"), None);
    }

    #[test]
    fn test_record_json_shape() {
        let record = PlayerRecord {
            username: "alice".to_string(),
            score: 10,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"username":"alice","score":10}"#);
    }
}
