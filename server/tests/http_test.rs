//! Integration tests for the HTTP surface: player creation and lookup,
//! leaderboard ordering, corrupt-record behavior, and CORS preflight.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::net::TcpListener;

use leaderboard_server::players::{player_key, PlayerRecord};
use leaderboard_server::state::AppState;
use leaderboard_server::store::memory::MemoryStore;
use leaderboard_server::store::ScoreStore;
use leaderboard_server::ws::new_subscriber_registry;

/// Helper: start the server on a random port over an in-memory store and
/// return (base_url, state, store handle for direct seeding).
async fn start_test_server(scan_page_size: usize) -> (String, AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        subscribers: new_subscriber_registry(),
        scan_page_size,
    };

    let app = leaderboard_server::routes::build_router(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state, store)
}

fn record(username: &str, score: i64) -> PlayerRecord {
    PlayerRecord {
        username: username.to_string(),
        score,
    }
}

#[tokio::test]
async fn test_add_user_is_idempotent() {
    let (base_url, _state, store) = start_test_server(100).await;
    let client = reqwest::Client::new();

    // First add: created with score 0, whatever score was submitted.
    let resp = client
        .post(format!("{}/add-user", base_url))
        .json(&json!({"username": "alice", "score": 50}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["state"], "newly added");
    assert_eq!(body["username"], "alice");
    assert_eq!(body["score"], 0);

    // Second add: reports the stored record, ignores the new score.
    let resp = client
        .post(format!("{}/add-user", base_url))
        .json(&json!({"username": "alice", "score": 99}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["state"], "already exists");
    assert_eq!(body["score"], 0);

    // After the score changes out of band, re-adding reports that score.
    store
        .set(&player_key("alice"), &record("alice", 42))
        .await
        .unwrap();
    let resp = client
        .post(format!("{}/add-user", base_url))
        .json(&json!({"username": "alice", "score": 7}))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["state"], "already exists");
    assert_eq!(body["score"], 42);
}

#[tokio::test]
async fn test_add_user_rejects_empty_username() {
    let (base_url, _state, _store) = start_test_server(100).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/add-user", base_url))
        .json(&json!({"username": "", "score": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_get_user_lookup_and_errors() {
    let (base_url, _state, store) = start_test_server(100).await;
    let client = reqwest::Client::new();

    // Missing parameter
    let resp = client
        .get(format!("{}/get-user", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Unknown player
    let resp = client
        .get(format!("{}/get-user?username=ghost", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Stored player round-trips
    store
        .set(&player_key("alice"), &record("alice", 10))
        .await
        .unwrap();
    let resp = client
        .get(format!("{}/get-user?username=alice", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"username": "alice", "score": 10}));
}

#[tokio::test]
async fn test_leaderboard_ranks_descending_across_pages() {
    // Page size 2 forces the handler through several scan pages.
    let (base_url, _state, store) = start_test_server(2).await;
    let client = reqwest::Client::new();

    for (username, score) in [
        ("alice", 10),
        ("bob", 20),
        ("carol", 20),
        ("dave", 5),
        ("erin", 30),
    ] {
        store
            .set(&player_key(username), &record(username, score))
            .await
            .unwrap();
    }

    let resp = client
        .get(format!("{}/get-user-details", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    assert_eq!(
        body,
        json!([
            {"username": "erin", "score": 30},
            {"username": "bob", "score": 20},
            {"username": "carol", "score": 20},
            {"username": "alice", "score": 10},
            {"username": "dave", "score": 5},
        ])
    );
}

#[tokio::test]
async fn test_corrupt_record_fails_the_leaderboard_call() {
    let (base_url, _state, store) = start_test_server(100).await;
    let client = reqwest::Client::new();

    store
        .set(&player_key("alice"), &record("alice", 10))
        .await
        .unwrap();
    store.insert_raw("user:broken", "not json");

    let resp = client
        .get(format!("{}/get-user-details", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
}

#[tokio::test]
async fn test_cors_preflight_is_permissive() {
    let (base_url, _state, _store) = start_test_server(100).await;
    let client = reqwest::Client::new();

    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{}/add-user", base_url))
        .header("Origin", "http://example.com")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_health_check() {
    let (base_url, _state, _store) = start_test_server(100).await;

    let resp = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}
