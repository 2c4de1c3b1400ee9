pub mod actor;
pub mod broadcast;
pub mod handler;
pub mod protocol;

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Identifies one live WebSocket connection for its lifetime.
pub type ConnectionId = u64;

/// Type alias for the sender half of a WebSocket connection's channel.
/// Other parts of the system can clone this to push frames to that client.
pub type ConnectionSender = mpsc::UnboundedSender<axum::extract::ws::Message>;

/// Subscriber registry: every live observer connection, keyed by id.
/// DashMap keeps concurrent add/remove/iterate safe from any task, and
/// removing an absent id is a no-op.
pub type SubscriberRegistry = Arc<DashMap<ConnectionId, ConnectionSender>>;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Create a new empty subscriber registry.
pub fn new_subscriber_registry() -> SubscriberRegistry {
    Arc::new(DashMap::new())
}

/// Allocate a process-unique connection id.
pub fn next_connection_id() -> ConnectionId {
    NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed)
}
