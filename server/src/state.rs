use std::sync::Arc;

use crate::store::ScoreStore;
use crate::ws::SubscriberRegistry;

/// Type alias for the shared store handle. Handlers never see the concrete
/// backend.
pub type SharedStore = Arc<dyn ScoreStore>;

/// Shared application state passed to all handlers via axum State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Score store backend (Redis in production, in-memory in tests)
    pub store: SharedStore,
    /// Active WebSocket subscriber connections
    pub subscribers: SubscriberRegistry,
    /// Keys fetched per page during leaderboard scans
    pub scan_page_size: usize,
}
