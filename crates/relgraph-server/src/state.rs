//! Shared application state.

use relgraph_core::RelGraphConfig;

/// Shared application state accessible from all route handlers.
///
/// Analysis is stateless, so this only carries configuration and the
/// process start time.
pub struct AppState {
    pub config: RelGraphConfig,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: RelGraphConfig) -> Self {
        Self {
            config,
            started_at: chrono::Utc::now(),
        }
    }
}
