//! API state management for the REST server.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::store::CampaignStore;

/// Shared state for the REST API
#[derive(Clone)]
pub struct ApiState {
    /// Campaign store (thread-safe read-write access)
    pub store: Arc<RwLock<CampaignStore>>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl ApiState {
    /// Create new API state from config, loading the campaign store.
    ///
    /// A store that fails to load (corrupt file) is replaced with an empty
    /// in-memory one so the API can still serve health checks; the failure
    /// is logged and subsequent saves will surface at the route boundary.
    pub fn new(config: Config) -> Self {
        let store = CampaignStore::load(&config).unwrap_or_else(|e| {
            tracing::warn!("Failed to load campaign store: {e:#}");
            CampaignStore::default()
        });

        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_api_state_new_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();

        let state = ApiState::new(config);
        let store = state.store.blocking_read();
        assert!(store.is_empty());
    }

    #[test]
    fn test_api_state_shares_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();
        config.rest_api.port = 9000;

        let state = ApiState::new(config);
        assert_eq!(state.config.rest_api.port, 9000);
    }
}
