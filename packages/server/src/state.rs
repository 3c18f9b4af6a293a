use crate::config::{DiscoveryConfig, EnvConfig};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Source of the published values, consulted on every request
    pub config: Arc<dyn DiscoveryConfig>,
}

impl AppState {
    pub fn new(config: Arc<dyn DiscoveryConfig>) -> Self {
        Self { config }
    }

    /// State backed by the live process environment.
    pub fn from_env() -> Self {
        Self::new(Arc::new(EnvConfig))
    }
}
