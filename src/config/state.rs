// Application state module
// Everything a connection handler needs, shared read-only across connections

use super::types::Config;
use crate::handler::{DiskStore, FileStore, StaticSite};

/// Application state
pub struct AppState<S = DiskStore> {
    pub config: Config,
    pub site: StaticSite<S>,
}

impl AppState<DiskStore> {
    /// Create `AppState` serving the configured content root from disk
    pub fn from_config(config: Config) -> Self {
        let site = StaticSite::from_config(&config);
        Self::new(config, site)
    }
}

impl<S: FileStore> AppState<S> {
    pub const fn new(config: Config, site: StaticSite<S>) -> Self {
        Self { config, site }
    }
}
