/// Shared application state
use crate::version::VersionInfo;
use roster_core::{DirectoryQueryService, DirectoryStore, UserDirectory};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectory>,
    pub version: Arc<VersionInfo>,
}

impl AppState {
    pub fn new(directory: Arc<dyn UserDirectory>, version: Arc<VersionInfo>) -> Self {
        Self { directory, version }
    }

    /// State backed by the reference seed directory
    pub fn seeded(version: VersionInfo) -> Self {
        Self::new(
            Arc::new(DirectoryQueryService::new(DirectoryStore::seeded())),
            Arc::new(version),
        )
    }
}
