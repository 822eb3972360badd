use std::path::Path;

use crate::core::config::ConfigStore;
use crate::core::orbis::OrbisClient;
use crate::core::paths;

/// Long-lived collaborators shared by every command.
///
/// Deliberately small: mod listings and config reads always go back to disk
/// truth, so nothing here caches state that an external process could
/// invalidate.
pub struct AppState {
    pub config: ConfigStore,
    pub orbis: OrbisClient,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config_dir(&paths::launcher_config_dir())
    }

    /// State rooted at an explicit config directory (portable installs,
    /// tests).
    pub fn with_config_dir(config_dir: &Path) -> Self {
        Self {
            config: ConfigStore::new(config_dir),
            orbis: OrbisClient::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
