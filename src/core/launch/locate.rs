// ─── Executable Discovery ───

use std::path::PathBuf;

use tracing::info;

use crate::core::config::ConfigStore;
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths;

/// Resolve the game executable.
///
/// The previously saved path wins while it still exists. A stale saved path
/// degrades to probing the platform-conventional install locations, and a
/// successful probe is persisted back so the cache heals itself.
pub async fn locate_executable(config_store: &ConfigStore) -> LauncherResult<PathBuf> {
    let config = config_store.load().await;
    if let Some(saved) = &config.hytale_exe_path {
        if tokio::fs::try_exists(saved).await.unwrap_or(false) {
            return Ok(saved.clone());
        }
        info!(
            "Saved executable path {:?} is stale, probing default locations",
            saved
        );
    }

    for candidate in paths::executable_candidates() {
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            info!("Found Hytale executable at {:?}", candidate);
            config_store
                .update(|c| c.hytale_exe_path = Some(candidate.clone()))
                .await?;
            return Ok(candidate);
        }
    }

    Err(LauncherError::NotFound("Hytale executable".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn saved_path_wins_while_it_exists() {
        let dir = tempdir().unwrap();
        let exe = dir.path().join("Hytale");
        std::fs::write(&exe, b"#!/bin/sh\n").unwrap();

        let store = ConfigStore::new(dir.path());
        store
            .update(|c| c.hytale_exe_path = Some(exe.clone()))
            .await
            .unwrap();

        assert_eq!(locate_executable(&store).await.unwrap(), exe);
    }

    #[tokio::test]
    async fn stale_path_degrades_to_probing() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        store
            .update(|c| c.hytale_exe_path = Some(dir.path().join("gone")))
            .await
            .unwrap();

        // No conventional install location exists either, so this fails,
        // but with NotFound rather than the stale saved path.
        let error = locate_executable(&store).await.unwrap_err();
        assert!(matches!(error, LauncherError::NotFound(_)));
    }
}
