use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::error::{LauncherError, LauncherResult};

const CONFIG_FILE: &str = "config.json";

/// The entire persisted configuration document.
///
/// Loaded in full on every read and rewritten in full on every write;
/// single-process, last write wins. Field names match the on-disk JSON keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LauncherConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_mods_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hytale_exe_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbis_api_key: Option<String>,
}

/// Whole-document JSON persistence for [`LauncherConfig`].
pub struct ConfigStore {
    config_path: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            config_path: config_dir.join(CONFIG_FILE),
        }
    }

    /// Load the document from disk. A missing or unreadable file yields the
    /// empty document rather than an error.
    pub async fn load(&self) -> LauncherConfig {
        match tokio::fs::read_to_string(&self.config_path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Corrupt config at {:?}: {}", self.config_path, e);
                LauncherConfig::default()
            }),
            Err(_) => LauncherConfig::default(),
        }
    }

    /// Replace the document on disk, creating the config directory on first
    /// use.
    pub async fn save(&self, config: &LauncherConfig) -> LauncherResult<()> {
        if let Some(parent) = self.config_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| LauncherError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let json = serde_json::to_string_pretty(config)?;
        tokio::fs::write(&self.config_path, json)
            .await
            .map_err(|source| LauncherError::Io {
                path: self.config_path.clone(),
                source,
            })
    }

    /// Read-modify-write of the whole document.
    pub async fn update<F>(&self, mutate: F) -> LauncherResult<LauncherConfig>
    where
        F: FnOnce(&mut LauncherConfig),
    {
        let mut config = self.load().await;
        mutate(&mut config);
        self.save(&config).await?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_file_loads_as_empty_document() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        assert_eq!(store.load().await, LauncherConfig::default());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty_document() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();
        let store = ConfigStore::new(dir.path());
        assert_eq!(store.load().await, LauncherConfig::default());
    }

    #[tokio::test]
    async fn update_persists_the_whole_document() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());

        store
            .update(|c| c.orbis_api_key = Some("secret".into()))
            .await
            .unwrap();
        let updated = store
            .update(|c| c.custom_mods_path = Some("/tmp/mods".into()))
            .await
            .unwrap();

        assert_eq!(updated.orbis_api_key.as_deref(), Some("secret"));

        let reloaded = store.load().await;
        assert_eq!(reloaded, updated);
    }

    #[tokio::test]
    async fn document_uses_camel_case_keys_on_disk() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path());
        store
            .update(|c| {
                c.custom_mods_path = Some("/tmp/mods".into());
                c.hytale_exe_path = Some("/opt/hytale/Hytale".into());
                c.orbis_api_key = Some("k".into());
            })
            .await
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(raw.contains("customModsPath"));
        assert!(raw.contains("hytaleExePath"));
        assert!(raw.contains("orbisApiKey"));
    }

    #[tokio::test]
    async fn unknown_keys_are_tolerated() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"orbisApiKey":"k","someFutureKey":42}"#,
        )
        .unwrap();
        let store = ConfigStore::new(dir.path());
        assert_eq!(store.load().await.orbis_api_key.as_deref(), Some("k"));
    }
}
