// ─── Command Surface ───
// The boundary the presentation layer calls. Commands are thin glue over
// core/: they resolve inputs, delegate, and return serializable payloads.
// Failures come back as `LauncherError` values; nothing may escape this
// boundary as a panic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::LauncherConfig;
use crate::core::error::LauncherResult;
use crate::core::launch;
use crate::core::mods::{self, ModRecord};
use crate::core::orbis::SearchResults;
use crate::core::paths;
use crate::core::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallModResponse {
    pub installed_path: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadModResponse {
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateExecutableResponse {
    pub path: PathBuf,
}

/// Keys of the persisted config document, spelled as they appear on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigKey {
    CustomModsPath,
    HytaleExePath,
    OrbisApiKey,
}

/// Platform-default Hytale installation directory.
pub fn default_hytale_path() -> PathBuf {
    paths::default_hytale_dir()
}

/// List the mods in `directory`. An unset directory is a safe empty state,
/// never an error.
pub async fn list_mods(directory: Option<PathBuf>) -> Vec<ModRecord> {
    mods::list_mods(directory.as_deref()).await
}

pub async fn set_mod_enabled(path: PathBuf, enabled: bool) -> LauncherResult<()> {
    mods::set_mod_enabled(&path, enabled).await
}

pub async fn delete_mod(path: PathBuf) -> LauncherResult<()> {
    mods::delete_mod(&path).await
}

pub async fn install_mod_file(
    directory: Option<PathBuf>,
    source: PathBuf,
) -> LauncherResult<InstallModResponse> {
    let installed_path = mods::install_mod_file(directory.as_deref(), &source).await?;
    Ok(InstallModResponse { installed_path })
}

/// Search the remote registry. The API key is re-read from config on every
/// call; without one the demo catalog is served.
pub async fn search_remote_mods(
    state: &AppState,
    page: u32,
    query: Option<String>,
    category: Option<String>,
) -> LauncherResult<SearchResults> {
    let config = state.config.load().await;
    state
        .orbis
        .search(
            config.orbis_api_key.as_deref(),
            page,
            query.as_deref(),
            category.as_deref(),
        )
        .await
}

pub async fn download_remote_mod(
    state: &AppState,
    url: String,
    directory: Option<PathBuf>,
    file_name: Option<String>,
) -> LauncherResult<DownloadModResponse> {
    let path = state
        .orbis
        .download(&url, directory.as_deref(), file_name.as_deref())
        .await?;
    Ok(DownloadModResponse { path })
}

pub async fn locate_game_executable(state: &AppState) -> LauncherResult<LocateExecutableResponse> {
    let path = launch::locate_executable(&state.config).await?;
    Ok(LocateExecutableResponse { path })
}

pub async fn launch_game(
    state: &AppState,
    exe_path: Option<PathBuf>,
    mods_directory: Option<PathBuf>,
) -> LauncherResult<()> {
    launch::launch_game(&state.config, exe_path, mods_directory).await
}

pub async fn get_config(state: &AppState) -> LauncherConfig {
    state.config.load().await
}

/// Write one key of the config document and return the updated document.
/// An empty value clears the key.
pub async fn set_config(
    state: &AppState,
    key: ConfigKey,
    value: Option<String>,
) -> LauncherResult<LauncherConfig> {
    let value = value.filter(|v| !v.is_empty());
    info!("Updating config key {:?}", key);

    state
        .config
        .update(|config| match key {
            ConfigKey::CustomModsPath => config.custom_mods_path = value.map(PathBuf::from),
            ConfigKey::HytaleExePath => config.hytale_exe_path = value.map(PathBuf::from),
            ConfigKey::OrbisApiKey => config.orbis_api_key = value,
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn config_round_trips_through_the_command_surface() {
        let dir = tempdir().unwrap();
        let state = AppState::with_config_dir(dir.path());

        assert_eq!(get_config(&state).await, LauncherConfig::default());

        let updated = set_config(&state, ConfigKey::OrbisApiKey, Some("k".into()))
            .await
            .unwrap();
        assert_eq!(updated.orbis_api_key.as_deref(), Some("k"));
        assert_eq!(get_config(&state).await, updated);
    }

    #[tokio::test]
    async fn empty_value_clears_a_config_key() {
        let dir = tempdir().unwrap();
        let state = AppState::with_config_dir(dir.path());

        set_config(&state, ConfigKey::CustomModsPath, Some("/tmp/mods".into()))
            .await
            .unwrap();
        let updated = set_config(&state, ConfigKey::CustomModsPath, Some(String::new()))
            .await
            .unwrap();
        assert!(updated.custom_mods_path.is_none());
    }

    #[tokio::test]
    async fn config_key_names_match_the_document() {
        let key: ConfigKey = serde_json::from_str(r#""customModsPath""#).unwrap();
        assert_eq!(key, ConfigKey::CustomModsPath);
        let key: ConfigKey = serde_json::from_str(r#""orbisApiKey""#).unwrap();
        assert_eq!(key, ConfigKey::OrbisApiKey);
    }

    #[tokio::test]
    async fn list_mods_with_no_directory_is_empty() {
        assert!(list_mods(None).await.is_empty());
    }

    #[tokio::test]
    async fn install_then_toggle_then_delete_full_cycle() {
        let dir = tempdir().unwrap();
        let mods_dir = dir.path().join("mods");
        let source = dir.path().join("cycle.jar");
        std::fs::write(&source, b"content").unwrap();

        let installed = install_mod_file(Some(mods_dir.clone()), source)
            .await
            .unwrap()
            .installed_path;

        let listed = list_mods(Some(mods_dir.clone())).await;
        assert_eq!(listed.len(), 1);
        assert!(listed[0].enabled);

        set_mod_enabled(installed.clone(), false).await.unwrap();
        let listed = list_mods(Some(mods_dir.clone())).await;
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].enabled);

        delete_mod(installed).await.unwrap();
        assert!(list_mods(Some(mods_dir)).await.is_empty());
    }
}
