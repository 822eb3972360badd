// ─── Paths ───
// Platform-conventional locations for the game install, the mods folder
// and the launcher's own data. Pure lookups, no state.

use std::path::PathBuf;

const APP_DIR_NAME: &str = "HyLauncher";

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Default Hytale installation directory for the current platform.
pub fn default_hytale_dir() -> PathBuf {
    let home = home_dir();
    if cfg!(target_os = "windows") {
        home.join("AppData").join("Roaming").join(".hytale")
    } else if cfg!(target_os = "macos") {
        home.join("Library").join("Application Support").join("Hytale")
    } else {
        home.join(".hytale")
    }
}

/// Where mods land when the user has not configured a custom folder.
pub fn default_mods_dir() -> PathBuf {
    default_hytale_dir().join("mods")
}

/// Directory holding the launcher's persisted config document.
pub fn launcher_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Conventional install locations probed when no executable path is saved,
/// in search order.
pub fn executable_candidates() -> Vec<PathBuf> {
    let home = home_dir();
    if cfg!(target_os = "windows") {
        vec![
            PathBuf::from(r"C:\Program Files\Hytale\Hytale.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Hytale\Hytale.exe"),
            home.join("AppData")
                .join("Local")
                .join("Hytale")
                .join("Hytale.exe"),
            home.join("AppData")
                .join("Roaming")
                .join("Hytale")
                .join("Hytale.exe"),
        ]
    } else if cfg!(target_os = "macos") {
        vec![
            PathBuf::from("/Applications/Hytale.app/Contents/MacOS/Hytale"),
            home.join("Applications")
                .join("Hytale.app")
                .join("Contents")
                .join("MacOS")
                .join("Hytale"),
        ]
    } else {
        vec![
            home.join(".local").join("share").join("Hytale").join("Hytale"),
            PathBuf::from("/usr/local/bin/Hytale"),
            PathBuf::from("/usr/bin/Hytale"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mods_dir_is_under_the_install_dir() {
        assert!(default_mods_dir().starts_with(default_hytale_dir()));
        assert!(default_mods_dir().ends_with("mods"));
    }

    #[test]
    fn candidate_list_is_never_empty() {
        assert!(!executable_candidates().is_empty());
    }

    #[test]
    fn config_dir_is_app_scoped() {
        assert!(launcher_config_dir().ends_with(APP_DIR_NAME));
    }
}
