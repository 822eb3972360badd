// ─── Mod Library ───
// The local mod state machine. A mod's enabled/disabled state lives in its
// file name: `<mod>.jar` is enabled, `<mod>.jar.disabled` is disabled. At
// most one of the two forms should exist per mod; when both do, the
// disabled marker wins.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::paths;

use super::model::ModRecord;

/// Recognized mod archive suffixes.
pub const MOD_EXTENSIONS: [&str; 2] = [".jar", ".zip"];

/// Marker appended to a mod's file name while it is disabled.
pub const DISABLED_SUFFIX: &str = ".disabled";

fn has_mod_extension(name: &str) -> bool {
    MOD_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// `<mod>.jar` → `<mod>.jar.disabled`.
fn disabled_variant(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(DISABLED_SUFFIX);
    PathBuf::from(raw)
}

/// Scan `dir` and derive the current mod set from file naming alone.
///
/// Never fails: an unset or empty directory yields an empty listing so the
/// caller can treat "not configured yet" as a safe empty state, and scan
/// errors degrade to an empty listing with a warning. The directory is
/// created on first use. Records come back in enumeration order; no further
/// ordering is guaranteed.
pub async fn list_mods(dir: Option<&Path>) -> Vec<ModRecord> {
    let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) else {
        return Vec::new();
    };

    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        warn!("Cannot access mods directory {:?}: {}", dir, e);
        return Vec::new();
    }

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read mods directory {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    let mut mods: Vec<ModRecord> = Vec::new();
    let mut by_canonical_path: HashMap<PathBuf, usize> = HashMap::new();

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!("Error while scanning {:?}: {}", dir, e);
                break;
            }
        };

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        let metadata = match entry.metadata().await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Cannot stat {:?}: {}", entry.path(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        // A disabled mod is stored under its canonical name plus the marker;
        // surface it under the canonical identity.
        let (canonical_name, enabled) = match name.strip_suffix(DISABLED_SUFFIX) {
            Some(stripped) => (stripped, false),
            None => (name, true),
        };
        if !has_mod_extension(canonical_name) {
            continue;
        }

        let canonical_path = dir.join(canonical_name);
        let record = ModRecord {
            name: canonical_name.to_string(),
            path: canonical_path.clone(),
            size: metadata.len(),
            modified: metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            enabled,
        };

        match by_canonical_path.entry(canonical_path) {
            Entry::Vacant(slot) => {
                slot.insert(mods.len());
                mods.push(record);
            }
            Entry::Occupied(slot) => {
                // Both forms exist on disk. Tie-break: disabled wins.
                if !enabled {
                    mods[*slot.get()] = record;
                }
            }
        }
    }

    debug!("Listed {} mods in {:?}", mods.len(), dir);
    mods
}

/// Flip a mod's on-disk state by renaming to or from the `.disabled` marker.
///
/// Requesting a state that already holds (or naming a mod that is gone
/// entirely) is a no-op success, so the operation is safe to re-issue.
pub async fn set_mod_enabled(path: &Path, enabled: bool) -> LauncherResult<()> {
    let disabled = disabled_variant(path);
    let (from, to) = if enabled {
        (disabled, path.to_path_buf())
    } else {
        (path.to_path_buf(), disabled)
    };

    match tokio::fs::rename(&from, &to).await {
        Ok(()) => {
            debug!("Renamed {:?} -> {:?}", from, to);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(LauncherError::Io { path: from, source }),
    }
}

/// Remove a mod in whichever form it exists. A missing file is not an
/// error; anything else (permissions, ...) surfaces.
pub async fn delete_mod(path: &Path) -> LauncherResult<()> {
    remove_if_present(path).await?;
    remove_if_present(&disabled_variant(path)).await?;
    info!("Deleted mod {:?}", path);
    Ok(())
}

async fn remove_if_present(path: &Path) -> LauncherResult<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(LauncherError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Copy `source` into the mods directory, keeping its file name. Falls back
/// to the platform-default mods folder when no directory is given.
///
/// An existing file of the same name is overwritten; callers that care about
/// collisions must check beforehand.
pub async fn install_mod_file(dir: Option<&Path>, source: &Path) -> LauncherResult<PathBuf> {
    let dir = match dir.filter(|d| !d.as_os_str().is_empty()) {
        Some(dir) => dir.to_path_buf(),
        None => paths::default_mods_dir(),
    };

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|source| LauncherError::Io {
            path: dir.clone(),
            source,
        })?;

    let file_name = source
        .file_name()
        .ok_or_else(|| LauncherError::Other(format!("Not a file: {:?}", source)))?;
    let dest = dir.join(file_name);

    tokio::fs::copy(source, &dest)
        .await
        .map_err(|e| LauncherError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;

    info!("Installed {:?} -> {:?}", source, dest);
    Ok(dest)
}
