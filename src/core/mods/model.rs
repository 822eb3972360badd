use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A locally installed mod archive, derived from a single directory scan.
///
/// Nothing here is persisted: every listing re-reads disk truth, since the
/// user or the game may alter the directory between calls. The enabled flag
/// is computed from the `.disabled` naming convention, not stored anywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRecord {
    /// File name at the canonical (enabled) path.
    pub name: String,
    /// Canonical path, without the `.disabled` marker.
    pub path: PathBuf,
    pub size: u64,
    pub modified: DateTime<Utc>,
    pub enabled: bool,
}
