use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the entire launcher backend.
/// Every fallible operation returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── Configuration ───────────────────────────────────
    #[error("{0} not set. Please configure it in Settings.")]
    NotConfigured(&'static str),

    // ── Filesystem ──────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0} not found. Please set the path in Settings.")]
    NotFound(String),

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} {reason}")]
    Upstream { status: u16, reason: String },

    #[error("Rate limit exceeded. Please wait before trying again.")]
    RateLimited,

    #[error("Failed to parse API response: {0}")]
    Parse(String),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl From<std::io::Error> for LauncherError {
    fn from(source: std::io::Error) -> Self {
        LauncherError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

// ── Serialization for the command boundary ──────────────
// The presentation layer displays the error message verbatim.
impl serde::Serialize for LauncherError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
