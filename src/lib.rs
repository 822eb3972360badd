pub mod commands;
pub mod core;

pub use crate::core::error::{LauncherError, LauncherResult};
pub use crate::core::state::AppState;

use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the backend. Call once at startup,
/// before the first command is issued.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hylauncher=debug")),
        )
        .init();

    tracing::info!("HyLauncher backend starting...");
}
