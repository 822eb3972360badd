// ─── HyLauncher Core ───
// Backend modules behind the launcher's command surface.
//
// Architecture:
//   core/
//     config/  — persisted launcher configuration document
//     mods/    — local mod library: scan, toggle, delete, install
//     orbis/   — remote registry: search, normalize, download
//     launch/  — executable discovery + detached game spawn
//     state/   — long-lived shared collaborators
//     paths    — platform-conventional locations
//     http     — shared HTTP client construction
//     error    — central error taxonomy

pub mod config;
pub mod error;
pub mod http;
pub mod launch;
pub mod mods;
pub mod orbis;
pub mod paths;
pub mod state;
