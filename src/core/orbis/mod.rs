// ─── Orbis Registry ───
// Client for the remote mod registry: search + normalization of its
// drifting response shapes, the credential-less demo catalog, and artifact
// downloads.

mod client;
mod demo;
mod model;

pub use client::{OrbisClient, SEARCH_PAGE_LIMIT};
pub use demo::DEMO_MODE_MESSAGE;
pub use model::{RemoteModRecord, SearchResults};

/// Base URL of the hosted Orbis registry.
pub const API_BASE_URL: &str = "https://api.orbis.place";
