use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::header::LOCATION;
use reqwest::{Client, StatusCode, Url};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::core::error::{LauncherError, LauncherResult};
use crate::core::http;

use super::demo;
use super::model::{normalize_search_payload, SearchEnvelope, SearchResults};
use super::API_BASE_URL;

/// Mods requested per search page.
pub const SEARCH_PAGE_LIMIT: u32 = 50;

/// Client for the Orbis mod registry.
///
/// Owns two HTTP clients: one for API calls, and one with automatic
/// redirects disabled so artifact downloads follow exactly one hop
/// manually. Credentials are passed per call; the config document is the
/// source of truth and is re-read by the command layer on every request.
pub struct OrbisClient {
    http: Client,
    download_http: Client,
    api_base: String,
}

impl OrbisClient {
    pub fn new() -> Self {
        Self::with_api_base(API_BASE_URL)
    }

    /// Point the client at a different registry host (self-hosted Orbis).
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            http: http::build_http_client().expect("Failed to build HTTP client"),
            download_http: http::build_download_client().expect("Failed to build HTTP client"),
            api_base: api_base.into(),
        }
    }

    // ── Search ──────────────────────────────────────────

    /// Query the registry for mods. Without an API key this serves the
    /// built-in demo catalog instead of touching the network.
    pub async fn search(
        &self,
        api_key: Option<&str>,
        page: u32,
        query: Option<&str>,
        category: Option<&str>,
    ) -> LauncherResult<SearchResults> {
        let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) else {
            debug!("No API key configured, serving demo catalog");
            return Ok(SearchResults {
                records: demo::filter_catalog(demo::demo_catalog(), query, category),
                demo_mode: true,
                pagination: None,
                message: Some(demo::DEMO_MODE_MESSAGE.to_string()),
            });
        };

        let mut url = Url::parse(&format!("{}/resources", self.api_base))
            .map_err(|e| LauncherError::Other(format!("Invalid registry URL: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            pairs.append_pair("limit", &SEARCH_PAGE_LIMIT.to_string());
            if let Some(query) = query.filter(|q| !q.is_empty()) {
                pairs.append_pair("search", query);
            }
            if let Some(category) = category.filter(|c| !c.is_empty()) {
                pairs.append_pair("category", category);
            }
        }

        let response = self.http.get(url).header("x-api-key", api_key).send().await?;
        let status = response.status();
        debug!("Registry search responded with {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LauncherError::RateLimited);
        }
        if status != StatusCode::OK {
            return Err(upstream_error(status));
        }

        let body = response.text().await?;
        let envelope: SearchEnvelope =
            serde_json::from_str(&body).map_err(|e| LauncherError::Parse(e.to_string()))?;
        let normalized = normalize_search_payload(envelope);

        info!("Registry search returned {} mods", normalized.records.len());
        Ok(SearchResults {
            records: normalized.records,
            demo_mode: false,
            pagination: normalized.pagination,
            message: None,
        })
    }

    // ── Download ────────────────────────────────────────

    /// Download a mod artifact into `dest_dir`, following at most one
    /// redirect hop. A failure after the destination file was created
    /// removes it again, so a broken transfer never leaves a corrupt
    /// artifact behind. Returns the final destination path.
    pub async fn download(
        &self,
        url: &str,
        dest_dir: Option<&Path>,
        file_name: Option<&str>,
    ) -> LauncherResult<PathBuf> {
        let Some(dest_dir) = dest_dir.filter(|d| !d.as_os_str().is_empty()) else {
            return Err(LauncherError::NotConfigured("Mods folder"));
        };

        tokio::fs::create_dir_all(dest_dir)
            .await
            .map_err(|source| LauncherError::Io {
                path: dest_dir.to_path_buf(),
                source,
            })?;

        let parsed = Url::parse(url)
            .map_err(|e| LauncherError::Other(format!("Invalid download URL {url}: {e}")))?;
        let name = match file_name.filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => file_name_from_url(&parsed),
        };
        let dest = dest_dir.join(&name);

        let response = self.download_http.get(parsed.clone()).send().await?;
        let response = if matches!(
            response.status(),
            StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND
        ) {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    LauncherError::Other("Redirect response without a Location header".into())
                })?;
            // The Location may be relative; resolve it against the original
            // URL. Whatever this second request returns is final.
            let target = parsed
                .join(location)
                .map_err(|e| LauncherError::Other(format!("Invalid redirect target: {e}")))?;
            debug!("Following redirect to {}", target);
            self.download_http.get(target).send().await?
        } else {
            response
        };

        let status = response.status();
        if !status.is_success() {
            return Err(upstream_error(status));
        }

        if let Err(error) = write_body_to_file(response, &dest).await {
            let _ = tokio::fs::remove_file(&dest).await;
            return Err(error);
        }

        info!("Downloaded {} -> {:?}", url, dest);
        Ok(dest)
    }
}

impl Default for OrbisClient {
    fn default() -> Self {
        Self::new()
    }
}

fn upstream_error(status: StatusCode) -> LauncherError {
    LauncherError::Upstream {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("").to_string(),
    }
}

/// Destination name for a download without an explicit one: the last path
/// segment of the URL.
fn file_name_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "download.jar".to_string())
}

async fn write_body_to_file(response: reqwest::Response, dest: &Path) -> LauncherResult<()> {
    // Scope the handle so it is closed before the caller inspects the file.
    let mut file = tokio::fs::File::create(dest)
        .await
        .map_err(|source| LauncherError::Io {
            path: dest.to_path_buf(),
            source,
        })?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|source| LauncherError::Io {
                path: dest.to_path_buf(),
                source,
            })?;
    }

    file.flush().await.map_err(|source| LauncherError::Io {
        path: dest.to_path_buf(),
        source,
    })
}
