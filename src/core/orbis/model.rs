// ─── Registry Models ───
// The upstream API has drifted over time: the mod list arrives as a bare
// array, or nested under `data` or `mods` with pagination in `meta`, and
// the download link has been spelled half a dozen ways. Everything funnels
// through one normalization step into `RemoteModRecord` so the rest of the
// launcher sees a single shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::API_BASE_URL;

/// A registry mod after normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteModRecord {
    pub id: String,
    pub name: String,
    pub author: String,
    pub description: String,
    pub downloads: u64,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub categories: Vec<String>,
}

/// Result payload of a registry search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub records: Vec<RemoteModRecord>,
    pub demo_mode: bool,
    /// Upstream `meta` object, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ── Upstream shapes ─────────────────────────────────────

/// The three known response containers, plus a fallback for anything else.
/// Variant order matters: serde tries them top to bottom.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchEnvelope {
    Data {
        data: Vec<RawMod>,
        #[serde(default)]
        meta: Option<Value>,
    },
    Mods {
        mods: Vec<RawMod>,
        #[serde(default)]
        meta: Option<Value>,
    },
    Bare(Vec<RawMod>),
    Unrecognized(Value),
}

/// A mod record as the registry sends it. Every field is optional; missing
/// data is filled with documented defaults during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMod {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub download_count: Option<u64>,
    pub latest_version: Option<RawVersion>,
    pub latest_version_id: Option<Value>,
    pub owner_user: Option<RawOwner>,
    pub icon_url: Option<String>,
    pub categories: Option<Vec<String>>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVersion {
    pub version_number: Option<String>,
    pub download_url: Option<String>,
    pub url: Option<String>,
    pub file_url: Option<String>,
    pub download_path: Option<String>,
    pub file: Option<RawFile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFile {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOwner {
    pub username: Option<String>,
    pub name: Option<String>,
}

// ── Normalization ───────────────────────────────────────

#[derive(Debug)]
pub struct NormalizedSearch {
    pub records: Vec<RemoteModRecord>,
    pub pagination: Option<Value>,
}

/// Flatten whichever container the registry returned into one ordered
/// record list. An unrecognized shape yields an empty list instead of a
/// guess, so upstream drift shows up as a diagnostic rather than garbage.
pub fn normalize_search_payload(envelope: SearchEnvelope) -> NormalizedSearch {
    let (raw_mods, meta) = match envelope {
        SearchEnvelope::Data { data, meta } => (data, meta),
        SearchEnvelope::Mods { mods, meta } => (mods, meta),
        SearchEnvelope::Bare(mods) => (mods, None),
        SearchEnvelope::Unrecognized(raw) => {
            let preview: String = raw.to_string().chars().take(200).collect();
            warn!("Unrecognized registry response shape: {}", preview);
            return NormalizedSearch {
                records: Vec::new(),
                pagination: None,
            };
        }
    };

    NormalizedSearch {
        records: raw_mods.iter().map(RemoteModRecord::from_raw).collect(),
        pagination: meta,
    }
}

impl RemoteModRecord {
    pub fn from_raw(raw: &RawMod) -> Self {
        let author = raw
            .owner_user
            .as_ref()
            .and_then(|owner| owner.username.clone().or_else(|| owner.name.clone()))
            .unwrap_or_else(|| "Unknown".to_string());

        let categories = raw
            .categories
            .clone()
            .or_else(|| raw.category.clone().map(|c| vec![c]))
            .unwrap_or_default();

        Self {
            id: raw.id.as_ref().and_then(value_to_id).unwrap_or_default(),
            name: raw.name.clone().unwrap_or_default(),
            author,
            description: raw
                .tagline
                .clone()
                .or_else(|| raw.description.clone())
                .unwrap_or_default(),
            downloads: raw.download_count.unwrap_or(0),
            version: raw
                .latest_version
                .as_ref()
                .and_then(|v| v.version_number.clone())
                .unwrap_or_else(|| "1.0.0".to_string()),
            download_url: resolve_download_url(raw),
            icon_url: raw.icon_url.clone(),
            categories,
        }
    }
}

/// Ids arrive as numbers or strings depending on the registry version.
fn value_to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ── Download URL resolution ─────────────────────────────
// Ordered by trust: the explicit field, alternate spellings seen in the
// wild, then endpoints constructed from ids. First hit wins. Each extractor
// is pure so the chain can grow as the API drifts further.

type UrlExtractor = fn(&RawMod) -> Option<String>;

const DOWNLOAD_URL_EXTRACTORS: &[UrlExtractor] = &[
    explicit_version_url,
    alternate_version_url,
    constructed_version_endpoint,
    constructed_mod_endpoint,
];

pub fn resolve_download_url(raw: &RawMod) -> Option<String> {
    DOWNLOAD_URL_EXTRACTORS
        .iter()
        .find_map(|extract| extract(raw))
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn explicit_version_url(raw: &RawMod) -> Option<String> {
    non_empty(&raw.latest_version.as_ref()?.download_url)
}

fn alternate_version_url(raw: &RawMod) -> Option<String> {
    let version = raw.latest_version.as_ref()?;
    non_empty(&version.url)
        .or_else(|| non_empty(&version.file_url))
        .or_else(|| non_empty(&version.download_path))
        .or_else(|| version.file.as_ref().and_then(|f| non_empty(&f.url)))
}

fn constructed_version_endpoint(raw: &RawMod) -> Option<String> {
    let id = raw.id.as_ref().and_then(value_to_id)?;
    let version_id = raw.latest_version_id.as_ref().and_then(value_to_id)?;
    Some(format!(
        "{API_BASE_URL}/resources/{id}/versions/{version_id}/download"
    ))
}

fn constructed_mod_endpoint(raw: &RawMod) -> Option<String> {
    let id = raw.id.as_ref().and_then(value_to_id)?;
    Some(format!("{API_BASE_URL}/resources/{id}/download"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(payload: &str) -> SearchEnvelope {
        serde_json::from_str(payload).unwrap()
    }

    #[test]
    fn data_container_keeps_order_and_meta() {
        let normalized = normalize_search_payload(parse(
            r#"{"data":[{"id":1,"name":"A"},{"id":2,"name":"B"},{"id":3,"name":"C"}],
                "meta":{"page":2,"total":40}}"#,
        ));

        assert_eq!(normalized.records.len(), 3);
        let names: Vec<_> = normalized.records.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(normalized.pagination.unwrap()["page"], 2);
    }

    #[test]
    fn mods_container_is_recognized() {
        let normalized = normalize_search_payload(parse(
            r#"{"mods":[{"id":"abc","name":"Solo"}],"meta":{"page":1}}"#,
        ));
        assert_eq!(normalized.records.len(), 1);
        assert_eq!(normalized.records[0].id, "abc");
    }

    #[test]
    fn bare_array_has_empty_pagination() {
        let normalized =
            normalize_search_payload(parse(r#"[{"id":1,"name":"A"},{"id":2,"name":"B"}]"#));
        assert_eq!(normalized.records.len(), 2);
        assert!(normalized.pagination.is_none());
    }

    #[test]
    fn unrecognized_shape_falls_back_to_empty() {
        let normalized = normalize_search_payload(parse(r#"{"surprise":true}"#));
        assert!(normalized.records.is_empty());
        assert!(normalized.pagination.is_none());
    }

    #[test]
    fn missing_fields_use_documented_defaults() {
        let normalized = normalize_search_payload(parse(r#"[{"id":7}]"#));
        let record = &normalized.records[0];
        assert_eq!(record.author, "Unknown");
        assert_eq!(record.description, "");
        assert_eq!(record.downloads, 0);
        assert_eq!(record.version, "1.0.0");
        assert!(record.categories.is_empty());
    }

    #[test]
    fn tagline_wins_over_description() {
        let normalized = normalize_search_payload(parse(
            r#"[{"id":1,"tagline":"short","description":"long"}]"#,
        ));
        assert_eq!(normalized.records[0].description, "short");
    }

    #[test]
    fn numeric_ids_normalize_to_strings() {
        let normalized = normalize_search_payload(parse(r#"[{"id":42,"name":"N"}]"#));
        assert_eq!(normalized.records[0].id, "42");
    }

    #[test]
    fn explicit_download_url_wins() {
        let raw: RawMod = serde_json::from_str(
            r#"{"id":1,"latestVersionId":9,
                "latestVersion":{"downloadUrl":"https://cdn/x.jar","url":"https://cdn/other"}}"#,
        )
        .unwrap();
        assert_eq!(
            resolve_download_url(&raw).as_deref(),
            Some("https://cdn/x.jar")
        );
    }

    #[test]
    fn empty_explicit_url_falls_through_to_alternates() {
        let raw: RawMod = serde_json::from_str(
            r#"{"id":1,"latestVersion":{"downloadUrl":"","fileUrl":"https://cdn/alt.jar"}}"#,
        )
        .unwrap();
        assert_eq!(
            resolve_download_url(&raw).as_deref(),
            Some("https://cdn/alt.jar")
        );
    }

    #[test]
    fn nested_file_url_is_used() {
        let raw: RawMod = serde_json::from_str(
            r#"{"id":1,"latestVersion":{"file":{"url":"https://cdn/nested.jar"}}}"#,
        )
        .unwrap();
        assert_eq!(
            resolve_download_url(&raw).as_deref(),
            Some("https://cdn/nested.jar")
        );
    }

    #[test]
    fn version_endpoint_is_constructed_from_ids() {
        let raw: RawMod = serde_json::from_str(r#"{"id":5,"latestVersionId":12}"#).unwrap();
        assert_eq!(
            resolve_download_url(&raw).as_deref(),
            Some("https://api.orbis.place/resources/5/versions/12/download")
        );
    }

    #[test]
    fn mod_endpoint_is_the_last_resort() {
        let raw: RawMod = serde_json::from_str(r#"{"id":"m9"}"#).unwrap();
        assert_eq!(
            resolve_download_url(&raw).as_deref(),
            Some("https://api.orbis.place/resources/m9/download")
        );
    }

    #[test]
    fn no_id_means_no_url() {
        let raw = RawMod::default();
        assert!(resolve_download_url(&raw).is_none());
    }
}
