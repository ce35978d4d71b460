//! Request and response types for the Jira and Ollama HTTP APIs.
//!
//! Response fields default when absent or `null` so that partial records
//! still parse; callers decide what to do with the gaps.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Jira search (GET /rest/api/3/search/jql)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<RawIssue>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawIssue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: RawIssueFields,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawIssueFields {
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RawNamed,
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<RawNamed>,
}

/// Any Jira object that only matters for its `name` (status, component)
#[derive(Debug, Default, Deserialize)]
pub(super) struct RawNamed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

// ============================================================================
// Ollama generate (POST /api/generate)
// ============================================================================

#[derive(Debug, Serialize)]
pub(super) struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub done: bool,
}
