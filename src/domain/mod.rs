//! Domain types shared across modules.
//!
//! These are produced by the API layer (issue search) or the CLI (commit
//! annotations) and consumed by the note renderer. None of them is ever
//! persisted on its own.

/// A normalized issue from the tracker's search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    /// Tracker identifier, e.g. `PROJ-123`
    pub key: String,
    pub summary: String,
    /// Status label as reported by the tracker
    pub status: String,
    /// `<base_url>/browse/<key>`
    pub url: String,
    /// Component names; empty unless readme links are enabled
    pub components: Vec<String>,
}

/// A commit message reported against a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAnnotation {
    pub repo: String,
    pub message: String,
}

impl CommitAnnotation {
    pub fn new(repo: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            message: message.into(),
        }
    }
}
