use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::api::JiraClient;
use crate::config::Settings;
use crate::notes;

/// Result of `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A note for the day was already there; nothing was fetched or written
    AlreadyExists,
    /// A new note was written with this many Jira issues
    Created { issues: usize },
}

pub async fn run_start(settings: &Settings, jira: &JiraClient, date: &str) -> Result<StartOutcome> {
    let path = notes::daily_note_path(settings, date)?;

    if notes::exists(&path) {
        println!("Daily note already exists: {}.md", date);
        return Ok(StartOutcome::AlreadyExists);
    }

    let issues = create_note(jira, &path, date).await?;
    println!("{}", created_message(date, issues));

    Ok(StartOutcome::Created { issues })
}

/// Confirmation line for a newly created note.
pub(super) fn created_message(date: &str, issues: usize) -> String {
    if issues == 0 {
        format!("Created daily note: {}.md (no active Jira tasks)", date)
    } else {
        format!("Created daily note: {}.md ({} Jira tasks)", date, issues)
    }
}

/// Fetch issues, render a fresh note, and write it to `path`.
/// Returns the number of issues in the note.
pub(super) async fn create_note(jira: &JiraClient, path: &Path, date: &str) -> Result<usize> {
    let issues = jira.search_issues().await?;
    let content = notes::render_base_note(date, &issues);
    notes::write(path, &content)?;

    info!("Started daily note {:?} with {} issue(s)", path, issues.len());
    Ok(issues.len())
}
