use anyhow::Result;
use regex::Regex;
use tracing::{info, warn};

use super::start::{create_note, created_message};
use crate::api::JiraClient;
use crate::config::Settings;
use crate::domain::CommitAnnotation;
use crate::notes;

/// Result of `commit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Appended,
    /// The message matched an exclusion pattern; the note was left alone
    Excluded,
}

/// Append a commit bullet to the day's note.
///
/// The note is created first (with a Jira fetch) only if it does not exist
/// yet. A message matching any exclusion pattern is skipped and only logged.
pub async fn run_commit(
    settings: &Settings,
    jira: &JiraClient,
    date: &str,
    commit: &CommitAnnotation,
) -> Result<CommitOutcome> {
    let path = notes::daily_note_path(settings, date)?;

    if !notes::exists(&path) {
        let issues = create_note(jira, &path, date).await?;
        println!("{}", created_message(date, issues));
    }

    if matches_any_pattern(&commit.message, &settings.exclude_commits) {
        info!("Commit message excluded from {}.md: {}", date, commit.message);
        return Ok(CommitOutcome::Excluded);
    }

    notes::append(&path, &notes::render_commit_bullet(commit))?;
    println!("Added commit to {}.md: ({}) {}", date, commit.repo, commit.message);
    Ok(CommitOutcome::Appended)
}

/// True if `message` matches any of `patterns`. Patterns that fail to compile
/// are logged and treated as never matching.
fn matches_any_pattern(message: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| match Regex::new(pattern) {
        Ok(re) => re.is_match(message),
        Err(e) => {
            warn!("Skipping invalid exclude_commits pattern {:?}: {}", pattern, e);
            false
        }
    })
}
