use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::CommitAnnotation;

/// Date format used for note file names and the --day flag
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Daily notes CLI - seed a daily note from Jira, log commits, summarize the day
#[derive(Parser)]
#[command(name = "daily-notes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Include readme links for each Jira issue's components
    #[arg(long, global = true)]
    pub readme: bool,

    /// Day to operate on, in YYYY-MM-DD format (defaults to today)
    #[arg(long, global = true, value_parser = parse_day)]
    pub day: Option<NaiveDate>,

    /// Config file (defaults to ~/.config/daily-notes/config.yaml)
    #[arg(long, global = true, env = "DAILY_NOTES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the day's note from in-progress Jira issues (default)
    Start,
    /// Append a commit message to the day's note, creating the note if needed
    Commit(CommitArgs),
    /// Summarize the day's note with a local Ollama model
    #[command(alias = "sum")]
    Summarize,
}

#[derive(Args)]
pub struct CommitArgs {
    /// Repository the commit was made in
    pub repo: Option<String>,

    /// Commit message
    pub message: Option<String>,

    /// Repository, as a flag instead of a positional argument
    #[arg(long = "repo", value_name = "REPO", conflicts_with = "repo")]
    pub repo_flag: Option<String>,

    /// Commit message, as a flag instead of a positional argument
    #[arg(long = "msg", value_name = "MESSAGE", conflicts_with = "message")]
    pub msg_flag: Option<String>,
}

impl CommitArgs {
    /// Resolve positional and flag forms into a commit. Both parts must be
    /// present and non-empty.
    pub fn into_annotation(self) -> Result<CommitAnnotation> {
        let repo = self.repo.or(self.repo_flag).filter(|r| !r.is_empty());
        let message = self.message.or(self.msg_flag).filter(|m| !m.is_empty());

        match (repo, message) {
            (Some(repo), Some(message)) => Ok(CommitAnnotation::new(repo, message)),
            _ => anyhow::bail!("commit requires a repository and a commit message"),
        }
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", raw, e))
}
