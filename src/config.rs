//! Settings loaded from `~/.config/daily-notes/config.yaml`.
//!
//! The file is read once at startup into an immutable [`Settings`] value that
//! is passed by reference to every component.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable consulted when `jira.token` is absent from the file
pub const TOKEN_ENV: &str = "JIRA_API_TOKEN";

/// Model used for summaries when `ollama_model` is not configured
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen3-coder:30b";

/// Generation service address when `ollama_url` is not configured
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("jira.token is not set and JIRA_API_TOKEN is not set")]
    MissingToken,
}

/// On-disk shape of the config file. Every field is optional here so that
/// missing keys surface as [`ConfigError::MissingField`] instead of a parse
/// error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    vault_path: String,
    daily_notes_subdir: String,
    jira: RawJiraConfig,
    readme: bool,
    exclude_commits: Vec<String>,
    ollama_model: Option<String>,
    ollama_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawJiraConfig {
    base_url: String,
    email: String,
    token: String,
    project_filter: Vec<String>,
}

/// Issue tracker connection settings
#[derive(Debug, Clone)]
pub struct JiraSettings {
    /// Base URL without a trailing slash
    pub base_url: String,
    pub email: String,
    pub token: String,
    /// Project keys to restrict the search to; empty means no filter
    pub project_filter: Vec<String>,
}

/// Validated application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub vault_path: PathBuf,
    pub daily_notes_subdir: String,
    pub jira: JiraSettings,
    /// Include component names (readme links) for each issue
    pub readme_links: bool,
    /// Regular expressions; matching commit messages are not logged
    pub exclude_commits: Vec<String>,
    pub ollama_model: String,
    pub ollama_url: String,
}

/// Default config file location: `~/.config/daily-notes/config.yaml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(dirs::home_dir()
        .ok_or(ConfigError::NoHomeDir)?
        .join(".config")
        .join("daily-notes")
        .join("config.yaml"))
}

impl Settings {
    /// Read and validate the config file at `path`.
    ///
    /// The Jira token falls back to `JIRA_API_TOKEN` when the file omits it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content, std::env::var(TOKEN_ENV).ok())
    }

    /// Parse and validate settings from YAML text.
    pub fn from_yaml(content: &str, env_token: Option<String>) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(content)?;

        let vault_path = required(raw.vault_path, "vault_path")?;
        let daily_notes_subdir = required(raw.daily_notes_subdir, "daily_notes_subdir")?;
        let base_url = required(raw.jira.base_url, "jira.base_url")?;
        let email = required(raw.jira.email, "jira.email")?;

        let token = if raw.jira.token.trim().is_empty() {
            env_token
                .filter(|t| !t.trim().is_empty())
                .ok_or(ConfigError::MissingToken)?
        } else {
            raw.jira.token
        };

        Ok(Self {
            vault_path: PathBuf::from(vault_path),
            daily_notes_subdir,
            jira: JiraSettings {
                base_url: base_url.trim_end_matches('/').to_string(),
                email,
                token,
                project_filter: raw.jira.project_filter,
            },
            readme_links: raw.readme,
            exclude_commits: raw.exclude_commits,
            ollama_model: raw
                .ollama_model
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            ollama_url: raw
                .ollama_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string()),
        })
    }

    /// Enable readme links if requested on the command line. The flag can
    /// only turn the setting on, never off.
    pub fn with_readme_links(mut self, requested: bool) -> Self {
        self.readme_links = self.readme_links || requested;
        self
    }

    /// Directory holding the daily notes
    pub fn notes_dir(&self) -> PathBuf {
        self.vault_path.join(&self.daily_notes_subdir)
    }
}

fn required(value: String, field: &'static str) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::MissingField(field))
    } else {
        Ok(value)
    }
}
