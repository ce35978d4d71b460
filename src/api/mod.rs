//! HTTP clients for the two external services: Jira (issue search) and a
//! local Ollama server (note summaries).

mod client;
mod jira;
mod ollama;
mod types;

pub use jira::JiraClient;
pub use ollama::OllamaClient;
