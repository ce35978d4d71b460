use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use std::time::Duration;
use tracing::error;
use url::Url;

/// Default CLI version (from Cargo.toml)
const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the User-Agent string sent with every request
pub(super) fn build_user_agent() -> String {
    format!("daily-notes/{}", DEFAULT_VERSION)
}

/// Build an HTTP client. `None` keeps the transport's default (no timeout).
pub(super) fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(build_user_agent());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to build HTTP client")
}

/// Join `endpoint` onto `base_url`, keeping any path prefix on the base.
pub(super) fn build_url(base_url: &str, endpoint: &str) -> Result<Url> {
    let base = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&base).with_context(|| format!("Invalid base URL: {}", base_url))?;
    base.join(endpoint.trim_start_matches('/'))
        .with_context(|| format!("Failed to build URL for endpoint: {}", endpoint))
}

/// `Basic base64(email:token)`
pub(super) fn basic_auth_header(email: &str, token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", email, token)))
}

/// Turn a non-2xx response into an error carrying the status and body.
pub(super) async fn ensure_success(
    response: reqwest::Response,
    what: &str,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    error!("{} failed with status {}: {}", what, status, error_text);
    anyhow::bail!("{} failed with status {}: {}", what, status, error_text);
}
