//! Ollama text generation, used to summarize a daily note.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::client::{build_http_client, build_url, ensure_success};
use super::types::{GenerateRequest, GenerateResponse};
use crate::config::Settings;

/// Timeout for generate requests (600 seconds / 10 minutes). Responses are
/// not streamed, so the whole generation happens inside one request.
const GENERATE_TIMEOUT_SECS: u64 = 600;

const GENERATE_ENDPOINT: &str = "api/generate";

/// Client for a local Ollama server
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: build_http_client(Some(Duration::from_secs(GENERATE_TIMEOUT_SECS)))?,
            base_url: settings.ollama_url.clone(),
            model: settings.ollama_model.clone(),
        })
    }

    /// Send `prompt` to the model and return the raw response text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = build_url(&self.base_url, GENERATE_ENDPOINT)?;
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!("=== Generate Request ===");
        debug!("URL: {}", url);
        debug!("Model: {}", self.model);
        debug!("Prompt length: {}", prompt.len());

        let response = self
            .client
            .post(url.clone())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        debug!("=== Generate Response ===");
        debug!("Status: {}", response.status());

        let response = ensure_success(response, "Generation").await?;
        let generated: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        debug!(
            "Generated {} chars (done: {})",
            generated.response.len(),
            generated.done
        );
        Ok(generated.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(ollama_url: &str) -> Settings {
        let yaml = format!(
            "vault_path: /v\ndaily_notes_subdir: d\njira:\n  base_url: https://jira\n  email: a@b.c\n  token: t\nollama_model: test-model\nollama_url: {}\n",
            ollama_url
        );
        Settings::from_yaml(&yaml, None).unwrap()
    }

    #[tokio::test]
    async fn test_generate_posts_non_streaming_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(serde_json::json!({
                "model": "test-model",
                "prompt": "hello",
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": "<think>hmm</think>\n- Did things",
                "done": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OllamaClient::new(&settings_for(&server.uri())).unwrap();
        let text = client.generate("hello").await.unwrap();
        assert_eq!(text, "<think>hmm</think>\n- Did things");
    }

    #[tokio::test]
    async fn test_generate_fails_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
            .mount(&server)
            .await;

        let client = OllamaClient::new(&settings_for(&server.uri())).unwrap();
        let err = client.generate("hello").await.unwrap_err();
        assert!(err.to_string().contains("Generation failed"));
    }
}
