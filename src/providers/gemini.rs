//! Native Gemini provider over the `generateContent` REST endpoint.
//!
//! Thinking models return parts tagged `thought: true`; those are dropped and
//! only the final answer text is returned.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, TutorlyError};

use super::LLMProvider;

/// Gemini v1beta REST API base.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Appended to every query so reasoning scaffolding stays out of the answer.
const QUERY_SUFFIX: &str = "Do not show the thinking steps in the response.";

/// Header carrying the API key. Kept out of the URL so transport errors
/// never echo the credential.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider authenticated with an API key.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiProvider {
    /// Build a provider with a per-request timeout.
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TutorlyError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            client,
        })
    }

    /// Point the provider at a different API base (proxies, test servers).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build the `generateContent` request body for one user turn.
    pub fn build_request_body(&self, system: &str, prompt: &str) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": format!("query: {prompt}\n{QUERY_SUFFIX}") }]
            }]
        });
        if !system.is_empty() {
            body["systemInstruction"] = json!({ "parts": [{ "text": system }] });
        }
        body
    }

    /// Extract final answer text from a Gemini API response.
    ///
    /// Non-thought parts are joined. If only thought parts exist, their text
    /// is returned instead so the caller still gets something.
    pub fn extract_text(response: &Value) -> Option<String> {
        let parts = response["candidates"][0]["content"]["parts"].as_array()?;

        let final_parts: Vec<&str> = parts
            .iter()
            .filter(|p| !p["thought"].as_bool().unwrap_or(false))
            .filter_map(|p| p["text"].as_str())
            .collect();

        if !final_parts.is_empty() {
            return Some(final_parts.join(""));
        }

        let thought_parts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();

        if !thought_parts.is_empty() {
            Some(thought_parts.join(""))
        } else {
            None
        }
    }

    /// Build the HTTP request. The key travels in a header, not the URL.
    fn build_request(&self, system: &str, prompt: &str) -> Result<reqwest::Request> {
        self.client
            .post(self.api_url())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&self.build_request_body(system, prompt))
            .build()
            .map_err(|e| {
                TutorlyError::Provider(format!(
                    "Failed to build Gemini request: {}",
                    e.without_url()
                ))
            })
    }

    fn api_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let request = self.build_request(system, prompt)?;

        debug!(model = %self.model, "Gemini generateContent request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| {
                TutorlyError::Provider(format!("Gemini request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if status.is_success() {
            let json: Value = response.json().await.map_err(|e| {
                TutorlyError::Provider(format!(
                    "Failed to parse Gemini response: {}",
                    e.without_url()
                ))
            })?;
            return Self::extract_text(&json)
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| TutorlyError::Provider("Gemini returned no text".into()));
        }

        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&error_text)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(String::from))
            .unwrap_or(error_text);

        Err(TutorlyError::Provider(format!(
            "Gemini API error ({}): {}",
            status.as_u16(),
            message
        )))
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
