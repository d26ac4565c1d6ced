use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

/// Failure from the external generative API: network, auth, quota, or an
/// undecodable response body.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UpstreamError(pub String);

/// Sampling parameters sent with every invocation. Not user-configurable;
/// they keep responses concise and on-tone regardless of caller input.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: i32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 500,
        }
    }
}

/// Narrow seam over the generative model so the relay is testable without
/// network access.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        message: &str,
        system_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, UpstreamError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(
        &self,
        message: &str,
        system_prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, UpstreamError> {
        let request_body = serde_json::json!({
            "systemInstruction": {"parts": [{"text": system_prompt}]},
            "contents": [{"role": "user", "parts": [{"text": message}]}],
            "generationConfig": {
                "temperature": params.temperature,
                "topP": params.top_p,
                "topK": params.top_k,
                "maxOutputTokens": params.max_output_tokens
            }
        });

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| UpstreamError(format!("Gemini request error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Gemini API error");
            return Err(UpstreamError(format!("Gemini API returned {status}")));
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            UpstreamError(format!("Failed to parse Gemini response: {e}"))
        })?;

        // Missing candidates or parts count as an empty reply, not a
        // failure; the HTTP layer substitutes the fallback text.
        Ok(gemini_resp
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.parts.as_ref())
            .and_then(|parts| parts.iter().find_map(|p| p.text.clone()))
            .unwrap_or_default())
    }
}

// Minimal types for the native Gemini generateContent response
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
