//! OpenAI-compatible chat-completions client.
//!
//! Talks to any `/chat/completions` endpoint that speaks the OpenAI wire
//! format. The default base URL points at Groq's compatible API.

use serde::Serialize;
use serde_json::Value;

use super::config::LlmConfig;
use super::types::{Completion, CompletionService, LlmError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    /// Build a client from typed config. The API key is not captured here;
    /// it is supplied per call.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the TLS backend cannot initialise.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        // Client defaults only: no timeout override.
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Return the configured model name (e.g. `"llama3-8b-8192"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_json(&self, path: &str, api_key: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if !status.is_success() {
            return Err(LlmError::ApiResponse { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, api_key: &str, messages: &[Message]) -> Result<Completion, LlmError> {
        let body = CcRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        let text = self.send_json("/chat/completions", api_key, &body).await?;
        parse_chat_completions_response(&text)
    }
}

// =============================================================================
// CHAT COMPLETIONS: wire types
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_chat_completions_response(json_text: &str) -> Result<Completion, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let prompt_tokens = root
        .get("usage")
        .and_then(|u| u.get("prompt_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let completion_tokens = root
        .get("usage")
        .and_then(|u| u.get("completion_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0]".to_string()));
    };
    let finish_reason = choice
        .get("finish_reason")
        .and_then(Value::as_str)
        .unwrap_or("stop")
        .to_string();
    let Some(content) = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
    else {
        return Err(LlmError::ApiParse("chat_completions: choices[0].message.content is not a string".to_string()));
    };

    Ok(Completion { content: content.to_string(), model, finish_reason, prompt_tokens, completion_tokens })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
