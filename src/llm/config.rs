//! Completion-service configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// `None` when the key variable is unset or blank. The server still
    /// starts; the chat endpoint answers 500 until a key is configured.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl LlmConfig {
    /// Build typed completion config from environment variables.
    ///
    /// Optional:
    /// - `GROQ_API_KEY`: bearer token for the completion service
    /// - `LLM_BASE_URL`: OpenAI-compatible base URL (default Groq)
    /// - `LLM_MODEL`: default `llama3-8b-8192`
    /// - `LLM_TEMPERATURE`: default 0.7
    /// - `LLM_MAX_TOKENS`: default 1024
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigParse`] if `LLM_BASE_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let base_url = parse_base_url(std::env::var("LLM_BASE_URL").ok().as_deref())?;
        let model = std::env::var("LLM_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
            temperature: crate::config::env_parse("LLM_TEMPERATURE", DEFAULT_TEMPERATURE),
            max_tokens: crate::config::env_parse("LLM_MAX_TOKENS", DEFAULT_MAX_TOKENS),
        })
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

pub(crate) fn parse_base_url(raw: Option<&str>) -> Result<String, LlmError> {
    let url = raw.unwrap_or(DEFAULT_BASE_URL).trim().trim_end_matches('/');
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(LlmError::ConfigParse(format!("LLM_BASE_URL must be an http(s) URL, got '{url}'")));
    }
    Ok(url.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
