//! Chat service: one visitor question in, one grounded answer out.
//!
//! DESIGN
//! ======
//! Stateless: every call builds a fresh two-turn conversation (system
//! prompt, then the visitor's message) and makes exactly one completion
//! call. Validation and the API-key check both happen before any network
//! traffic. Upstream detail stays inside `ChatError` for server-side
//! logging; the route layer decides what the caller sees.

use crate::error::ErrorCode;
use crate::llm::{LlmError, Message};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("completion API key is not configured")]
    MissingApiKey,
    #[error("completion service failed: {0}")]
    Upstream(#[from] LlmError),
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMessage => "E_EMPTY_MESSAGE",
            Self::MissingApiKey => "E_MISSING_API_KEY",
            Self::Upstream(_) => "E_UPSTREAM",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Upstream(e) => e.retryable(),
            _ => false,
        }
    }
}

/// Check a raw visitor message. Whitespace-only counts as empty; there is
/// no upper length bound.
///
/// # Errors
///
/// Returns [`ChatError::EmptyMessage`].
pub fn validate_message(message: &str) -> Result<(), ChatError> {
    if message.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    Ok(())
}

/// The exact conversation sent upstream: `[system, user]`.
#[must_use]
pub fn build_messages(system_prompt: &str, message: &str) -> Vec<Message> {
    vec![Message::system(system_prompt), Message::user(message)]
}

/// Answer one visitor message.
///
/// # Errors
///
/// Returns a validation error before anything else, then
/// [`ChatError::MissingApiKey`] without calling upstream, then any
/// [`ChatError::Upstream`] failure from the single completion call.
pub async fn reply(state: &AppState, message: &str) -> Result<String, ChatError> {
    validate_message(message)?;

    let Some(api_key) = state.api_key.as_deref() else {
        return Err(ChatError::MissingApiKey);
    };

    let messages = build_messages(&state.system_prompt, message);
    let completion = state.completions.complete(api_key, &messages).await?;

    tracing::debug!(
        model = %completion.model,
        finish_reason = %completion.finish_reason,
        prompt_tokens = completion.prompt_tokens,
        completion_tokens = completion.completion_tokens,
        "chat completion received"
    );
    Ok(completion.content)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
