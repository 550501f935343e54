//! Chat route: `POST /api/chat`.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::error_response;
use crate::error::ErrorCode;
use crate::llm::LlmError;
use crate::services::chat::{self as chat_svc, ChatError};
use crate::state::AppState;

pub const INVALID_BODY: &str = "Invalid request body";
pub const KEY_CONFIG_ERROR: &str = "API key configuration error";
pub const UPSTREAM_FAILURE: &str = "Failed to get response from AI service";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// `POST /api/chat`: forward one message to the completion service.
pub async fn chat(State(state): State<AppState>, payload: Result<Json<ChatRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "chat request rejected");
            return error_response(StatusCode::BAD_REQUEST, INVALID_BODY);
        }
    };

    match chat_svc::reply(&state, &request.message).await {
        Ok(reply) => Json(ChatReply { reply }).into_response(),
        Err(e) => chat_error_response(&e),
    }
}

fn chat_error_response(err: &ChatError) -> Response {
    match err {
        ChatError::EmptyMessage => {
            tracing::debug!(error = %err, code = err.error_code(), "chat message invalid");
            error_response(StatusCode::BAD_REQUEST, INVALID_BODY)
        }
        ChatError::MissingApiKey => {
            tracing::error!(code = err.error_code(), "completion API key is not set");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, KEY_CONFIG_ERROR)
        }
        ChatError::Upstream(LlmError::ApiResponse { status, body }) => {
            tracing::error!(code = err.error_code(), status, upstream_body = %body, "completion service returned error");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE)
        }
        ChatError::Upstream(e) => {
            tracing::error!(error = %e, code = e.error_code(), retryable = e.retryable(), "completion call failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE)
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
