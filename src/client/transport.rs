//! HTTP transport for the chat widget and contact form.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `TransportError` and decide what to show; the widget
//! replaces every failure with fixed copy, so error text never reaches the
//! transcript.

use crate::error::ErrorCode;
use crate::routes::chat::{ChatReply, ChatRequest};
use crate::services::contact::ContactSubmission;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server returned status {status}")]
    Status { status: u16 },
    #[error("response parse failed: {0}")]
    Parse(String),
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_TRANSPORT_REQUEST",
            Self::Status { .. } => "E_TRANSPORT_STATUS",
            Self::Parse(_) => "E_TRANSPORT_PARSE",
            Self::ClientBuild(_) => "E_TRANSPORT_CLIENT_BUILD",
        }
    }
}

/// Sends one chat message and returns the reply text.
#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_chat(&self, message: &str) -> Result<String, TransportError>;
}

/// Sends one contact form submission.
#[async_trait::async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send_contact(&self, submission: &ContactSubmission) -> Result<(), TransportError>;
}

/// `reqwest`-backed transport against a running portfolio server.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the TLS backend cannot initialise.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    async fn post_json(&self, path: &str, body: &impl serde::Serialize) -> Result<reqwest::Response, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        if !response.status().is_success() {
            return Err(TransportError::Status { status: response.status().as_u16() });
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl ChatTransport for HttpTransport {
    async fn send_chat(&self, message: &str) -> Result<String, TransportError> {
        let body = ChatRequest { message: message.to_owned() };
        let response = self.post_json("/api/chat", &body).await?;
        let reply = response
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Parse(e.to_string()))?;
        Ok(reply.reply)
    }
}

#[async_trait::async_trait]
impl ContactTransport for HttpTransport {
    async fn send_contact(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        self.post_json("/api/contact", submission).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;
