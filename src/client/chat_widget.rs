//! Chat widget state: the transcript and the one-request-in-flight guard.
//!
//! DESIGN
//! ======
//! A submission is split into `begin` (validate, append the user turn, set
//! `loading`) and `finish` (append the bot turn or the apology, clear
//! `loading`) so a UI can render between the two. Only the latest message
//! is sent; the transcript is display state and never leaves the widget.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::format::{escape_text, format_reply};
use super::transport::{ChatTransport, TransportError};
use crate::error::ErrorCode;
use crate::services::profile::first_name;

pub const APOLOGY: &str = "Sorry, I couldn't process your request. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Speaker,
    pub content: String,
    /// Milliseconds since Unix epoch.
    pub timestamp: f64,
}

impl ChatMessage {
    fn new(role: Speaker, content: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), role, content: content.into(), timestamp: now_ms() }
    }

    /// Display HTML: bot replies get links and line breaks, user text is escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self.role {
            Speaker::Bot => format_reply(&self.content),
            Speaker::User => escape_text(&self.content),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_millis() as f64)
}

#[must_use]
pub fn greeting(owner: &str) -> String {
    format!("Hi there! I'm your AI Assistant. Ask me anything about {}'s portfolio!", first_name(owner))
}

/// What a submission did to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a request already in flight; nothing changed.
    Ignored,
    /// User turn and bot reply appended.
    Replied,
    /// User turn and the fixed apology appended.
    Failed,
}

#[derive(Debug, Clone)]
pub struct ChatWidget {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatWidget {
    #[must_use]
    pub fn new(owner: &str) -> Self {
        Self { messages: vec![ChatMessage::new(Speaker::Bot, greeting(owner))], loading: false }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a request is in flight; the input should be disabled and a
    /// typing indicator shown.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a submission. Returns the trimmed message to send, or `None`
    /// when the input is blank or a request is already in flight.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        if self.loading {
            return None;
        }
        let message = input.trim();
        if message.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Speaker::User, message));
        self.loading = true;
        Some(message.to_owned())
    }

    /// Complete the in-flight submission with the transport result.
    pub fn finish(&mut self, result: Result<String, TransportError>) -> SubmitOutcome {
        self.loading = false;
        match result {
            Ok(reply) => {
                self.messages.push(ChatMessage::new(Speaker::Bot, reply));
                SubmitOutcome::Replied
            }
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), "chat request failed");
                self.messages.push(ChatMessage::new(Speaker::Bot, APOLOGY));
                SubmitOutcome::Failed
            }
        }
    }

    /// `begin`, one transport call, `finish`.
    pub async fn submit<T>(&mut self, input: &str, transport: &T) -> SubmitOutcome
    where
        T: ChatTransport + ?Sized,
    {
        let Some(message) = self.begin(input) else {
            return SubmitOutcome::Ignored;
        };
        let result = transport.send_chat(&message).await;
        self.finish(result)
    }
}

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod tests;
