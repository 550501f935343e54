//! LLM: completion-service adapter for the portfolio chat assistant.
//!
//! DESIGN
//! ======
//! One provider shape: an OpenAI-compatible `/chat/completions` endpoint
//! (Groq by default). The chat service depends only on the
//! [`CompletionService`] trait so handlers can be tested with a mock, and
//! the API key travels with each call instead of living in the client.

pub mod config;
pub mod openai;
pub mod types;

pub use config::LlmConfig;
pub use openai::OpenAiClient;
pub use types::{Completion, CompletionService, LlmError, Message, Role};
