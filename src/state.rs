//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the singleton completion client and the configuration the chat
//! endpoint needs. The API key is resolved once at startup and injected
//! here, so handlers never read process environment.

use std::sync::Arc;

use crate::llm::CompletionService;
use crate::services::profile::{PROFILE, build_system_prompt};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub completions: Arc<dyn CompletionService>,
    /// Completion API key. `None` makes every chat request fail with 500.
    pub api_key: Option<Arc<str>>,
    pub owner: Arc<str>,
    /// Rendered once from the owner name and the static profile.
    pub system_prompt: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(completions: Arc<dyn CompletionService>, api_key: Option<String>, owner: &str) -> Self {
        Self {
            completions,
            api_key: api_key.map(Arc::from),
            owner: Arc::from(owner),
            system_prompt: Arc::from(build_system_prompt(owner, &PROFILE)),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
