//! Portfolio site backend: chat assistant proxy, contact form, resume
//! download, and the static site, plus the client-side chat widget and
//! contact form state used by the terminal client.

pub mod client;
pub mod config;
pub mod error;
pub mod llm;
pub mod routes;
pub mod services;
pub mod state;
