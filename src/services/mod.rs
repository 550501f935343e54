//! Domain services used by the HTTP routes and the CLI client.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and the outbound completion call so
//! route handlers can stay focused on status codes and response bodies.

pub mod chat;
pub mod contact;
pub mod profile;
pub mod resume;
