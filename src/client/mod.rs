//! Client side of the portfolio: chat widget and contact form state.
//!
//! Plain state types driven through transport traits, so the same logic
//! runs behind the terminal client in `main` and in tests with mocks.

pub mod chat_widget;
pub mod contact_form;
pub mod format;
pub mod transport;

pub use chat_widget::{ChatWidget, SubmitOutcome};
pub use contact_form::{ContactForm, ContactOutcome};
pub use transport::HttpTransport;
