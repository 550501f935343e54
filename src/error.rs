//! Grepable error codes shared by every error enum in the crate.
//!
//! Handlers log `code = e.error_code()` next to the display text so a
//! single `grep E_UPSTREAM` finds every upstream failure in the logs.

/// Grepable error code and retryable flag for structured log fields.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    /// Whether the same request could succeed later. Informational only:
    /// nothing in this crate retries.
    fn retryable(&self) -> bool {
        false
    }
}
