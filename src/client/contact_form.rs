//! Contact form state: client-side validation, submitting guard, notices.

use super::transport::{ContactTransport, TransportError};
use crate::error::ErrorCode;
use crate::services::contact::{ContactField, ContactSubmission, FieldError};

/// Toast shown after a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Sent => "Message sent!",
            Self::Failed => "Something went wrong!",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Sent => "Thank you for reaching out. I'll get back to you soon.",
            Self::Failed => "Please try again later.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Client-side validation failed; no request was made.
    Invalid(Vec<FieldError>),
    /// A send is already in flight.
    Busy,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub values: ContactSubmission,
    errors: Vec<FieldError>,
    submitting: bool,
    notice: Option<Notice>,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First validation message for `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Validate and, if clean, mark the form as submitting and hand back a
    /// snapshot to send.
    ///
    /// # Errors
    ///
    /// Returns [`ContactOutcome::Busy`] or [`ContactOutcome::Invalid`].
    pub fn begin(&mut self) -> Result<ContactSubmission, ContactOutcome> {
        if self.submitting {
            return Err(ContactOutcome::Busy);
        }
        if let Err(errors) = self.values.validate() {
            self.errors.clone_from(&errors);
            return Err(ContactOutcome::Invalid(errors));
        }
        self.errors.clear();
        self.submitting = true;
        Ok(self.values.clone())
    }

    /// Success resets the fields; failure keeps them for another try.
    pub fn finish(&mut self, result: Result<(), TransportError>) -> ContactOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.values = ContactSubmission::default();
                self.notice = Some(Notice::Sent);
                ContactOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), "contact submission failed");
                self.notice = Some(Notice::Failed);
                ContactOutcome::Failed
            }
        }
    }

    pub async fn submit<T>(&mut self, transport: &T) -> ContactOutcome
    where
        T: ContactTransport + ?Sized,
    {
        let submission = match self.begin() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };
        let result = transport.send_contact(&submission).await;
        self.finish(result)
    }
}

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod tests;
