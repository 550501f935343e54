//! Contact form service: validate, log, discard.
//!
//! Submissions are not delivered or stored anywhere. The same field rules
//! run in the client form before any network call and again here.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 5;
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// One failed field rule. Display text is the user-facing form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least 5 characters")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl FieldError {
    #[must_use]
    pub fn field(self) -> ContactField {
        match self {
            Self::NameTooShort => ContactField::Name,
            Self::InvalidEmail => ContactField::Email,
            Self::SubjectTooShort => ContactField::Subject,
            Self::MessageTooShort => ContactField::Message,
        }
    }
}

impl ErrorCode for FieldError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NameTooShort => "E_CONTACT_NAME",
            Self::InvalidEmail => "E_CONTACT_EMAIL",
            Self::SubjectTooShort => "E_CONTACT_SUBJECT",
            Self::MessageTooShort => "E_CONTACT_MESSAGE",
        }
    }
}

impl ContactSubmission {
    /// Check every field independently and report all failures in field order.
    ///
    /// # Errors
    ///
    /// Returns every [`FieldError`] that applies; never an empty list.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.chars().count() < NAME_MIN_CHARS {
            errors.push(FieldError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.subject.chars().count() < SUBJECT_MIN_CHARS {
            errors.push(FieldError::SubjectTooShort);
        }
        if self.message.chars().count() < MESSAGE_MIN_CHARS {
            errors.push(FieldError::MessageTooShort);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Pragmatic address check: `local@label.label...` with an alphabetic TLD.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && local
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '\'' | '+' | '-'))
}

fn valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld = labels[labels.len() - 1];
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate and log a submission. Nothing is delivered or stored.
///
/// # Errors
///
/// Returns the field failures from [`ContactSubmission::validate`].
pub fn submit(submission: &ContactSubmission) -> Result<(), Vec<FieldError>> {
    submission.validate()?;
    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        subject = %submission.subject,
        message_chars = submission.message.chars().count(),
        "contact form submission"
    );
    Ok(())
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
