use super::*;
use std::sync::Mutex;

struct MockTransport {
    fail: bool,
    sent: Mutex<Vec<ContactSubmission>>,
}

impl MockTransport {
    fn new(fail: bool) -> Self {
        Self { fail, sent: Mutex::new(Vec::new()) }
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ContactTransport for MockTransport {
    async fn send_contact(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(submission.clone());
        if self.fail { Err(TransportError::Request("connection reset".into())) } else { Ok(()) }
    }
}

fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.values = ContactSubmission {
        name: "Jo".into(),
        email: "jo@example.com".into(),
        subject: "Hello there".into(),
        message: "Would love to chat about data platforms.".into(),
    };
    form
}

#[tokio::test]
async fn invalid_form_fails_before_any_request() {
    let transport = MockTransport::new(false);
    let mut form = ContactForm::new();
    form.values = ContactSubmission {
        name: "Jo".into(),
        email: "bad".into(),
        subject: "Hi".into(),
        message: "short".into(),
    };

    let outcome = form.submit(&transport).await;
    assert_eq!(
        outcome,
        ContactOutcome::Invalid(vec![FieldError::InvalidEmail, FieldError::SubjectTooShort, FieldError::MessageTooShort])
    );
    assert_eq!(transport.sent_count(), 0);
    assert!(form.error_for(ContactField::Name).is_none());
    assert_eq!(form.error_for(ContactField::Email), Some(&FieldError::InvalidEmail));
    assert!(!form.is_submitting());
    assert!(form.notice().is_none());
}

#[tokio::test]
async fn successful_send_resets_and_notifies() {
    let transport = MockTransport::new(false);
    let mut form = filled();

    assert_eq!(form.submit(&transport).await, ContactOutcome::Sent);
    assert_eq!(transport.sent_count(), 1);
    assert_eq!(form.values, ContactSubmission::default());
    assert_eq!(form.notice(), Some(Notice::Sent));
    assert_eq!(Notice::Sent.title(), "Message sent!");
}

#[tokio::test]
async fn failed_send_keeps_values_and_shows_generic_notice() {
    let transport = MockTransport::new(true);
    let mut form = filled();
    let before = form.values.clone();

    assert_eq!(form.submit(&transport).await, ContactOutcome::Failed);
    assert_eq!(form.values, before);
    assert_eq!(form.notice(), Some(Notice::Failed));
    assert_eq!(Notice::Failed.description(), "Please try again later.");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn resubmitting_after_fix_clears_errors() {
    let transport = MockTransport::new(false);
    let mut form = filled();
    form.values.email = "nope".into();

    assert!(matches!(form.submit(&transport).await, ContactOutcome::Invalid(_)));
    assert_eq!(form.errors().len(), 1);

    form.values.email = "jo@example.com".into();
    assert_eq!(form.submit(&transport).await, ContactOutcome::Sent);
    assert!(form.errors().is_empty());
}

#[test]
fn begin_while_submitting_is_busy() {
    let mut form = filled();
    assert!(form.begin().is_ok());
    assert!(form.is_submitting());
    assert_eq!(form.begin(), Err(ContactOutcome::Busy));
}

#[tokio::test]
async fn email_ending_in_apostrophe_is_rejected_client_side() {
    let transport = MockTransport::new(false);
    let mut form = filled();
    form.values.email = "a'@b.co".into();

    assert_eq!(form.submit(&transport).await, ContactOutcome::Invalid(vec![FieldError::InvalidEmail]));
    assert_eq!(transport.sent_count(), 0);
}
