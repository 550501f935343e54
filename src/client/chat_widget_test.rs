use super::*;
use std::sync::Mutex;

// =============================================================
// Mock transport
// =============================================================

struct MockTransport {
    reply: Option<String>,
    sent: Mutex<Vec<String>>,
}

impl MockTransport {
    fn ok(reply: &str) -> Self {
        Self { reply: Some(reply.to_owned()), sent: Mutex::new(Vec::new()) }
    }

    fn failing() -> Self {
        Self { reply: None, sent: Mutex::new(Vec::new()) }
    }

    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatTransport for MockTransport {
    async fn send_chat(&self, message: &str) -> Result<String, TransportError> {
        self.sent.lock().unwrap().push(message.to_owned());
        self.reply
            .clone()
            .ok_or(TransportError::Status { status: 500 })
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_widget_has_single_greeting() {
    let widget = ChatWidget::new("John Doe");
    assert_eq!(widget.messages().len(), 1);
    assert_eq!(widget.messages()[0].role, Speaker::Bot);
    assert_eq!(
        widget.messages()[0].content,
        "Hi there! I'm your AI Assistant. Ask me anything about John's portfolio!"
    );
    assert!(!widget.is_loading());
}

// =============================================================
// submit
// =============================================================

#[tokio::test]
async fn empty_submission_changes_nothing_and_sends_nothing() {
    let transport = MockTransport::ok("unused");
    let mut widget = ChatWidget::new("John Doe");
    let before = widget.messages().to_vec();

    for input in ["", "   ", "\n\t"] {
        assert_eq!(widget.submit(input, &transport).await, SubmitOutcome::Ignored);
    }

    assert_eq!(widget.messages(), before.as_slice());
    assert!(transport.sent().is_empty());
    assert!(!widget.is_loading());
}

#[tokio::test]
async fn success_appends_user_then_bot() {
    let transport = MockTransport::ok("John has 5+ years of experience.");
    let mut widget = ChatWidget::new("John Doe");

    let outcome = widget.submit("  How experienced is John?  ", &transport).await;
    assert_eq!(outcome, SubmitOutcome::Replied);

    let msgs = widget.messages();
    assert_eq!(msgs.len(), 3);
    assert_eq!(msgs[1].role, Speaker::User);
    assert_eq!(msgs[1].content, "How experienced is John?");
    assert_eq!(msgs[2].role, Speaker::Bot);
    assert_eq!(msgs[2].content, "John has 5+ years of experience.");
    assert!(!widget.is_loading());
}

#[tokio::test]
async fn failure_appends_user_then_apology() {
    let transport = MockTransport::failing();
    let mut widget = ChatWidget::new("John Doe");

    let outcome = widget.submit("Hello?", &transport).await;
    assert_eq!(outcome, SubmitOutcome::Failed);

    let msgs = widget.messages();
    assert_eq!(msgs.len(), 3);
    assert_eq!(msgs[1].role, Speaker::User);
    assert_eq!(msgs[2].role, Speaker::Bot);
    assert_eq!(msgs[2].content, APOLOGY);
    assert!(!msgs[2].content.contains("500"));
    assert!(!widget.is_loading());
}

#[tokio::test]
async fn only_latest_message_is_sent() {
    let transport = MockTransport::ok("ok");
    let mut widget = ChatWidget::new("John Doe");

    widget.submit("first question", &transport).await;
    widget.submit("second question", &transport).await;

    assert_eq!(transport.sent(), ["first question", "second question"]);
    assert_eq!(widget.messages().len(), 5);
}

// =============================================================
// begin / finish
// =============================================================

#[test]
fn begin_sets_loading_and_blocks_second_submission() {
    let mut widget = ChatWidget::new("John Doe");

    assert_eq!(widget.begin("first").as_deref(), Some("first"));
    assert!(widget.is_loading());
    assert_eq!(widget.begin("second"), None);
    assert_eq!(widget.messages().len(), 2);

    widget.finish(Ok("reply".into()));
    assert!(!widget.is_loading());
    assert_eq!(widget.begin("second").as_deref(), Some("second"));
}

#[tokio::test]
async fn submit_while_loading_is_ignored_without_request() {
    let transport = MockTransport::ok("unused");
    let mut widget = ChatWidget::new("John Doe");
    widget.begin("pending");

    assert_eq!(widget.submit("another", &transport).await, SubmitOutcome::Ignored);
    assert!(transport.sent().is_empty());
    assert!(widget.is_loading());
}

#[test]
fn transcript_ids_are_unique() {
    let mut widget = ChatWidget::new("John Doe");
    widget.begin("a");
    widget.finish(Ok("b".into()));
    let ids: std::collections::HashSet<_> = widget.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 3);
}

// =============================================================
// rendering
// =============================================================

#[test]
fn bot_html_links_urls_user_html_is_escaped() {
    let mut widget = ChatWidget::new("John Doe");
    widget.begin("<b>hi</b> https://x.io");
    widget.finish(Ok("See https://github.com/johndoe\nThanks".into()));

    let msgs = widget.messages();
    assert_eq!(msgs[1].to_html(), "&lt;b&gt;hi&lt;/b&gt; https://x.io");
    assert!(msgs[2].to_html().contains("<a href=\"https://github.com/johndoe\""));
    assert!(msgs[2].to_html().ends_with("<br>Thanks"));
}

#[test]
fn speaker_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Speaker::Bot).unwrap(), "bot");
}
