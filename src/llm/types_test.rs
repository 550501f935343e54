use super::*;
use crate::error::ErrorCode;

// =============================================================================
// LlmError::error_code
// =============================================================================

#[test]
fn error_codes_are_distinct_per_variant() {
    let errors = [
        LlmError::ConfigParse("bad".into()),
        LlmError::ApiRequest("timeout".into()),
        LlmError::ApiResponse { status: 500, body: "oops".into() },
        LlmError::ApiParse("json".into()),
        LlmError::HttpClientBuild("tls".into()),
    ];
    let codes: Vec<_> = errors.iter().map(ErrorCode::error_code).collect();
    assert_eq!(
        codes,
        ["E_CONFIG_PARSE", "E_API_REQUEST", "E_API_RESPONSE", "E_API_PARSE", "E_HTTP_CLIENT_BUILD"]
    );
}

#[test]
fn api_response_display_omits_body() {
    let err = LlmError::ApiResponse { status: 401, body: "invalid api key sk-123".into() };
    assert_eq!(err.to_string(), "API response error: status 401");
}

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn retryable_api_request() {
    assert!(LlmError::ApiRequest("conn refused".into()).retryable());
}

#[test]
fn retryable_rate_limit_and_server_errors() {
    assert!(LlmError::ApiResponse { status: 429, body: String::new() }.retryable());
    assert!(LlmError::ApiResponse { status: 503, body: String::new() }.retryable());
}

#[test]
fn not_retryable_client_errors() {
    assert!(!LlmError::ApiResponse { status: 400, body: String::new() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
    assert!(!LlmError::ConfigParse("bad".into()).retryable());
}

// =============================================================================
// Message serialization
// =============================================================================

#[test]
fn message_serializes_lowercase_role() {
    let json = serde_json::to_value(Message::system("be brief")).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "system", "content": "be brief" }));

    let json = serde_json::to_value(Message::user("hi")).unwrap();
    assert_eq!(json["role"], "user");
}

#[test]
fn role_deserializes_assistant() {
    let msg: Message = serde_json::from_str(r#"{"role":"assistant","content":"ok"}"#).unwrap();
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "ok");
}
