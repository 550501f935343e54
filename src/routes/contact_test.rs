use super::*;
use crate::routes::api_routes;
use crate::routes::test_support::post_json;
use crate::state::test_helpers::*;

fn app() -> axum::Router {
    api_routes(test_app_state(MockCompletions::replying("unused")))
}

#[tokio::test]
async fn contact_valid_form_is_200() {
    let body = r#"{"name":"Jo","email":"jo@example.com","subject":"Hello","message":"Let's talk pipelines."}"#;
    let (status, json) = post_json(app(), "/api/contact", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "message": CONTACT_OK }));
}

#[tokio::test]
async fn contact_invalid_fields_are_400_without_detail() {
    let body = r#"{"name":"Jo","email":"bad","subject":"Hi","message":"short"}"#;
    let (status, json) = post_json(app(), "/api/contact", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": INVALID_CONTACT }));
}

#[tokio::test]
async fn contact_missing_field_is_400() {
    let body = r#"{"name":"Jo","email":"jo@example.com","message":"0123456789"}"#;
    let (status, json) = post_json(app(), "/api/contact", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], INVALID_CONTACT);
}

#[tokio::test]
async fn contact_wrong_types_are_400() {
    let body = r#"{"name":12,"email":"jo@example.com","subject":"Hello","message":"0123456789"}"#;
    let (status, _) = post_json(app(), "/api/contact", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
