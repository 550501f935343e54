//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three JSON endpoints under `/api` plus a health check. Every other path
//! falls through to the prebuilt portfolio site, served as static files.
//! Error bodies are always `{"error": "..."}` with fixed text; upstream
//! detail is logged, never returned.

pub mod chat;
pub mod contact;
pub mod resume;

use std::any::Any;
use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const INTERNAL_ERROR: &str = "Internal server error";

/// `{"error": "..."}` body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message.to_owned() })).into_response()
}

/// JSON API routes, without the static site.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(CorsAny)
        .allow_methods(CorsAny)
        .allow_headers(CorsAny);

    Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/contact", post(contact::contact))
        .route("/api/resume/download", get(resume::download))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes + portfolio site at `/`.
pub fn app(state: AppState, website_dir: &Path) -> Router {
    let website_service = ServeDir::new(website_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(website_service)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
