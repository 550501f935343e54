//! Resume route: `GET /api/resume/download`.

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::error_response;
use crate::services::profile::PROFILE;
use crate::services::resume::{self, RESUME_CONTENT_TYPE};
use crate::state::AppState;

pub const DOWNLOAD_FAILED: &str = "Failed to download resume";

/// `GET /api/resume/download`: placeholder text file as an attachment.
pub async fn download(State(state): State<AppState>) -> Response {
    let file = resume::placeholder(&state.owner, PROFILE.headline);
    let disposition = match HeaderValue::from_str(&file.content_disposition()) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(error = %e, filename = %file.filename, "resume header build failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, DOWNLOAD_FAILED);
        }
    };

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(RESUME_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.body,
    )
        .into_response()
}

#[cfg(test)]
#[path = "resume_test.rs"]
mod tests;
