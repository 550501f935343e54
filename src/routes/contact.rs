//! Contact route: `POST /api/contact`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::error_response;
use crate::error::ErrorCode;
use crate::services::contact::{self as contact_svc, ContactSubmission};

pub const INVALID_CONTACT: &str = "Invalid contact form data";
pub const CONTACT_OK: &str = "Contact form submitted successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub message: String,
}

/// `POST /api/contact`: validate and log; no delivery.
pub async fn contact(payload: Result<Json<ContactSubmission>, JsonRejection>) -> Response {
    let Json(submission) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "contact request rejected");
            return error_response(StatusCode::BAD_REQUEST, INVALID_CONTACT);
        }
    };

    match contact_svc::submit(&submission) {
        Ok(()) => (StatusCode::OK, Json(ContactAck { message: CONTACT_OK.to_owned() })).into_response(),
        Err(errors) => {
            let codes: Vec<&str> = errors.iter().map(ErrorCode::error_code).collect();
            tracing::debug!(?codes, "contact form invalid");
            error_response(StatusCode::BAD_REQUEST, INVALID_CONTACT)
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
