//! Axum-specific error types and mappings.
//!
//! Every failure leaves the server as `{success: false, message, errors?}`.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use spotrate_core::images::MediaRejection;
use spotrate_core::{CoreError, MAX_IMAGE_BYTES, RepositoryError};
use thiserror::Error;
use tracing::{debug, error};

const VALIDATION_MESSAGE: &str = "Validation error";
const NOT_FOUND_MESSAGE: &str = "Location not found";
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Field-level violations, reported one message per entry.
    #[error("{message}: {}", .errors.join("; "))]
    Validation { message: String, errors: Vec<String> },

    /// Bad request (unreadable input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error. The message is shown to clients as is.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl HttpError {
    /// Map a core error, answering faults with `context` instead of detail.
    ///
    /// Faults are logged here with their full cause.
    pub fn from_core(err: CoreError, context: &str) -> Self {
        if err.is_fault() {
            error!(target: "spotrate.http", error = %err, "{context}");
            return Self::Internal(context.to_string());
        }

        match err {
            CoreError::Validation(violations) => {
                debug!(target: "spotrate.http", %violations, "Validation failed");
                Self::Validation {
                    message: VALIDATION_MESSAGE.to_string(),
                    errors: violations.messages(),
                }
            }
            CoreError::MediaRejected(rejection) => rejection.into(),
            CoreError::Repository(RepositoryError::NotFound(_)) => {
                Self::NotFound(NOT_FOUND_MESSAGE.to_string())
            }
            other => {
                error!(target: "spotrate.http", error = %other, "{context}");
                Self::Internal(context.to_string())
            }
        }
    }

    /// Map a multipart read failure. An exceeded body limit is reported
    /// like any oversized image.
    pub fn from_multipart(err: &MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return MediaRejection::TooLarge {
                limit: MAX_IMAGE_BYTES,
            }
            .into();
        }
        debug!(target: "spotrate.http", error = %err.body_text(), "Malformed multipart body");
        Self::BadRequest(format!("Malformed multipart body: {}", err.body_text()))
    }

    /// The 404 every unknown location id produces.
    pub fn location_not_found() -> Self {
        Self::NotFound(NOT_FOUND_MESSAGE.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Self::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, message, Some(errors))
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), Some(vec![msg])),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        Self::from_core(err, INTERNAL_MESSAGE)
    }
}

impl From<MediaRejection> for HttpError {
    fn from(rejection: MediaRejection) -> Self {
        debug!(target: "spotrate.http", %rejection, "Upload rejected");
        Self::Validation {
            message: VALIDATION_MESSAGE.to_string(),
            errors: vec![rejection.to_string()],
        }
    }
}
