use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use serde_json::error::Category;
use thiserror::Error;

use crate::core::MatchError;
use crate::models::ErrorResponse;

/// Errors surfaced to HTTP clients
///
/// Each variant maps to one status code and a machine-readable `error` tag.
/// Internal failures are logged in full and reported with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Match(#[from] MatchError),
}

impl ApiError {
    fn tag(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::PayloadTooLarge(_) => "payload_too_large",
            ApiError::Match(MatchError::UnknownSign { .. }) => "unknown_sign",
            ApiError::Match(MatchError::Failed(_)) => "internal_error",
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::Match(MatchError::Failed(_)) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Match(MatchError::UnknownSign { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Match(MatchError::Failed(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.tag().to_string(),
            message: self.public_message(),
            status_code: status.as_u16(),
        })
    }
}

impl From<error::JsonPayloadError> for ApiError {
    fn from(err: error::JsonPayloadError) -> Self {
        match err {
            error::JsonPayloadError::Deserialize(e) => match e.classify() {
                // Well-formed JSON with the wrong shape: missing, null or non-string fields
                Category::Data => ApiError::InvalidRequest(e.to_string()),
                Category::Syntax | Category::Eof | Category::Io => {
                    ApiError::InvalidJson(e.to_string())
                }
            },
            e @ (error::JsonPayloadError::Overflow { .. }
            | error::JsonPayloadError::OverflowKnownLength { .. }) => {
                ApiError::PayloadTooLarge(e.to_string())
            }
            other => ApiError::InvalidJson(other.to_string()),
        }
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::from(err).into()
}
