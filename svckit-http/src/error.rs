//! REST error type
//!
//! Status-coded error values that serialize straight into JSON error
//! bodies. Handlers can return them with `?` because [`RestErr`]
//! implements actix's `ResponseError`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INTERNAL_SERVER_ERR_MSG: &str =
    "Unable to process the request due to an internal error. Please contact the system administrator";

/// Error payload returned to REST clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestErr {
    pub message: String,
    #[serde(rename = "status")]
    pub status_code: u16,
    pub error: String,
}

impl RestErr {
    fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CONFLICT, message)
    }

    /// Internal errors keep the detail in `error` and show clients a
    /// generic message instead
    pub fn internal_server_error(detail: impl Into<String>) -> Self {
        Self {
            message: INTERNAL_SERVER_ERR_MSG.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            error: detail.into(),
        }
    }
}

impl fmt::Display for RestErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status_code, self.error, self.message)
    }
}

impl std::error::Error for RestErr {}

impl ResponseError for RestErr {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}
