//! API error type.
//!
//! Maps engine errors to HTTP status codes and a JSON body of the form
//! `{"error": {"code": "...", "message": "..."}}`. Internal details are
//! logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use keyward_auth::AuthError;
use keyward_license::LicenseError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. "BAD_REQUEST").
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input (400).
    #[error("{0}")]
    BadRequest(String),

    /// Missing, invalid or expired credentials (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Login already registered (409).
    #[error("{0}")]
    Conflict(String),

    /// Key unknown or owned by someone else (403).
    #[error("license not found or access denied")]
    NotFoundOrForbidden,

    /// Anything the caller cannot fix (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::NotFoundOrForbidden => (StatusCode::FORBIDDEN, "NOT_FOUND_OR_FORBIDDEN"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(msg) => Self::BadRequest(msg),
            e @ AuthError::LoginTaken => Self::Conflict(e.to_string()),
            AuthError::AccountNotFound => {
                Self::Unauthorized(AuthError::InvalidCredentials.to_string())
            }
            e if e.is_unauthorized() => Self::Unauthorized(e.to_string()),
            e => Self::Internal(e.to_string()),
        }
    }
}

impl From<LicenseError> for ApiError {
    fn from(err: LicenseError) -> Self {
        match err {
            LicenseError::Validation(msg) => Self::BadRequest(msg),
            LicenseError::NotFound | LicenseError::Forbidden | LicenseError::NotFoundOrForbidden => {
                Self::NotFoundOrForbidden
            }
            e => Self::Internal(e.to_string()),
        }
    }
}
