//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the service and repository layers returns
//! [`AppError`]. The JSON API turns it into `{"error": {...}}` bodies through
//! [`IntoResponse`]; the HTML layer wraps it in [`crate::web::error::WebError`].

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description shared by JSON responses and templates.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("method not allowed, expected {allow}")]
    MethodNotAllowed { allow: &'static str },
    #[error("{message}")]
    SendFailed { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(allow: &'static str) -> Self {
        Self::MethodNotAllowed { allow }
    }
    pub fn send_failed(message: impl Into<String>, details: Value) -> Self {
        Self::SendFailed {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status associated with this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::SendFailed { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code used in JSON bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::MethodNotAllowed { .. } => "method_not_allowed",
            AppError::SendFailed { .. } => "send_failed",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Converts the error into its serializable form.
    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::SendFailed { details, .. }
            | AppError::Internal { details, .. } => details.clone(),
            AppError::MethodNotAllowed { allow } => json!({ "allow": allow }),
        };

        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details,
        }
    }

    /// Value for the `Allow` header on 405 responses.
    pub fn allow_header(&self) -> Option<HeaderValue> {
        match self {
            AppError::MethodNotAllowed { allow } => Some(HeaderValue::from_static(allow)),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let allow = self.allow_header();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();
        if let Some(allow) = allow {
            response.headers_mut().insert(header::ALLOW, allow);
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
