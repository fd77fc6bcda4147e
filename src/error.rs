//! Unified error type for stock-server
//!
//! `AppError` carries a structured [`ErrorCode`] plus a human-readable
//! message and renders itself as an HTTP response. Not-found responses
//! carry an empty body; validation responses carry the message text.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

/// Error codes used across the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Validation failed (bad or inconsistent input)
    ValidationFailed,
    /// Resource not found
    NotFound,
    /// Invalid request
    InvalidRequest,
    /// Internal server error
    InternalError,
    /// Database error
    DatabaseError,
}

impl ErrorCode {
    /// Default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }

    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationFailed | Self::InvalidRequest => StatusCode::BAD_REQUEST,
        }
    }
}

/// Application error with structured error code and message
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message (empty for bodiless responses)
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error (renders as a bodiless 404)
    pub fn not_found() -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: String::new(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if self.message.is_empty() {
            status.into_response()
        } else {
            (status, self.message).into_response()
        }
    }
}
