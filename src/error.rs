//! Request-level error type.
//!
//! Every handler returns `Result<T, AppError>`; the error is rendered as a
//! JSON body with a stable `error` code and a user-facing `message`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The backing store could not be reached.
    #[error("database unavailable")]
    ConnectionUnavailable,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    /// User input failed a business rule (missing checkout field, empty cart...).
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConnectionUnavailable => "connection_unavailable",
            Self::DuplicateEmail => "duplicate_email",
            Self::InvalidCredentials => "invalid_credentials",
            Self::ValidationFailed(_) => "validation_failed",
            Self::NotFound(_) => "not_found",
            Self::Unauthorized(_) => "unauthorized",
            Self::BadRequest(_) => "bad_request",
            Self::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ConnectionUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::ConnectionUnavailable => "Database not available, please try again later".into(),
            Self::DuplicateEmail => "Email already exists".into(),
            Self::InvalidCredentials => "Invalid credentials".into(),
            Self::ValidationFailed(msg)
            | Self::NotFound(msg)
            | Self::Unauthorized(msg)
            | Self::BadRequest(msg) => msg.clone(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(_) => Self::ConnectionUnavailable,
            StoreError::Conflict(msg) | StoreError::Query(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(detail) => tracing::error!(error = %detail, "request failed"),
            Self::ConnectionUnavailable => tracing::error!("request failed: database unavailable"),
            _ => {}
        }

        let body = Json(json!({
            "error": self.code(),
            "message": self.public_message(),
        }));
        (self.status(), body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
