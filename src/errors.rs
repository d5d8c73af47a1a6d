//! Centralized error handling.
//!
//! Every handler failure ends up as an [`AppError`], which renders itself as
//! the standard `{ status: "error", message, error?: { detail } }` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ApiResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller-supplied data was malformed or incomplete
    #[error("{message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },

    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule in the store rejected the write
    #[error("{message}")]
    Conflict { message: String, detail: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Unclassified failure; the payload is the detail shown to the caller
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::BadRequest { message, .. } | AppError::Conflict { message, .. } => {
                message.clone()
            }
            AppError::NotFound(message) => message.clone(),
            AppError::Database(_) | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Get the `error.detail` string, if this error carries one
    pub fn detail(&self) -> Option<String> {
        match self {
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::NotFound(_) => None,
            AppError::Conflict { detail, .. } => Some(detail.clone()),
            AppError::Database(_) => Some("A database error occurred".to_string()),
            AppError::Internal(detail) => Some(detail.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(e) = &self {
            tracing::error!("Database error: {:?}", e);
        }

        let status = self.status();
        let body = ApiResponse::<()>::error(self.user_message(), self.detail());

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(message: impl Into<String>, detail: Option<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            detail,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Conflict {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal(detail.into())
    }
}
