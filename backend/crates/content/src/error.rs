//! Content Error Types
//!
//! Content-specific error variants that integrate with the unified
//! `shared::error::AppError` system. Validation failures carry the field
//! name; store failures stay generic toward the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// Required payload field missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Path segment does not name a content kind
    #[error("Unknown content type: {0}")]
    UnknownKind(String),

    /// No record with the requested id
    #[error("Record not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::MissingField(_) | ContentError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ContentError::UnknownKind(_) | ContentError::NotFound => StatusCode::NOT_FOUND,
            ContentError::Database(_) | ContentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::MissingField(_) | ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::UnknownKind(_) | ContentError::NotFound => ErrorKind::NotFound,
            ContentError::Database(_) | ContentError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. 5xx details are replaced with a generic message;
    /// the specifics only go to the log.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            return AppError::new(self.kind(), "Internal server error");
        }
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            ContentError::MissingField(field) => err.with_field(*field),
            _ => err,
        }
    }

    /// Log with the appropriate level
    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            ContentError::Internal(msg) => {
                tracing::error!(message = %msg, "Content internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_400_with_field() {
        let err = ContentError::MissingField("imageUrl");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_app_error().field(), Some("imageUrl"));
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(ContentError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ContentError::UnknownKind("blog".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_server_errors_are_generic_to_clients() {
        let err = ContentError::Internal("jsonb column corrupt".to_string());
        let app = err.to_app_error();
        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("jsonb"));
    }
}
