//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `shared::error::AppError` system. Credential failures deliberately share
//! one client-facing message so responses cannot be used to enumerate
//! accounts or probe token validity.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password - never differentiated
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account exists but the active flag is off
    #[error("Account is disabled")]
    AccountDisabled,

    /// No valid session token on a request that needs one.
    /// Expired, tampered and absent tokens all land here.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Required request field missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Bootstrap credentials not configured
    #[error("Bootstrap admin credentials are not configured")]
    BootstrapNotConfigured,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::AccountDisabled
            | AuthError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            AuthError::MissingField(_) | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::BootstrapNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::AccountDisabled
            | AuthError::NotAuthenticated => ErrorKind::Unauthorized,
            AuthError::MissingField(_) | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::BootstrapNotConfigured
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
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
            AuthError::MissingField(field) => err.with_field(*field),
            _ => err,
        }
    }

    /// Log with the appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::BootstrapNotConfigured => {
                tracing::error!("Bootstrap endpoint called without configured credentials");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountDisabled => {
                tracing::warn!("Login attempt on disabled account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
