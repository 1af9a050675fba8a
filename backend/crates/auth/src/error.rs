//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No account for the given email or id
    #[error("Account not found")]
    AccountNotFound,

    /// Email or username already taken
    #[error("An account with this email or username already exists")]
    DuplicateAccount,

    /// Resend requested for an account that needs no verification
    #[error("Email is already verified")]
    AlreadyVerified,

    /// Wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login attempt before OTP verification
    #[error("Please verify your email first")]
    EmailNotVerified,

    /// Submitted OTP does not match the stored one
    #[error("Invalid OTP")]
    InvalidOtp,

    /// OTP past its validity window
    #[error("OTP has expired")]
    OtpExpired,

    /// Reset token tampered, malformed, or already consumed
    #[error("Password reset link is invalid")]
    InvalidResetToken,

    /// Reset token past its validity window
    #[error("Password reset link has expired")]
    ResetTokenExpired,

    /// Session token missing, tampered, or malformed
    #[error("Session is missing or invalid")]
    SessionInvalid,

    /// Session token past its validity window
    #[error("Session has expired, please sign in again")]
    SessionExpired,

    /// Authenticated account differs from the target of the operation
    #[error("You can only update your own account")]
    NotAccountOwner,

    /// Input validation error
    #[error("{0}")]
    Validation(String),

    /// Outbound mail failure
    #[error("Mail delivery failed: {0}")]
    MailDelivery(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AccountNotFound => ErrorKind::NotFound,
            AuthError::DuplicateAccount | AuthError::AlreadyVerified => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::EmailNotVerified
            | AuthError::SessionInvalid
            | AuthError::SessionExpired
            | AuthError::NotAccountOwner => ErrorKind::Unauthorized,
            AuthError::InvalidOtp
            | AuthError::OtpExpired
            | AuthError::InvalidResetToken
            | AuthError::ResetTokenExpired
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::MailDelivery(_) => ErrorKind::ServiceUnavailable,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::MailDelivery(msg) => {
                tracing::error!(message = %msg, "Outbound mail failure");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::EmailNotVerified => {
                tracing::warn!("Login attempt on unverified account");
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

impl From<platform::mail::MailError> for AuthError {
    fn from(err: platform::mail::MailError) -> Self {
        AuthError::MailDelivery(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::AccountNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AuthError::DuplicateAccount.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::AlreadyVerified.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::EmailNotVerified.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::NotAccountOwner.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::InvalidOtp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::OtpExpired.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::ResetTokenExpired.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_expired_variants_stay_distinct() {
        // Same wire status, different messages
        assert_ne!(
            AuthError::InvalidResetToken.to_string(),
            AuthError::ResetTokenExpired.to_string()
        );
        assert_ne!(
            AuthError::InvalidOtp.to_string(),
            AuthError::OtpExpired.to_string()
        );
    }
}
