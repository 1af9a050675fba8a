//! Verify OTP Use Case
//!
//! Confirms email ownership and flips the account to verified.

use std::sync::Arc;

use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Verify OTP input
pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
}

/// Verify OTP use case
pub struct VerifyOtpUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> VerifyOtpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: VerifyOtpInput) -> AuthResult<()> {
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let mut account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Code match is checked before expiry; a cleared or absent code
        // simply does not match (so a repeated submission fails here).
        match &account.pending_otp {
            Some(pending) if pending.code.matches(&input.otp) => {
                if pending.is_expired() {
                    return Err(AuthError::OtpExpired);
                }
            }
            _ => return Err(AuthError::InvalidOtp),
        }

        account.mark_verified();
        self.repo.update(&account).await?;

        tracing::info!(account_id = %account.account_id, "Email verified");

        Ok(())
    }
}
