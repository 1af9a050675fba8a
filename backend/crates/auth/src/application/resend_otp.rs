//! Resend OTP Use Case
//!
//! Regenerates the verification code for a still-unverified account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::notifier::AccountNotifier;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Resend OTP input
pub struct ResendOtpInput {
    pub email: String,
}

/// Resend OTP use case
pub struct ResendOtpUseCase<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<R, N> ResendOtpUseCase<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: ResendOtpInput) -> AuthResult<()> {
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let mut account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // OAuth accounts never hold an OTP
        if !account.needs_verification() {
            return Err(AuthError::AlreadyVerified);
        }

        let otp = account.issue_otp(self.config.otp_validity());
        self.repo.update(&account).await?;

        tracing::info!(account_id = %account.account_id, "Verification code reissued");

        // Committed before delivery, same as registration: a failed send
        // still leaves a code that a later resend can replace.
        self.notifier.send_otp(&account.email, &otp).await?;

        Ok(())
    }
}
