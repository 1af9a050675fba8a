//! Forgot Password Use Case
//!
//! Issues a short-lived reset token and mails the reset link.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::notifier::AccountNotifier;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Forgot password input
pub struct ForgotPasswordInput {
    pub email: String,
}

/// Forgot password use case
pub struct ForgotPasswordUseCase<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<R, N> ForgotPasswordUseCase<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    pub fn new(
        repo: Arc<R>,
        notifier: Arc<N>,
        tokens: Arc<TokenService>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            repo,
            notifier,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: ForgotPasswordInput) -> AuthResult<()> {
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let token = self.tokens.issue_reset(&account)?;
        let reset_url = format!(
            "{}/{}",
            self.config.reset_url_base.trim_end_matches('/'),
            token
        );

        self.notifier.send_reset_link(&account.email, &reset_url).await?;

        tracing::info!(account_id = %account.account_id, "Password reset link issued");

        Ok(())
    }
}
