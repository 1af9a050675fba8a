//! Register Use Case
//!
//! Creates a new unverified account and delivers the verification code.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::notifier::AccountNotifier;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    email::Email,
    username::Username,
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<R, N> RegisterUseCase<R, N>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        // Validate all three fields up front
        let username =
            Username::new(&input.username).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Uniqueness across both identities
        if self.repo.exists_by_email(&email).await?
            || self.repo.exists_by_username(&username).await?
        {
            return Err(AuthError::DuplicateAccount);
        }

        let password_hash = AccountPassword::from_raw(&raw_password)
            .map_err(|e| AuthError::Internal(e.message().to_string()))?;

        let mut account = Account::register(username, email, password_hash);
        let otp = account.issue_otp(self.config.otp_validity());

        self.repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            username = %account.username,
            "Account registered"
        );

        // The account is committed; a delivery failure surfaces to the
        // caller but must not undo the registration.
        self.notifier.send_otp(&account.email, &otp).await?;

        Ok(())
    }
}
