//! Login Use Case
//!
//! Authenticates by email + password and issues a session token.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::account::Account;
use crate::domain::notifier::AccountNotifier;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_password::RawPassword, email::Email};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token for the cookie
    pub token: String,
    /// The authenticated account (projected by the presentation layer)
    pub account: Account,
}

/// Login use case
pub struct LoginUseCase<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    repo: Arc<R>,
    notifier: Arc<N>,
    tokens: Arc<TokenService>,
}

impl<R, N> LoginUseCase<R, N>
where
    R: AccountRepository,
    N: AccountNotifier,
{
    pub fn new(repo: Arc<R>, notifier: Arc<N>, tokens: Arc<TokenService>) -> Self {
        Self {
            repo,
            notifier,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A malformed email cannot belong to any account
        let email = Email::new(&input.email).map_err(|_| AuthError::AccountNotFound)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // A password outside the policy can never match a stored hash
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !account.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        // Verification gate, evaluated on the row we just authenticated
        if !account.can_sign_in() {
            return Err(AuthError::EmailNotVerified);
        }

        let token = self.tokens.issue_session(&account)?;

        // Best-effort notice; a delivery failure never fails the login
        if let Err(e) = self.notifier.send_login_notice(&account.email).await {
            tracing::warn!(error = %e, "Login notification failed");
        }

        tracing::info!(account_id = %account.account_id, "Account signed in");

        Ok(LoginOutput { token, account })
    }
}
