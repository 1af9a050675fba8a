//! Reset Password Use Case
//!
//! Consumes a reset token and replaces the stored password hash.
//!
//! Single use is enforced without a token store: the token carries a
//! fingerprint of the hash it was issued against, and the first successful
//! reset changes that hash. A replayed token (or one issued before an
//! unrelated password change) no longer matches and is rejected.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId,
    account_password::{AccountPassword, RawPassword},
};
use crate::error::{AuthError, AuthResult};

/// Reset password input
pub struct ResetPasswordInput {
    pub token: String,
    pub password: String,
}

/// Reset password use case
pub struct ResetPasswordUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> ResetPasswordUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> AuthResult<()> {
        // Policy check first, so a bad password reports 400 even alongside
        // a bad token
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let claims = self.tokens.verify_reset(&input.token)?;

        let mut account = self
            .repo
            .find_by_id(&AccountId::from_uuid(claims.sub))
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Stale fingerprint: token already consumed, or the password
        // changed after issuance
        if TokenService::password_fingerprint(&account.password_hash) != claims.pfp {
            return Err(AuthError::InvalidResetToken);
        }

        let password_hash = AccountPassword::from_raw(&raw_password)
            .map_err(|e| AuthError::Internal(e.message().to_string()))?;

        account.set_password(password_hash);
        self.repo.update(&account).await?;

        tracing::info!(account_id = %account.account_id, "Password reset completed");

        Ok(())
    }
}
