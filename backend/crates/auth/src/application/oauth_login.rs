//! OAuth Login Use Case
//!
//! Login-or-register for accounts backed by a third-party identity.
//! The supplied email/name/photo are trusted as-is; verifying them against
//! the identity provider is out of scope here.

use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use crate::application::token::TokenService;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_password::{AccountPassword, RawPassword},
    email::Email,
    username::Username,
};
use crate::error::{AuthError, AuthResult};

/// Attempts at finding a free derived username before giving up
const USERNAME_DERIVE_ATTEMPTS: usize = 8;

/// OAuth login input
pub struct OAuthLoginInput {
    pub email: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// OAuth login output
pub struct OAuthLoginOutput {
    /// Session token for the cookie
    pub token: String,
    /// Existing or freshly created account
    pub account: Account,
    /// True when this call created the account
    pub created: bool,
}

/// OAuth login use case
pub struct OAuthLoginUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> OAuthLoginUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: OAuthLoginInput) -> AuthResult<OAuthLoginOutput> {
        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Existing account: issue a session straight away, password unchecked
        if let Some(account) = self.repo.find_by_email(&email).await? {
            let token = self.tokens.issue_session(&account)?;

            tracing::info!(account_id = %account.account_id, "OAuth sign in");

            return Ok(OAuthLoginOutput {
                token,
                account,
                created: false,
            });
        }

        // New account: synthesize credentials. The password is random and
        // never disclosed; no OTP is ever generated on this path.
        let raw_password = RawPassword::generate();
        let password_hash = AccountPassword::from_raw(&raw_password)
            .map_err(|e| AuthError::Internal(e.message().to_string()))?;

        let username = self.derive_username(&input.display_name).await?;
        let account = Account::oauth(username, email, password_hash, input.avatar_url);

        self.repo.create(&account).await?;

        let token = self.tokens.issue_session(&account)?;

        tracing::info!(
            account_id = %account.account_id,
            username = %account.username,
            "OAuth account created"
        );

        Ok(OAuthLoginOutput {
            token,
            account,
            created: true,
        })
    }

    /// Derive a unique username from the display name plus a random suffix
    async fn derive_username(&self, display_name: &str) -> AuthResult<Username> {
        let mut base: String = display_name
            .nfkc()
            .collect::<String>()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        // Leave room for the suffix within the 20-char limit
        base.truncate(16);
        if base.is_empty() {
            base.push_str("member");
        }

        for _ in 0..USERNAME_DERIVE_ATTEMPTS {
            let candidate = format!("{}{}", base, platform::crypto::random_digits(4));
            let username =
                Username::new(&candidate).map_err(|e| AuthError::Internal(e.to_string()))?;

            if !self.repo.exists_by_username(&username).await? {
                return Ok(username);
            }
        }

        Err(AuthError::Internal(
            "Could not derive a unique username".to_string(),
        ))
    }
}
