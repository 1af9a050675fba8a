//! Update Profile Use Case
//!
//! Self-service partial update: only provided fields change.

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId,
    account_password::{AccountPassword, RawPassword},
    email::Email,
    username::Username,
};
use crate::error::{AuthError, AuthResult};

/// Update profile input; `None` fields are left untouched
#[derive(Default)]
pub struct UpdateProfileInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar_url: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        target: &AccountId,
        requester: &AccountId,
        input: UpdateProfileInput,
    ) -> AuthResult<Account> {
        // Self-service only
        if target != requester {
            return Err(AuthError::NotAccountOwner);
        }

        let mut account = self
            .repo
            .find_by_id(target)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if let Some(raw_username) = &input.username {
            // Strict: the caller must already supply the lowercase form
            let username = Username::strict(raw_username)
                .map_err(|e| AuthError::Validation(e.to_string()))?;

            if username != account.username && self.repo.exists_by_username(&username).await? {
                return Err(AuthError::DuplicateAccount);
            }
            account.set_username(username);
        }

        if let Some(raw_email) = &input.email {
            let email = Email::new(raw_email)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;

            if email != account.email && self.repo.exists_by_email(&email).await? {
                return Err(AuthError::DuplicateAccount);
            }
            account.set_email(email);
        }

        if let Some(raw_password) = input.password {
            let raw = RawPassword::new(raw_password)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;
            let password_hash = AccountPassword::from_raw(&raw)
                .map_err(|e| AuthError::Internal(e.message().to_string()))?;
            account.set_password(password_hash);
        }

        if let Some(avatar_url) = input.avatar_url {
            account.set_avatar(avatar_url);
        }

        // The repository reports NotFound if the row vanished underneath us
        self.repo.update(&account).await?;

        tracing::info!(account_id = %account.account_id, "Profile updated");

        Ok(account)
    }
}
