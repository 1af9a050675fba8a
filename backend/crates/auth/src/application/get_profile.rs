//! Get Profile Use Case

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_id::AccountId;
use crate::error::{AuthError, AuthResult};

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Load an account for display; the presentation layer projects out
    /// the sensitive fields
    pub async fn execute(&self, account_id: &AccountId) -> AuthResult<Account> {
        self.repo
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)
    }
}
