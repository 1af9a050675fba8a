//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infrastructure
//! layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{account_id::AccountId, email::Email, username::Username};
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Create a new account
    async fn create(&self, account: &Account) -> AuthResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>>;

    /// Find account by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>>;

    /// Check if an email is taken
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Check if a username is taken
    async fn exists_by_username(&self, username: &Username) -> AuthResult<bool>;

    /// Update an existing account (errors if the row vanished)
    async fn update(&self, account: &Account) -> AuthResult<()>;
}
