//! Account Password Value Object
//!
//! Domain value object for account passwords.
//! Delegates to `platform::password` for cryptographic operations.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Validation Rules
    /// - Minimum 6 characters
    /// - Maximum 128 characters
    /// - No control characters
    /// - Unicode NFKC normalized
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => {
                AppError::bad_request(format!("Password must be at least {} characters", min))
                    .with_action("Please choose a longer password")
            }

            PasswordPolicyError::TooLong { max, .. } => {
                AppError::bad_request(format!("Password must be at most {} characters", max))
                    .with_action("Please choose a shorter password")
            }

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
                    .with_action("Please enter a password")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
                    .with_action("Please remove any special control characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Synthesize a strong random password (OAuth-created accounts)
    ///
    /// Sixteen alphanumeric characters from OS randomness; the account
    /// owner never sees it and can replace it via password reset.
    pub fn generate() -> Self {
        let raw = platform::crypto::random_alphanumeric(16);
        Self(ClearTextPassword::new(raw).expect("generated password satisfies the policy"))
    }

    /// Access the inner ClearTextPassword
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Account Password (Hashed, for storage)
// ============================================================================

/// Hashed account password for database storage
///
/// Stores the password in Argon2id PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountPassword(HashedPassword);

impl AccountPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash()
            .map_err(|e| AppError::internal(e.to_string()))?;
        Ok(Self(hashed))
    }

    /// Restore from a PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(s)
            .map_err(|e| AppError::internal(e.to_string()))?;
        Ok(Self(hashed))
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for AccountPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccountPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw).unwrap();
        assert!(hashed.verify(&raw));
    }

    #[test]
    fn test_wrong_password_fails() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw).unwrap();

        let wrong = RawPassword::new("secret2".to_string()).unwrap();
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_policy_too_short() {
        let err = RawPassword::new("12345".to_string()).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_generated_password_is_strong() {
        let raw = RawPassword::generate();
        let hashed = AccountPassword::from_raw(&raw).unwrap();
        assert!(hashed.verify(&raw));
    }

    #[test]
    fn test_phc_roundtrip() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = AccountPassword::from_raw(&raw).unwrap();

        let restored = AccountPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw));
    }

    #[test]
    fn test_debug_redacted() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("secret1"));
    }
}
