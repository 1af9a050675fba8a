//! Token Service
//!
//! Issuance and verification of the two signed token kinds:
//! - Session tokens (24 h) carried in the `access_token` cookie
//! - Password-reset tokens (10 min) carried in emailed links
//!
//! Both are HS256 JWTs signed with the process-wide secret. The OTP is not
//! handled here: it is a stored six-digit code, not a signed token.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind as JwtError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::value_object::account_password::AccountPassword;
use crate::error::{AuthError, AuthResult};

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account id
    pub sub: Uuid,
    /// Verification flag at issuance
    pub verified: bool,
    /// OAuth flag at issuance
    pub oauth: bool,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Password-reset token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetClaims {
    /// Account id
    pub sub: Uuid,
    /// Fingerprint of the password hash current at issuance.
    /// A completed reset changes the hash, so outstanding tokens go stale.
    pub pfp: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Signed-token issuance and verification
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    session_ttl: chrono::Duration,
    reset_ttl: chrono::Duration,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        // Zero leeway: a 10-minute token is a 10-minute token
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(&config.token_secret),
            decoding: DecodingKey::from_secret(&config.token_secret),
            session_ttl: config.session_validity(),
            reset_ttl: config.reset_token_validity(),
            validation,
        }
    }

    // ========================================================================
    // Session tokens
    // ========================================================================

    /// Issue a session token for an authenticated account
    pub fn issue_session(&self, account: &Account) -> AuthResult<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: *account.account_id.as_uuid(),
            verified: account.is_verified,
            oauth: account.is_oauth,
            iat: now.timestamp(),
            exp: (now + self.session_ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Failed to sign session token: {e}")))
    }

    /// Verify a session token from the cookie
    pub fn verify_session(&self, token: &str) -> AuthResult<SessionClaims> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtError::ExpiredSignature => AuthError::SessionExpired,
                _ => AuthError::SessionInvalid,
            })
    }

    // ========================================================================
    // Reset tokens
    // ========================================================================

    /// Issue a password-reset token bound to the account's current hash
    pub fn issue_reset(&self, account: &Account) -> AuthResult<String> {
        let now = Utc::now();
        let claims = ResetClaims {
            sub: *account.account_id.as_uuid(),
            pfp: Self::password_fingerprint(&account.password_hash),
            iat: now.timestamp(),
            exp: (now + self.reset_ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Failed to sign reset token: {e}")))
    }

    /// Verify a reset token from an emailed link
    pub fn verify_reset(&self, token: &str) -> AuthResult<ResetClaims> {
        jsonwebtoken::decode::<ResetClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtError::ExpiredSignature => AuthError::ResetTokenExpired,
                _ => AuthError::InvalidResetToken,
            })
    }

    /// Fingerprint of a password hash: first 8 bytes of SHA-256, hex-encoded
    pub fn password_fingerprint(hash: &AccountPassword) -> String {
        let digest = Sha256::digest(hash.as_phc_string().as_bytes());
        digest[..8].iter().map(|b| format!("{b:02x}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{Email, RawPassword, Username};

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::with_random_secret())
    }

    fn account() -> Account {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        Account::register(
            Username::new("alice").unwrap(),
            Email::new("a@x.com").unwrap(),
            AccountPassword::from_raw(&raw).unwrap(),
        )
    }

    #[test]
    fn test_session_roundtrip() {
        let service = service();
        let account = account();

        let token = service.issue_session(&account).unwrap();
        let claims = service.verify_session(&token).unwrap();

        assert_eq!(&claims.sub, account.account_id.as_uuid());
        assert!(!claims.verified);
        assert!(!claims.oauth);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_session_rejects_wrong_secret() {
        let account = account();
        let token = service().issue_session(&account).unwrap();

        let other = service();
        assert!(matches!(
            other.verify_session(&token),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_session_rejects_garbage() {
        assert!(matches!(
            service().verify_session("not.a.token"),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_expired_session_is_distinct() {
        let config = AuthConfig::with_random_secret();
        let service = TokenService::new(&config);
        let account = account();

        // Craft a token whose exp is well in the past
        let now = Utc::now();
        let claims = SessionClaims {
            sub: *account.account_id.as_uuid(),
            verified: true,
            oauth: false,
            iat: (now - chrono::Duration::hours(25)).timestamp(),
            exp: (now - chrono::Duration::hours(1)).timestamp(),
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.token_secret),
        )
        .unwrap();

        assert!(matches!(
            service.verify_session(&token),
            Err(AuthError::SessionExpired)
        ));
    }

    #[test]
    fn test_reset_roundtrip() {
        let service = service();
        let account = account();

        let token = service.issue_reset(&account).unwrap();
        let claims = service.verify_reset(&token).unwrap();

        assert_eq!(&claims.sub, account.account_id.as_uuid());
        assert_eq!(
            claims.pfp,
            TokenService::password_fingerprint(&account.password_hash)
        );
        assert_eq!(claims.exp - claims.iat, 600);
    }

    #[test]
    fn test_expired_reset_is_distinct() {
        let config = AuthConfig::with_random_secret();
        let service = TokenService::new(&config);
        let account = account();

        let now = Utc::now();
        let claims = ResetClaims {
            sub: *account.account_id.as_uuid(),
            pfp: TokenService::password_fingerprint(&account.password_hash),
            iat: (now - chrono::Duration::minutes(20)).timestamp(),
            exp: (now - chrono::Duration::minutes(10)).timestamp(),
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.token_secret),
        )
        .unwrap();

        assert!(matches!(
            service.verify_reset(&token),
            Err(AuthError::ResetTokenExpired)
        ));
    }

    #[test]
    fn test_fingerprint_changes_with_password() {
        let mut account = account();
        let before = TokenService::password_fingerprint(&account.password_hash);

        let raw = RawPassword::new("another1".to_string()).unwrap();
        account.set_password(AccountPassword::from_raw(&raw).unwrap());
        let after = TokenService::password_fingerprint(&account.password_hash);

        assert_ne!(before, after);
        assert_eq!(after.len(), 16);
    }

    #[test]
    fn test_token_kinds_not_interchangeable() {
        let service = service();
        let account = account();

        // A session token is not a valid reset token (missing pfp claim)
        let session = service.issue_session(&account).unwrap();
        assert!(matches!(
            service.verify_reset(&session),
            Err(AuthError::InvalidResetToken)
        ));
    }
}
