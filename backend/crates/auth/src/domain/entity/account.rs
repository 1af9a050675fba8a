//! Account Entity
//!
//! One record per user: credentials, verification state, pending OTP.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    account_id::AccountId, account_password::AccountPassword, email::Email, otp_code::OtpCode,
    username::Username,
};

/// A pending email-verification passcode
///
/// Code and expiry always travel together; an account either has a full
/// pending verification or none at all.
#[derive(Debug, Clone)]
pub struct PendingOtp {
    /// The six-digit code delivered by email
    pub code: OtpCode,
    /// Instant after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl PendingOtp {
    /// Issue a fresh code valid for `ttl` from now
    pub fn issue(ttl: chrono::Duration) -> Self {
        Self {
            code: OtpCode::generate(),
            expires_at: Utc::now() + ttl,
        }
    }

    /// The code is invalid once its expiry instant has been reached
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Opaque identifier, immutable once created
    pub account_id: AccountId,
    /// Unique handle (lowercase alphanumeric)
    pub username: Username,
    /// Unique, normalized email address
    pub email: Email,
    /// Argon2id hash; never leaves the server
    pub password_hash: AccountPassword,
    /// True after a successful OTP check; never reverts
    pub is_verified: bool,
    /// Created via a third-party identity; exempt from OTP verification
    pub is_oauth: bool,
    /// Present only while email verification is outstanding
    pub pending_otp: Option<PendingOtp>,
    /// Optional profile image reference
    pub avatar_url: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create an unverified account (normal registration path)
    pub fn register(username: Username, email: Email, password_hash: AccountPassword) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            username,
            email,
            password_hash,
            is_verified: false,
            is_oauth: false,
            pending_otp: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an OAuth-backed account (no OTP verification, ever)
    pub fn oauth(
        username: Username,
        email: Email,
        password_hash: AccountPassword,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            account_id: AccountId::new(),
            username,
            email,
            password_hash,
            is_verified: false,
            is_oauth: true,
            pending_otp: None,
            avatar_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether login is permitted (verification gate)
    pub fn can_sign_in(&self) -> bool {
        self.is_verified || self.is_oauth
    }

    /// Whether this account still needs (or can repeat) OTP verification
    pub fn needs_verification(&self) -> bool {
        !self.is_verified && !self.is_oauth
    }

    /// Issue (or re-issue) a verification code, returning a copy for delivery
    pub fn issue_otp(&mut self, ttl: chrono::Duration) -> OtpCode {
        let pending = PendingOtp::issue(ttl);
        let code = pending.code.clone();
        self.pending_otp = Some(pending);
        self.updated_at = Utc::now();
        code
    }

    /// Flip to verified and clear the pending code in one step
    ///
    /// Verification is monotonic: nothing on this entity sets it back.
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.pending_otp = None;
        self.updated_at = Utc::now();
    }

    /// Replace the stored password hash
    pub fn set_password(&mut self, password_hash: AccountPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Replace the username
    pub fn set_username(&mut self, username: Username) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Replace the email address
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Replace the avatar reference
    pub fn set_avatar(&mut self, avatar_url: String) {
        self.avatar_url = Some(avatar_url);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        let raw = crate::domain::value_object::RawPassword::new("secret1".to_string()).unwrap();
        Account::register(
            Username::new("alice").unwrap(),
            Email::new("a@x.com").unwrap(),
            AccountPassword::from_raw(&raw).unwrap(),
        )
    }

    #[test]
    fn test_register_starts_unverified() {
        let account = account();
        assert!(!account.is_verified);
        assert!(!account.is_oauth);
        assert!(account.pending_otp.is_none());
        assert!(!account.can_sign_in());
        assert!(account.needs_verification());
    }

    #[test]
    fn test_issue_otp_sets_both_fields() {
        let mut account = account();
        let code = account.issue_otp(chrono::Duration::hours(1));

        let pending = account.pending_otp.as_ref().unwrap();
        assert_eq!(pending.code, code);
        assert!(!pending.is_expired());
    }

    #[test]
    fn test_mark_verified_clears_otp() {
        let mut account = account();
        account.issue_otp(chrono::Duration::hours(1));

        account.mark_verified();
        assert!(account.is_verified);
        assert!(account.pending_otp.is_none());
        assert!(account.can_sign_in());
        assert!(!account.needs_verification());
    }

    #[test]
    fn test_oauth_account_bypasses_verification() {
        let raw = crate::domain::value_object::RawPassword::generate();
        let account = Account::oauth(
            Username::new("bob42").unwrap(),
            Email::new("b@x.com").unwrap(),
            AccountPassword::from_raw(&raw).unwrap(),
            Some("https://cdn.example.com/p.png".to_string()),
        );

        assert!(account.is_oauth);
        assert!(!account.is_verified);
        assert!(account.can_sign_in());
        assert!(!account.needs_verification());
        assert!(account.pending_otp.is_none());
    }

    #[test]
    fn test_expired_otp() {
        let mut account = account();
        account.issue_otp(chrono::Duration::hours(1));

        // Rewind the expiry past now
        account.pending_otp.as_mut().unwrap().expires_at = Utc::now() - chrono::Duration::seconds(1);
        assert!(account.pending_otp.as_ref().unwrap().is_expired());
    }
}
