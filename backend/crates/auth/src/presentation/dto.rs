//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::account::Account;

// ============================================================================
// Requests
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// OAuth login request (identity asserted by the client)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthLoginRequest {
    pub email: String,
    /// Display name from the identity provider
    pub name: String,
    /// Profile image URL from the identity provider
    pub photo: Option<String>,
}

/// Forgot password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reset password request (token travels in the path)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub password: String,
}

/// Verify OTP request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Resend OTP request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    pub email: String,
}

/// Update profile request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar_url: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Plain message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Verify OTP response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
}

/// Public projection of an account
///
/// This enumerates every field a client may see. The password hash and OTP
/// state are not fields here and so can never leak, including when new
/// sensitive columns are added to the entity later.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_account_verified: bool,
    pub is_oauth_account: bool,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountResponse {
    /// The single place where an account becomes client-visible
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.account_id.to_string(),
            username: account.username.as_str().to_string(),
            email: account.email.as_str().to_string(),
            is_account_verified: account.is_verified,
            is_oauth_account: account.is_oauth,
            avatar_url: account.avatar_url.clone(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{AccountPassword, Email, RawPassword, Username};

    #[test]
    fn test_projection_excludes_secrets() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let mut account = Account::register(
            Username::new("alice").unwrap(),
            Email::new("a@x.com").unwrap(),
            AccountPassword::from_raw(&raw).unwrap(),
        );
        let otp = account.issue_otp(chrono::Duration::hours(1));

        let json = serde_json::to_string(&AccountResponse::from_account(&account)).unwrap();

        assert!(json.contains("\"username\":\"alice\""));
        assert!(json.contains("\"isAccountVerified\":false"));
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains(otp.as_str()));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn test_camel_case_fields() {
        let json = serde_json::to_string(&MessageResponse::new("ok")).unwrap();
        assert_eq!(json, "{\"message\":\"ok\"}");

        let req: UpdateProfileRequest =
            serde_json::from_str("{\"avatarUrl\":\"https://cdn.example.com/a.png\"}").unwrap();
        assert_eq!(
            req.avatar_url.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert!(req.username.is_none());
    }
}
