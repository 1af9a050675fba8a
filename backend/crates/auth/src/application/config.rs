//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! passed explicitly to services; there is no module-level global state.

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 secret for session and reset tokens
    pub token_secret: Vec<u8>,
    /// Session token validity (24 hours)
    pub session_ttl: Duration,
    /// Password-reset token validity (10 minutes)
    pub reset_token_ttl: Duration,
    /// OTP validity window (1 hour)
    pub otp_ttl: Duration,
    /// Base URL for reset links; the token is appended as a path segment
    pub reset_url_base: String,
    /// Session cookie settings
    pub cookie: CookieConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let session_ttl = Duration::from_secs(24 * 3600);
        Self {
            token_secret: vec![0u8; 32],
            session_ttl,
            reset_token_ttl: Duration::from_secs(10 * 60),
            otp_ttl: Duration::from_secs(3600),
            reset_url_base: "http://localhost:3000/reset-password".to_string(),
            cookie: CookieConfig {
                name: "access_token".to_string(),
                max_age_secs: Some(session_ttl.as_secs() as i64),
                ..CookieConfig::default()
            },
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::with_random_secret();
        config.cookie.secure = false;
        config
    }

    /// Session validity as a chrono duration
    pub fn session_validity(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).expect("session TTL fits chrono::Duration")
    }

    /// Reset-token validity as a chrono duration
    pub fn reset_token_validity(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.reset_token_ttl)
            .expect("reset token TTL fits chrono::Duration")
    }

    /// OTP validity as a chrono duration
    pub fn otp_validity(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.otp_ttl).expect("OTP TTL fits chrono::Duration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl.as_secs(), 86400);
        assert_eq!(config.reset_token_ttl.as_secs(), 600);
        assert_eq!(config.otp_ttl.as_secs(), 3600);
        assert_eq!(config.cookie.name, "access_token");
        assert_eq!(config.cookie.max_age_secs, Some(86400));
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
    }

    #[test]
    fn test_development_cookie_insecure() {
        let config = AuthConfig::development();
        assert!(!config.cookie.secure);
        assert!(config.cookie.http_only);
    }
}
