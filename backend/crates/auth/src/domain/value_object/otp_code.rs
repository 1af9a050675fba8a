//! OTP Code Value Object
//!
//! A one-time numeric passcode delivered by email. Not a signed token:
//! the code is stored on the account row and checked by exact string match.

use std::fmt;

/// Number of decimal digits in an OTP
pub const OTP_LENGTH: usize = 6;

/// Six-digit one-time passcode
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Generate a fresh random code from OS randomness
    pub fn generate() -> Self {
        Self(platform::crypto::random_digits(OTP_LENGTH))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the code for storage or delivery
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a user-submitted code
    ///
    /// Exact string match in constant time. Submitted input is trimmed;
    /// anything that is not the stored six digits simply does not match.
    pub fn matches(&self, submitted: &str) -> bool {
        platform::crypto::constant_time_eq(self.0.as_bytes(), submitted.trim().as_bytes())
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OtpCode").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let code = OtpCode::generate();
        assert_eq!(code.as_str().len(), OTP_LENGTH);
        assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_matches_exact() {
        let code = OtpCode::from_db("493027");
        assert!(code.matches("493027"));
        assert!(code.matches("  493027  "));
    }

    #[test]
    fn test_rejects_mismatch() {
        let code = OtpCode::from_db("493027");
        assert!(!code.matches("493028"));
        assert!(!code.matches("93027"));
        assert!(!code.matches(""));
    }

    #[test]
    fn test_debug_redacted() {
        let code = OtpCode::from_db("493027");
        assert!(!format!("{:?}", code).contains("493027"));
    }
}
