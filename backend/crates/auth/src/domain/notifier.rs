//! Notification Port
//!
//! Out-of-band delivery of verification codes, reset links, and login
//! notices. Implementation (SMTP) lives in the infrastructure layer.
//!
//! Delivery is best-effort from the domain's point of view: callers decide
//! per operation whether a failure propagates (registration, OTP resend,
//! reset link) or is swallowed (login notice).

use crate::domain::value_object::{email::Email, otp_code::OtpCode};
use crate::error::AuthResult;

/// Account notification trait
#[trait_variant::make(AccountNotifier: Send)]
pub trait LocalAccountNotifier {
    /// Deliver a verification code
    async fn send_otp(&self, email: &Email, otp: &OtpCode) -> AuthResult<()>;

    /// Deliver a password-reset link
    async fn send_reset_link(&self, email: &Email, reset_url: &str) -> AuthResult<()>;

    /// Deliver a successful-login notice
    async fn send_login_notice(&self, email: &Email) -> AuthResult<()>;
}
