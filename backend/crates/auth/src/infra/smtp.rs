//! SMTP Notifier
//!
//! Mail-backed implementation of the notification port.

use platform::mail::{MailConfig, MailError, Mailer};

use crate::domain::notifier::AccountNotifier;
use crate::domain::value_object::{email::Email, otp_code::OtpCode};
use crate::error::AuthResult;

/// SMTP-backed account notifier
#[derive(Clone)]
pub struct SmtpNotifier {
    mailer: Mailer,
}

impl SmtpNotifier {
    pub fn new(mailer: Mailer) -> Self {
        Self { mailer }
    }

    /// Build transport and notifier in one step
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        Ok(Self::new(Mailer::new(config)?))
    }
}

impl AccountNotifier for SmtpNotifier {
    async fn send_otp(&self, email: &Email, otp: &OtpCode) -> AuthResult<()> {
        let body = format!(
            "Your OTP for email verification is: {}\n\nThis code expires in 1 hour.",
            otp.as_str()
        );
        self.mailer
            .send_text(email.as_str(), "Verify Your Email", &body)
            .await?;
        Ok(())
    }

    async fn send_reset_link(&self, email: &Email, reset_url: &str) -> AuthResult<()> {
        let body = format!(
            "<p>Please click the following link to reset your password:</p>\
             <p><a href=\"{reset_url}\">{reset_url}</a></p>\
             <p>This link will expire in 10 minutes.</p>"
        );
        self.mailer
            .send_html(email.as_str(), "Password Reset Link", &body)
            .await?;
        Ok(())
    }

    async fn send_login_notice(&self, email: &Email) -> AuthResult<()> {
        self.mailer
            .send_text(
                email.as_str(),
                "Login Notification",
                "You have successfully logged in.",
            )
            .await?;
        Ok(())
    }
}
