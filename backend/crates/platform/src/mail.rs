//! SMTP Mail Transport
//!
//! Thin wrapper over lettre's async SMTP transport. Message content lives
//! with the domain that sends it; this module only knows how to deliver.

use std::time::Duration;

use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::PoolConfig;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    /// Invalid sender or recipient address
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// SMTP transport configuration
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay host
    pub host: String,
    /// SMTP port (465/587 typically)
    pub port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password (app password for most providers)
    pub password: String,
    /// Sender mailbox, e.g. `Accounts <no-reply@example.com>`
    pub from: String,
}

/// Async SMTP mailer
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Mailer {
    /// Build a pooled TLS transport from config
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .port(config.port)
            .pool_config(PoolConfig::new().max_size(4))
            .timeout(Some(Duration::from_secs(10)))
            .build();

        let from: Mailbox = config.from.parse()?;

        Ok(Self { transport, from })
    }

    /// Send a plain text message
    pub async fn send_text(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(message).await?;
        Ok(())
    }

    /// Send an HTML message
    pub async fn send_html(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())?;

        self.transport.send(message).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailConfig {
        MailConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "mailer".to_string(),
            password: "secret".to_string(),
            from: "Accounts <no-reply@example.com>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_build_mailer() {
        assert!(Mailer::new(&config()).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_from_address() {
        let bad = MailConfig {
            from: "not an address".to_string(),
            ..config()
        };
        assert!(matches!(Mailer::new(&bad), Err(MailError::Address(_))));
    }
}
