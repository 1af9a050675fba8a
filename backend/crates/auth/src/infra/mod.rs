//! Infrastructure Layer
//!
//! Database and mail implementations of the domain ports.

pub mod postgres;
pub mod smtp;

pub use postgres::PgAccountRepository;
pub use smtp::SmtpNotifier;
