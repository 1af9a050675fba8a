//! Auth (Account Lifecycle) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and mail implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Registration with email OTP verification
//! - Email + password login gated on verification
//! - OAuth login/registration (verification bypass)
//! - Password reset via short-lived signed links
//! - Self-service profile read/update
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Stateless HS256 session tokens in an HttpOnly cookie
//! - Reset tokens bound to the password hash they were issued against,
//!   so a completed reset invalidates outstanding links

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAccountRepository;
pub use infra::smtp::SmtpNotifier;
pub use presentation::router::{auth_router, user_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
