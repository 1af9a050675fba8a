//! Auth and User Routers

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::notifier::AccountNotifier;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::infra::smtp::SmtpNotifier;
use crate::presentation::handlers::{self, AuthAppState, UserAppState};
use crate::presentation::middleware::{self, SessionState};

/// Create the auth router with the PostgreSQL repository and SMTP notifier
pub fn auth_router(repo: PgAccountRepository, notifier: SmtpNotifier, config: AuthConfig) -> Router {
    auth_router_generic(repo, notifier, config)
}

/// Create a generic auth router for any repository/notifier implementation
pub fn auth_router_generic<R, N>(repo: R, notifier: N, config: AuthConfig) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenService::new(&config));
    let state = AuthAppState {
        repo: Arc::new(repo),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
        tokens,
    };

    Router::new()
        .route("/register", post(handlers::register::<R, N>))
        .route("/login", post(handlers::login::<R, N>))
        .route("/google", post(handlers::oauth_login::<R, N>))
        .route("/forgot-password", post(handlers::forgot_password::<R, N>))
        .route(
            "/reset-password/{token}",
            post(handlers::reset_password::<R, N>),
        )
        .route("/verify-otp", post(handlers::verify_otp::<R, N>))
        .route("/resend-otp", post(handlers::resend_otp::<R, N>))
        .route("/logout", get(handlers::logout::<R, N>))
        .with_state(state)
}

/// Create the user router with the PostgreSQL repository
pub fn user_router(repo: PgAccountRepository, config: AuthConfig) -> Router {
    user_router_generic(repo, config)
}

/// Create a generic user router for any repository implementation
///
/// All routes sit behind the session middleware.
pub fn user_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let tokens = Arc::new(TokenService::new(&config));
    let state = UserAppState {
        repo: Arc::new(repo),
    };
    let session = SessionState { config, tokens };

    Router::new()
        .route(
            "/{id}",
            get(handlers::get_profile::<R>).put(handlers::update_profile::<R>),
        )
        .layer(axum::middleware::from_fn(
            move |req: axum::extract::Request, next: axum::middleware::Next| {
                let session = session.clone();
                async move { middleware::require_session(session, req, next).await }
            },
        ))
        .with_state(state)
}
