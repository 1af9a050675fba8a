//! Session Middleware
//!
//! Verifies the session token from the cookie and injects the
//! authenticated identity into request extensions.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::value_object::account_id::AccountId;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct SessionState {
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

/// Authenticated identity stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct CurrentAccount {
    pub account_id: AccountId,
    pub verified: bool,
    pub oauth: bool,
}

/// Middleware that requires a valid session token
pub async fn require_session(
    state: SessionState,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = platform::cookie::extract_cookie(req.headers(), &state.config.cookie.name)
        .ok_or_else(|| AuthError::SessionInvalid.into_response())?;

    let claims = state
        .tokens
        .verify_session(&token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(CurrentAccount {
        account_id: AccountId::from_uuid(claims.sub),
        verified: claims.verified,
        oauth: claims.oauth,
    });

    Ok(next.run(req).await)
}
