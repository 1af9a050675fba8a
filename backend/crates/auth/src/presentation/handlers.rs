//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::Extension;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    ForgotPasswordInput, ForgotPasswordUseCase, GetProfileUseCase, LoginInput, LoginUseCase,
    OAuthLoginInput, OAuthLoginUseCase, RegisterInput, RegisterUseCase, ResendOtpInput,
    ResendOtpUseCase, ResetPasswordInput, ResetPasswordUseCase, UpdateProfileInput,
    UpdateProfileUseCase, VerifyOtpInput, VerifyOtpUseCase,
};
use crate::domain::notifier::AccountNotifier;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_id::AccountId;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AccountResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, OAuthLoginRequest,
    RegisterRequest, ResendOtpRequest, ResetPasswordRequest, UpdateProfileRequest,
    VerifyOtpRequest, VerifyOtpResponse,
};
use crate::presentation::middleware::CurrentAccount;

/// Shared state for the auth handlers
pub struct AuthAppState<R, N>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

impl<R, N> Clone for AuthAppState<R, N>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            notifier: self.notifier.clone(),
            config: self.config.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

/// Shared state for the user (profile) handlers
pub struct UserAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for UserAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    if req.username.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AuthError::Validation("All fields are required".to_string()));
    }

    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Account registered successfully. Please check your email for the OTP to verify your account.",
        )),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AuthError::Validation("All fields are required".to_string()));
    }

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.tokens.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state.config.cookie.build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AccountResponse::from_account(&output.account)),
    ))
}

// ============================================================================
// OAuth Login
// ============================================================================

/// POST /api/auth/google
pub async fn oauth_login<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<OAuthLoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    let use_case = OAuthLoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(OAuthLoginInput {
            email: req.email,
            display_name: req.name,
            avatar_url: req.photo,
        })
        .await?;

    let cookie = state.config.cookie.build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AccountResponse::from_account(&output.account)),
    ))
}

// ============================================================================
// Forgot / Reset Password
// ============================================================================

/// POST /api/auth/forgot-password
pub async fn forgot_password<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<ForgotPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    if req.email.trim().is_empty() {
        return Err(AuthError::Validation("Email is required".to_string()));
    }

    let use_case = ForgotPasswordUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    use_case
        .execute(ForgotPasswordInput { email: req.email })
        .await?;

    Ok(Json(MessageResponse::new(
        "Password reset link sent to your email",
    )))
}

/// POST /api/auth/reset-password/{token}
pub async fn reset_password<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Path(token): Path<String>,
    Json(req): Json<ResetPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    let use_case = ResetPasswordUseCase::new(state.repo.clone(), state.tokens.clone());

    use_case
        .execute(ResetPasswordInput {
            token,
            password: req.password,
        })
        .await?;

    Ok(Json(MessageResponse::new(
        "Password has been reset successfully",
    )))
}

// ============================================================================
// OTP Verification
// ============================================================================

/// POST /api/auth/verify-otp
pub async fn verify_otp<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<VerifyOtpRequest>,
) -> AuthResult<Json<VerifyOtpResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    if req.email.trim().is_empty() || req.otp.trim().is_empty() {
        return Err(AuthError::Validation(
            "Email and OTP are required".to_string(),
        ));
    }

    let use_case = VerifyOtpUseCase::new(state.repo.clone());

    use_case
        .execute(VerifyOtpInput {
            email: req.email,
            otp: req.otp,
        })
        .await?;

    Ok(Json(VerifyOtpResponse {
        success: true,
        message: "Email verified successfully".to_string(),
    }))
}

/// POST /api/auth/resend-otp
pub async fn resend_otp<R, N>(
    State(state): State<AuthAppState<R, N>>,
    Json(req): Json<ResendOtpRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    if req.email.trim().is_empty() {
        return Err(AuthError::Validation("Email is required".to_string()));
    }

    let use_case = ResendOtpUseCase::new(
        state.repo.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    use_case
        .execute(ResendOtpInput { email: req.email })
        .await?;

    Ok(Json(MessageResponse::new("New OTP sent to your email")))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /api/auth/logout
///
/// Sessions are stateless signed tokens; logout just expires the cookie.
pub async fn logout<R, N>(
    State(state): State<AuthAppState<R, N>>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Send + Sync + 'static,
    N: AccountNotifier + Send + Sync + 'static,
{
    let cookie = state.config.cookie.build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse::new("Logged out successfully")),
    ))
}

// ============================================================================
// Profile (requires session middleware)
// ============================================================================

/// GET /api/user/{id}
pub async fn get_profile<R>(
    State(state): State<UserAppState<R>>,
    Path(id): Path<Uuid>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());

    let account = use_case.execute(&AccountId::from_uuid(id)).await?;

    Ok(Json(AccountResponse::from_account(&account)))
}

/// PUT /api/user/{id}
pub async fn update_profile<R>(
    State(state): State<UserAppState<R>>,
    Extension(current): Extension<CurrentAccount>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone());

    let account = use_case
        .execute(
            &AccountId::from_uuid(id),
            &current.account_id,
            UpdateProfileInput {
                username: req.username,
                email: req.email,
                password: req.password,
                avatar_url: req.avatar_url,
            },
        )
        .await?;

    Ok(Json(AccountResponse::from_account(&account)))
}
