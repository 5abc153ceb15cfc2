//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::application::{BootstrapUseCase, SignInInput, SignInUseCase};
use crate::domain::repository::AdminAccountRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AccountSummary, BootstrapResponse, LoginRequest, LoginResponse, LogoutResponse,
    SessionResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
{
    let email = req.email.ok_or(AuthError::MissingField("email"))?;
    let password = req.password.ok_or(AuthError::MissingField("password"))?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(SignInInput { email, password }).await?;

    let cookie = state.config.cookie.build_set_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            account: AccountSummary::from(&output.account),
        }),
    ))
}

// ============================================================================
// Session status
// ============================================================================

/// GET /api/auth/session
pub async fn session<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionResponse>>
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
{
    let claims = extract_cookie(&headers, &state.config.cookie.name)
        .and_then(|token| token::verify(&token, &state.config.token_secret))
        .ok_or(AuthError::NotAuthenticated)?;

    Ok(Json(SessionResponse::from(claims)))
}

// ============================================================================
// Logout
// ============================================================================

/// DELETE /api/auth/logout
///
/// Stateless sessions: logout is nothing more than deleting the cookie.
pub async fn logout<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie.build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse { signed_out: true }),
    )
}

// ============================================================================
// Bootstrap
// ============================================================================

/// GET|POST /api/auth/init
pub async fn bootstrap<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<BootstrapResponse>>
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = BootstrapUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute().await?;

    let message = if output.created {
        "Admin account created"
    } else {
        "Admin account already exists"
    };

    Ok(Json(BootstrapResponse {
        created: output.created,
        email: output.email,
        message,
    }))
}
