//! Auth Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AdminAccountRepository;
use crate::infra::postgres::PgAdminRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the auth router with the PostgreSQL repository
pub fn auth_router(repo: PgAdminRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AdminAccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/session", get(handlers::session::<R>))
        .route("/logout", delete(handlers::logout::<R>))
        .route(
            "/init",
            get(handlers::bootstrap::<R>).post(handlers::bootstrap::<R>),
        )
        .with_state(state)
}
