//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, session-token issue/verify, config
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router, authorization gate
//!
//! ## Features
//! - Admin login with email + password
//! - Stateless signed session token (JWT) carried in an HTTP-only cookie
//! - Authorization gate classifying admin routes (protected / auth-only /
//!   admin root) with login redirects
//! - Idempotent bootstrap of the first admin account
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - Session validity is signature + expiry only; there is no server-side
//!   session store and logout is cookie deletion
//! - Unknown email and wrong password collapse to one generic error
//! - Token rejection reasons are never exposed to clients

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAdminRepository;
pub use presentation::extract::CurrentAdmin;
pub use presentation::router::auth_router;

// Re-export shared error types for unified error handling
pub use shared::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

pub mod token {
    pub use crate::application::token::*;
}
