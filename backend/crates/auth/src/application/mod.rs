//! Application Layer
//!
//! Use cases, session-token issue/verify, and configuration.

pub mod bootstrap;
pub mod config;
pub mod sign_in;
pub mod token;

// Re-exports
pub use bootstrap::{BootstrapOutput, BootstrapUseCase};
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use token::SessionClaims;
