//! Auth Configuration
//!
//! Built once at startup from the environment. There is deliberately no
//! fallback for the signing secret: a process without an explicit secret
//! must refuse to start rather than sign tokens with a known constant.

use std::time::Duration;

use crate::error::{AuthError, AuthResult};

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Session lifetime: fixed 7-day window
pub const SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Default session cookie name
pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Auth configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric secret for token signing (HS256)
    pub token_secret: Vec<u8>,
    /// Token / cookie lifetime
    pub session_ttl: Duration,
    /// Session cookie settings
    pub cookie: CookieConfig,
    /// Admin path prefix the gate watches
    pub admin_prefix: String,
    /// Login page path (auth-only route)
    pub login_path: String,
    /// Dashboard root (protected subtree)
    pub dashboard_path: String,
    /// First-admin credentials for the bootstrap endpoint
    pub bootstrap_email: Option<String>,
    pub bootstrap_password: Option<String>,
}

impl AuthConfig {
    /// Create a config with an explicit signing secret.
    ///
    /// Fails on an empty secret; there is no default.
    pub fn new(token_secret: Vec<u8>, secure_cookies: bool) -> AuthResult<Self> {
        if token_secret.is_empty() {
            return Err(AuthError::Internal(
                "Session signing secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            token_secret,
            session_ttl: SESSION_TTL,
            cookie: CookieConfig::session(
                SESSION_COOKIE_NAME,
                secure_cookies,
                SESSION_TTL.as_secs() as i64,
            ),
            admin_prefix: "/admin".to_string(),
            login_path: "/admin/login".to_string(),
            dashboard_path: "/admin/dashboard".to_string(),
            bootstrap_email: None,
            bootstrap_password: None,
        })
    }

    /// Set the bootstrap admin credentials.
    pub fn with_bootstrap(mut self, email: Option<String>, password: Option<String>) -> Self {
        self.bootstrap_email = email;
        self.bootstrap_password = password;
        self
    }

    /// Config for tests and local development (fixed secret, insecure cookie).
    pub fn development() -> Self {
        Self::new(b"development-only-signing-secret!".to_vec(), false)
            .expect("development secret is non-empty")
    }

    /// Session TTL in whole seconds
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_refused() {
        assert!(AuthConfig::new(Vec::new(), true).is_err());
    }

    #[test]
    fn test_session_cookie_defaults() {
        let config = AuthConfig::development();
        assert_eq!(config.cookie.name, SESSION_COOKIE_NAME);
        assert!(config.cookie.http_only);
        assert_eq!(config.cookie.same_site, SameSite::Lax);
        assert_eq!(config.cookie.path, "/");
        assert_eq!(config.cookie.max_age_secs, Some(7 * 24 * 3600));
    }

    #[test]
    fn test_route_defaults() {
        let config = AuthConfig::development();
        assert_eq!(config.admin_prefix, "/admin");
        assert_eq!(config.login_path, "/admin/login");
        assert_eq!(config.dashboard_path, "/admin/dashboard");
    }
}
