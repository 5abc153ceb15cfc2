//! Sign In Use Case
//!
//! Verifies credentials and issues a session token. Unknown email and wrong
//! password are indistinguishable from the outside; the last-login update is
//! fire-and-forget so a store hiccup never blocks a successful login.

use std::sync::Arc;

use platform::password::RawPassword;

use crate::application::config::AuthConfig;
use crate::application::token::{self, SessionClaims};
use crate::domain::entity::admin_account::AdminAccount;
use crate::domain::repository::AdminAccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed session token for the cookie
    pub token: String,
    /// Account summary (no credential material)
    pub account: AdminAccount,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: AdminAccountRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: AdminAccountRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A malformed email cannot match an account; collapse to the same
        // generic failure as an unknown one.
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !account.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let hash = self
            .repo
            .credential_by_id(&account.account_id)
            .await?
            .ok_or_else(|| {
                AuthError::Internal(format!(
                    "Account {} has no stored credential",
                    account.account_id
                ))
            })?;

        let raw = RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !hash.verify(&raw)? {
            return Err(AuthError::InvalidCredentials);
        }

        // Best-effort last-login update; failure is logged, never surfaced.
        let repo = self.repo.clone();
        let account_id = account.account_id;
        tokio::spawn(async move {
            if let Err(e) = repo.record_login(&account_id).await {
                tracing::warn!(error = %e, account_id = %account_id, "Failed to record last login");
            }
        });

        let claims = SessionClaims::for_account(&account, self.config.session_ttl);
        let token = token::issue(&claims, &self.config.token_secret)?;

        tracing::info!(
            account_id = %account.account_id,
            email = %account.email,
            "Admin signed in"
        );

        let mut account = account;
        account.record_login();

        Ok(SignInOutput { token, account })
    }
}
