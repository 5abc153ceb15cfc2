//! Bootstrap Admin Use Case
//!
//! Creates the first admin account from configured credentials, once.
//! Subsequent calls are no-ops that report "already exists", so the init
//! endpoint is safe to hit repeatedly during deployment.

use std::sync::Arc;

use platform::password::{HashedPassword, RawPassword};

use crate::application::config::AuthConfig;
use crate::domain::entity::admin_account::AdminAccount;
use crate::domain::repository::AdminAccountRepository;
use crate::domain::value_object::{admin_role::AdminRole, email::Email};
use crate::error::{AuthError, AuthResult};

/// Bootstrap output
#[derive(Debug)]
pub struct BootstrapOutput {
    /// False when an account already existed
    pub created: bool,
    pub email: String,
}

/// Bootstrap use case
pub struct BootstrapUseCase<R>
where
    R: AdminAccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> BootstrapUseCase<R>
where
    R: AdminAccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> AuthResult<BootstrapOutput> {
        let (Some(email), Some(password)) = (
            self.config.bootstrap_email.clone(),
            self.config.bootstrap_password.clone(),
        ) else {
            return Err(AuthError::BootstrapNotConfigured);
        };

        let email = Email::new(email).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.repo.count().await? > 0 {
            return Ok(BootstrapOutput {
                created: false,
                email: email.into_db(),
            });
        }

        let raw =
            RawPassword::new(password).map_err(|e| AuthError::Validation(e.to_string()))?;
        let hash = HashedPassword::from_raw(&raw)?;

        let account = AdminAccount::new(email.clone(), "Administrator", AdminRole::SuperAdmin);
        self.repo.create(&account, &hash).await?;

        tracing::info!(
            account_id = %account.account_id,
            email = %account.email,
            "Bootstrap admin account created"
        );

        Ok(BootstrapOutput {
            created: true,
            email: email.into_db(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryAdminRepository;

    fn config_with_bootstrap() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::development().with_bootstrap(
            Some("Admin@Example.com".to_string()),
            Some("correct horse battery staple".to_string()),
        ))
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let repo = Arc::new(InMemoryAdminRepository::default());
        let use_case = BootstrapUseCase::new(repo.clone(), config_with_bootstrap());

        let first = use_case.execute().await.unwrap();
        assert!(first.created);
        assert_eq!(first.email, "admin@example.com"); // normalized
        assert_eq!(repo.len(), 1);

        let second = use_case.execute().await.unwrap();
        assert!(!second.created);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_unconfigured_fails() {
        let repo = Arc::new(InMemoryAdminRepository::default());
        let use_case = BootstrapUseCase::new(repo, Arc::new(AuthConfig::development()));

        let err = use_case.execute().await.unwrap_err();
        assert!(matches!(err, AuthError::BootstrapNotConfigured));
    }

    #[tokio::test]
    async fn test_bootstrapped_account_is_active_super_admin() {
        let repo = Arc::new(InMemoryAdminRepository::default());
        let use_case = BootstrapUseCase::new(repo.clone(), config_with_bootstrap());
        use_case.execute().await.unwrap();

        let account = repo
            .find_by_email(&Email::new("admin@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert!(account.is_active);
        assert_eq!(account.role, AdminRole::SuperAdmin);
    }
}
