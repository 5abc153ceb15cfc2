//! PostgreSQL Repository Implementation
//!
//! The `password_hash` column is only ever read by `credential_by_id`; no
//! other query selects it, which keeps the hash out of account data by
//! construction.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use platform::password::HashedPassword;
use shared::id::AccountId;

use crate::domain::entity::admin_account::AdminAccount;
use crate::domain::repository::AdminAccountRepository;
use crate::domain::value_object::{admin_role::AdminRole, email::Email};
use crate::error::AuthResult;

/// PostgreSQL-backed admin account repository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ACCOUNT_COLUMNS: &str = r#"
    account_id,
    email,
    display_name,
    role,
    is_active,
    last_login_at,
    created_at,
    updated_at
"#;

impl AdminAccountRepository for PgAdminRepository {
    async fn create(&self, account: &AdminAccount, hash: &HashedPassword) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_accounts (
                account_id,
                email,
                display_name,
                role,
                is_active,
                password_hash,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(account.email.as_str())
        .bind(&account.display_name)
        .bind(account.role.id())
        .bind(account.is_active)
        .bind(hash.as_str())
        .bind(account.last_login_at)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<AdminAccount>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM admin_accounts WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<AdminAccount>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM admin_accounts WHERE account_id = $1"
        ))
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AccountRow::into_account))
    }

    async fn credential_by_id(&self, account_id: &AccountId) -> AuthResult<Option<HashedPassword>> {
        let hash: Option<(String,)> =
            sqlx::query_as("SELECT password_hash FROM admin_accounts WHERE account_id = $1")
                .bind(account_id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        Ok(hash.map(|(phc,)| HashedPassword::from_phc(phc)))
    }

    async fn record_login(&self, account_id: &AccountId) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE admin_accounts
            SET last_login_at = NOW(), updated_at = NOW()
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn count(&self) -> AuthResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin_accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    email: String,
    display_name: String,
    role: i16,
    is_active: bool,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AdminAccount {
        AdminAccount {
            account_id: AccountId::from_uuid(self.account_id),
            email: Email::from_db(self.email),
            display_name: self.display_name,
            role: AdminRole::from_id(self.role),
            is_active: self.is_active,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
