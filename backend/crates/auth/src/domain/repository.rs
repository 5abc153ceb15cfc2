//! Repository Trait
//!
//! Persistence interface for admin accounts. Implementation lives in the
//! infrastructure layer. The password hash is only reachable through
//! [`AdminAccountRepository::credential_by_id`]; no query returns it
//! together with account data.

use platform::password::HashedPassword;
use shared::id::AccountId;

use crate::domain::entity::admin_account::AdminAccount;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Admin account repository trait
#[trait_variant::make(AdminAccountRepository: Send)]
pub trait LocalAdminAccountRepository {
    /// Create a new account with its credential
    async fn create(&self, account: &AdminAccount, hash: &HashedPassword) -> AuthResult<()>;

    /// Find an account by normalized email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<AdminAccount>>;

    /// Find an account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<AdminAccount>>;

    /// Fetch the stored password hash for verification
    async fn credential_by_id(&self, account_id: &AccountId) -> AuthResult<Option<HashedPassword>>;

    /// Update the last-login timestamp (best-effort side effect of login)
    async fn record_login(&self, account_id: &AccountId) -> AuthResult<()>;

    /// Number of existing accounts (bootstrap idempotence check)
    async fn count(&self) -> AuthResult<i64>;
}
