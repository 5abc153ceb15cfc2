//! In-memory repository for use-case tests

use std::sync::{Arc, Mutex};

use platform::password::HashedPassword;
use shared::id::AccountId;

use crate::domain::entity::admin_account::AdminAccount;
use crate::domain::repository::AdminAccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

#[derive(Clone, Default)]
pub struct InMemoryAdminRepository {
    accounts: Arc<Mutex<Vec<(AdminAccount, HashedPassword)>>>,
}

impl InMemoryAdminRepository {
    pub fn insert(&self, account: AdminAccount, hash: HashedPassword) {
        self.accounts.lock().unwrap().push((account, hash));
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

impl AdminAccountRepository for InMemoryAdminRepository {
    async fn create(&self, account: &AdminAccount, hash: &HashedPassword) -> AuthResult<()> {
        self.insert(account.clone(), hash.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<AdminAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|(a, _)| &a.email == email)
            .map(|(a, _)| a.clone()))
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<AdminAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|(a, _)| &a.account_id == account_id)
            .map(|(a, _)| a.clone()))
    }

    async fn credential_by_id(&self, account_id: &AccountId) -> AuthResult<Option<HashedPassword>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|(a, _)| &a.account_id == account_id)
            .map(|(_, h)| h.clone()))
    }

    async fn record_login(&self, account_id: &AccountId) -> AuthResult<()> {
        if let Some((account, _)) = self
            .accounts
            .lock()
            .unwrap()
            .iter_mut()
            .find(|(a, _)| &a.account_id == account_id)
        {
            account.record_login();
        }
        Ok(())
    }

    async fn count(&self) -> AuthResult<i64> {
        Ok(self.len() as i64)
    }
}
