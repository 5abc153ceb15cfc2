//! Admin Account Entity
//!
//! One record per dashboard administrator. The password hash is NOT part of
//! this entity: it lives behind the repository's credential lookup and never
//! travels with account data.

use chrono::{DateTime, Utc};
use shared::id::AccountId;

use crate::domain::value_object::{admin_role::AdminRole, email::Email};

/// Admin account entity
#[derive(Debug, Clone)]
pub struct AdminAccount {
    /// Internal UUID identifier
    pub account_id: AccountId,
    /// Normalized (lowercased) email, the natural lookup key
    pub email: Email,
    /// Display name shown in the dashboard
    pub display_name: String,
    /// Role (informational; every valid session is fully privileged)
    pub role: AdminRole,
    /// Accounts are deactivated, never hard-deleted
    pub is_active: bool,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl AdminAccount {
    /// Create a new active account
    pub fn new(email: Email, display_name: impl Into<String>, role: AdminRole) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            email,
            display_name: display_name.into(),
            role,
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Whether login is allowed
    pub fn can_login(&self) -> bool {
        self.is_active
    }

    /// Deactivate the account (administrative action)
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_active() {
        let email = Email::new("admin@example.com").unwrap();
        let account = AdminAccount::new(email, "Administrator", AdminRole::SuperAdmin);

        assert!(account.is_active);
        assert!(account.can_login());
        assert!(account.last_login_at.is_none());
    }

    #[test]
    fn test_record_login_sets_timestamp() {
        let email = Email::new("admin@example.com").unwrap();
        let mut account = AdminAccount::new(email, "Administrator", AdminRole::SuperAdmin);

        account.record_login();
        assert!(account.last_login_at.is_some());
    }

    #[test]
    fn test_deactivated_account_cannot_login() {
        let email = Email::new("admin@example.com").unwrap();
        let mut account = AdminAccount::new(email, "Administrator", AdminRole::SuperAdmin);

        account.deactivate();
        assert!(!account.can_login());
    }
}
