//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::token::SessionClaims;
use crate::domain::entity::admin_account::AdminAccount;

// ============================================================================
// Login
// ============================================================================

/// Login request.
///
/// Fields are optional so missing input surfaces as a 400 with the field
/// name instead of a body-decode failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Account summary returned on login (never includes credential material)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub last_login_at_ms: Option<i64>,
}

impl From<&AdminAccount> for AccountSummary {
    fn from(account: &AdminAccount) -> Self {
        Self {
            id: account.account_id.to_string(),
            email: account.email.as_str().to_string(),
            name: account.display_name.clone(),
            role: account.role.code().to_string(),
            last_login_at_ms: account.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub account: AccountSummary,
}

// ============================================================================
// Session status
// ============================================================================

/// Decoded claims of the current session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub account_id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<SessionClaims> for SessionResponse {
    fn from(claims: SessionClaims) -> Self {
        Self {
            account_id: claims.sub,
            email: claims.email,
            name: claims.name,
            role: claims.role,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

// ============================================================================
// Logout / Bootstrap
// ============================================================================

/// Logout response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub signed_out: bool,
}

/// Bootstrap response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapResponse {
    pub created: bool,
    pub email: String,
    pub message: &'static str,
}
