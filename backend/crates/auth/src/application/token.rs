//! Session Token Issue / Verify
//!
//! Stateless signed session token (HS256 JWT). Validity is entirely
//! signature + expiry: the server keeps no session table, so `verify` is the
//! single source of truth the cookie transport and the authorization gate
//! both rely on.
//!
//! `verify` never returns an error - expired, malformed and tampered tokens
//! all collapse to `None`, so no caller can leak the rejection reason.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::entity::admin_account::AdminAccount;
use crate::error::{AuthError, AuthResult};

/// Identity claims carried by the session token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account UUID
    pub sub: String,
    /// Normalized email
    pub email: String,
    /// Role code ("super_admin", "editor")
    pub role: String,
    /// Display name
    pub name: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for a verified account, expiring `ttl` from now.
    pub fn for_account(account: &AdminAccount, ttl: Duration) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: account.account_id.to_string(),
            email: account.email.as_str().to_string(),
            role: account.role.code().to_string(),
            name: account.display_name.clone(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        }
    }
}

/// Sign claims into a token string.
pub fn issue(claims: &SessionClaims, secret: &[u8]) -> AuthResult<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))
}

/// Verify a token string and decode its claims.
///
/// Returns `None` on any failure. Side-effect free; safe to call on every
/// request.
pub fn verify(token: &str, secret: &[u8]) -> Option<SessionClaims> {
    let validation = Validation::default();

    decode::<SessionClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{admin_role::AdminRole, email::Email};

    const SECRET: &[u8] = b"test-secret-test-secret-test-sec";

    fn account() -> AdminAccount {
        AdminAccount::new(
            Email::new("admin@example.com").unwrap(),
            "Site Admin",
            AdminRole::SuperAdmin,
        )
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let account = account();
        let claims = SessionClaims::for_account(&account, Duration::from_secs(7 * 24 * 3600));
        let token = issue(&claims, SECRET).unwrap();

        let decoded = verify(&token, SECRET).expect("fresh token must verify");
        assert_eq!(decoded.sub, account.account_id.to_string());
        assert_eq!(decoded.email, "admin@example.com");
        assert_eq!(decoded.role, "super_admin");
        assert_eq!(decoded.name, "Site Admin");
        assert_eq!(decoded.exp - decoded.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_tampered_token_is_none() {
        let claims = SessionClaims::for_account(&account(), Duration::from_secs(3600));
        let token = issue(&claims, SECRET).unwrap();

        // Flip a character in the payload segment
        let mut tampered = token.clone();
        let mid = token.len() / 2;
        let replacement = if tampered.as_bytes()[mid] == b'A' { "B" } else { "A" };
        tampered.replace_range(mid..mid + 1, replacement);

        assert_eq!(verify(&tampered, SECRET), None);
    }

    #[test]
    fn test_wrong_secret_is_none() {
        let claims = SessionClaims::for_account(&account(), Duration::from_secs(3600));
        let token = issue(&claims, SECRET).unwrap();

        assert_eq!(verify(&token, b"a completely different secret!!!"), None);
    }

    #[test]
    fn test_expired_token_is_none() {
        let mut claims = SessionClaims::for_account(&account(), Duration::from_secs(3600));
        // Well past the default clock-skew leeway
        claims.iat = Utc::now().timestamp() - 7200;
        claims.exp = Utc::now().timestamp() - 3600;

        let token = issue(&claims, SECRET).unwrap();
        assert_eq!(verify(&token, SECRET), None);
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(verify("", SECRET), None);
        assert_eq!(verify("not.a.jwt", SECRET), None);
        assert_eq!(verify("a.b", SECRET), None);
    }
}
