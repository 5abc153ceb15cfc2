//! Session Extractor
//!
//! `CurrentAdmin` is the API-side counterpart of the authorization gate:
//! JSON 401 instead of a redirect. Any handler (in this crate or another)
//! can require a session by taking it as an argument, as long as the router
//! state exposes `Arc<AuthConfig>` via `FromRef`.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use std::sync::Arc;

use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::token::{self, SessionClaims};
use crate::error::AuthError;

/// Verified session claims of the requesting admin
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub SessionClaims);

impl<S> FromRequestParts<S> for CurrentAdmin
where
    Arc<AuthConfig>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<AuthConfig>::from_ref(state);

        extract_cookie(&parts.headers, &config.cookie.name)
            .and_then(|token| token::verify(&token, &config.token_secret))
            .map(CurrentAdmin)
            .ok_or(AuthError::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::admin_account::AdminAccount;
    use crate::domain::value_object::{admin_role::AdminRole, email::Email};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn whoami(CurrentAdmin(claims): CurrentAdmin) -> String {
        claims.email
    }

    fn app(config: Arc<AuthConfig>) -> Router {
        Router::new().route("/whoami", get(whoami)).with_state(config)
    }

    #[tokio::test]
    async fn test_valid_cookie_yields_claims() {
        let config = Arc::new(AuthConfig::development());
        let account = AdminAccount::new(
            Email::new("admin@example.com").unwrap(),
            "Administrator",
            AdminRole::SuperAdmin,
        );
        let claims = SessionClaims::for_account(&account, config.session_ttl);
        let token = token::issue(&claims, &config.token_secret).unwrap();

        let res = app(config)
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, format!("admin_session={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_cookie_is_401() {
        let config = Arc::new(AuthConfig::development());
        let res = app(config)
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
