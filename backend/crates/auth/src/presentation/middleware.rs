//! Authorization Gate
//!
//! Runs in front of every request and classifies the path before any
//! handler: protected dashboard paths bounce anonymous visitors to the
//! login page (carrying the original path in a `redirect` parameter), the
//! login page bounces already-authenticated visitors to the dashboard, and
//! the bare admin root always redirects one way or the other.
//!
//! Token validity is exactly [`token::verify`]: stateless, and the redirect
//! never encodes why a token was rejected.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::token;

/// Route classification under the admin prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Dashboard subtree: session required
    Protected,
    /// Login page: session must NOT be present
    AuthOnly,
    /// Bare admin prefix: always redirected, never rendered
    AdminRoot,
    /// Everything else passes through unconditionally
    Open,
}

/// Classify a request path.
pub fn classify(path: &str, config: &AuthConfig) -> RouteClass {
    let prefix = config.admin_prefix.as_str();

    if path == prefix || path == format!("{prefix}/") {
        return RouteClass::AdminRoot;
    }

    let login = config.login_path.as_str();
    if path == login || path == format!("{login}/") {
        return RouteClass::AuthOnly;
    }

    if path.starts_with(&format!("{prefix}/")) {
        return RouteClass::Protected;
    }

    RouteClass::Open
}

/// Authorization gate middleware.
///
/// Layered over the whole app; synchronous token check, no store access.
pub async fn admin_gate(
    State(config): State<Arc<AuthConfig>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    let class = classify(&path, &config);
    if class == RouteClass::Open {
        return next.run(req).await;
    }

    let authenticated = extract_cookie(req.headers(), &config.cookie.name)
        .and_then(|t| token::verify(&t, &config.token_secret))
        .is_some();

    match class {
        RouteClass::Protected => {
            if authenticated {
                next.run(req).await
            } else {
                Redirect::to(&format!(
                    "{}?redirect={}",
                    config.login_path,
                    encode_redirect(&path)
                ))
                .into_response()
            }
        }
        RouteClass::AuthOnly => {
            if authenticated {
                Redirect::to(&config.dashboard_path).into_response()
            } else {
                next.run(req).await
            }
        }
        RouteClass::AdminRoot => {
            if authenticated {
                Redirect::to(&config.dashboard_path).into_response()
            } else {
                Redirect::to(&config.login_path).into_response()
            }
        }
        RouteClass::Open => unreachable!("handled above"),
    }
}

/// Percent-encode a path for use as a query-parameter value.
fn encode_redirect(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for byte in path.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
