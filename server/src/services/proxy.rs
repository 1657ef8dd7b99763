//! Store-and-forward proxy core.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/api` route is a thin wrapper around this module: attach the
//! browser's cookie header, call the backend, and relay the backend's status,
//! JSON body, and (where session state changes) `Set-Cookie` header back
//! unchanged. No retry, no caching, no state between invocations.
//!
//! ERROR HANDLING
//! ==============
//! A cookie-required route with no cookie header short-circuits with 400
//! before the backend is contacted. Any transport failure reaching the
//! backend becomes a generic 500; upstream error detail is not recovered.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, SameSite};
use reqwest::Method;
use thiserror::Error;
use time::Duration;

use crate::state::AppState;

/// Name of the backend-issued session cookie. The value is opaque to the
/// proxy; only logout ever constructs a cookie with this name.
pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("missing session cookie")]
    MissingCookie,
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCookie => json_response(
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "missing session cookie" }),
            ),
            Self::Upstream(_) => json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "backend unreachable" }),
            ),
        }
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Whether cookies set by this proxy carry the `Secure` attribute.
/// Defaults to false for plain-HTTP local deployments.
pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

/// Extract the raw cookie header, treating an empty header as absent.
pub fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

/// Require a cookie header for an identity-bearing route.
///
/// # Errors
///
/// Returns `ProxyError::MissingCookie` (rendered as a 400) when the request
/// carries no cookie header; the backend is never contacted in that case.
pub fn require_session(headers: &HeaderMap) -> Result<&str, ProxyError> {
    session_cookie(headers).ok_or(ProxyError::MissingCookie)
}

pub(crate) fn backend_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Issue the upstream request. The cookie header is forwarded verbatim;
/// bodies are re-serialized JSON values, keeping the proxy schema-agnostic.
pub(crate) async fn send(
    state: &AppState,
    method: Method,
    path: &str,
    cookie: Option<&str>,
    body: Option<&serde_json::Value>,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut request = state
        .http
        .request(method, backend_url(&state.backend, path))
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    if let Some(body) = body {
        request = request.json(body);
    }
    request.send().await
}

/// Mirror the upstream response: status and body pass through unmodified,
/// content type pinned to JSON, `Set-Cookie` copied only when requested.
pub(crate) async fn relay(upstream: reqwest::Response, relay_set_cookie: bool) -> Response {
    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let set_cookies: Vec<HeaderValue> = if relay_set_cookie {
        upstream.headers().get_all(header::SET_COOKIE).iter().cloned().collect()
    } else {
        Vec::new()
    };

    let body = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, "backend response body read failed");
            return ProxyError::Upstream(err).into_response();
        }
    };

    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json");
    for value in set_cookies {
        builder = builder.header(header::SET_COOKIE, value);
    }
    builder.body(Body::from(body)).map_or_else(
        |_| {
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "proxy response build failed" }),
            )
        },
        |response| response,
    )
}

/// Forward a browser request to the backend and relay the outcome.
/// Transport failures are logged and collapsed into a generic 500.
pub async fn forward(
    state: &AppState,
    method: Method,
    path: &str,
    cookie: Option<&str>,
    body: Option<serde_json::Value>,
    relay_set_cookie: bool,
) -> Response {
    match send(state, method, path, cookie, body.as_ref()).await {
        Ok(upstream) => relay(upstream, relay_set_cookie).await,
        Err(err) => {
            tracing::error!(error = %err, path, "backend request failed");
            ProxyError::Upstream(err).into_response()
        }
    }
}

/// An already-expired session cookie. Attached to every logout response so
/// the browser drops its credential regardless of backend outcome.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

/// Replace any relayed `Set-Cookie` with the expired session cookie.
pub fn clear_session(response: &mut Response) {
    if let Ok(value) = HeaderValue::from_str(&expired_session_cookie().to_string()) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
}

pub(crate) fn json_response(status: StatusCode, body: serde_json::Value) -> Response {
    (status, Json(body)).into_response()
}
