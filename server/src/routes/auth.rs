//! Auth proxy routes — registration, login, logout, profile, session checks.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use reqwest::Method;

use crate::services::proxy;
use crate::state::AppState;

/// `POST /api/auth/register` — forward registration; relay any session cookie.
pub async fn register(State(state): State<AppState>, Json(body): Json<serde_json::Value>) -> Response {
    proxy::forward(&state, Method::POST, "/auth/register", None, Some(body), true).await
}

/// `POST /api/auth/login` — forward the credential exchange; relay the
/// backend's `Set-Cookie` so the browser holds the new session.
pub async fn login(State(state): State<AppState>, Json(body): Json<serde_json::Value>) -> Response {
    proxy::forward(&state, Method::POST, "/auth/login", None, Some(body), true).await
}

/// `POST /api/auth/logout` — forward when possible, but always attach an
/// expired session cookie so the browser drops its credential even if the
/// backend is unreachable.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = proxy::session_cookie(&headers);
    let mut response = match proxy::send(&state, Method::POST, "/auth/logout", cookie, None).await {
        Ok(upstream) => proxy::relay(upstream, false).await,
        Err(err) => {
            tracing::warn!(error = %err, "backend unreachable during logout; expiring cookie anyway");
            proxy::json_response(StatusCode::OK, serde_json::json!({ "status": "logged out" }))
        }
    };
    proxy::clear_session(&mut response);
    response
}

/// `GET /api/auth/me` — current user profile.
pub async fn user_info(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    proxy::forward(&state, Method::GET, "/auth/get_user_info", Some(cookie), None, false).await
}

/// `GET /api/auth/verify` — session validity check.
pub async fn verify(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    proxy::forward(&state, Method::GET, "/auth/verify", Some(cookie), None, false).await
}

/// `PUT /api/auth/location` — update the profile's free-text location.
pub async fn update_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    proxy::forward(&state, Method::PUT, "/auth/update_location", Some(cookie), Some(body), false).await
}
