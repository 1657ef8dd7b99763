//! Event proxy routes — listing, CRUD, join/leave, safe-location suggestions.
//!
//! Every handler requires the browser's session cookie; the backend decides
//! whether the session is valid and whether the user may perform the action.

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use reqwest::Method;

use crate::services::proxy;
use crate::state::AppState;

/// `GET /api/events` — the flat all-events list.
pub async fn list_all(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    proxy::forward(&state, Method::GET, "/events/all", Some(cookie), None, false).await
}

/// `GET /api/events/mine` — the partitioned created/participating view.
pub async fn list_mine(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    proxy::forward(&state, Method::GET, "/events/me", Some(cookie), None, false).await
}

/// `GET /api/events/safe` — advisory safe-location suggestions.
pub async fn safe_locations(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    proxy::forward(&state, Method::GET, "/events/safe", Some(cookie), None, false).await
}

/// `POST /api/events` — create an event; the creator becomes an attendee.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    proxy::forward(&state, Method::POST, "/events/create_event", Some(cookie), Some(body), false).await
}

/// `PUT /api/events/{id}` — edit an event (creator only, enforced upstream).
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    let path = format!("/events/edit_event/{id}");
    proxy::forward(&state, Method::PUT, &path, Some(cookie), Some(body), false).await
}

/// `DELETE /api/events/{id}` — delete an event (creator only, enforced upstream).
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>, headers: HeaderMap) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    let path = format!("/events/delete_event/{id}");
    proxy::forward(&state, Method::DELETE, &path, Some(cookie), None, false).await
}

/// `POST /api/events/{id}/join` — join an event. The backend may refresh the
/// session here, so `Set-Cookie` is relayed.
pub async fn join(State(state): State<AppState>, Path(id): Path<i64>, headers: HeaderMap) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    let path = format!("/events/join_event/{id}");
    proxy::forward(&state, Method::POST, &path, Some(cookie), None, true).await
}

/// `POST /api/events/{id}/leave` — leave an event previously joined.
pub async fn leave(State(state): State<AppState>, Path(id): Path<i64>, headers: HeaderMap) -> Response {
    let cookie = match proxy::require_session(&headers) {
        Ok(cookie) => cookie,
        Err(err) => return err.into_response(),
    };
    let path = format!("/events/leave_event/{id}");
    proxy::forward(&state, Method::POST, &path, Some(cookie), None, false).await
}
