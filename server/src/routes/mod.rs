//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the `/api` proxy routes under a single Axum router and
//! serves the compiled client bundle as static files for every other path.
//! The proxy and the bundle share one origin so the browser's session cookie
//! flows on same-origin requests without CORS ceremony.

pub mod auth;
pub mod events;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Proxy API routes, one handler per (resource, verb) pair.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::user_info))
        .route("/api/auth/verify", get(auth::verify))
        .route("/api/auth/location", put(auth::update_location))
        .route("/api/events", get(events::list_all).post(events::create))
        .route("/api/events/mine", get(events::list_mine))
        .route("/api/events/safe", get(events::safe_locations))
        .route("/api/events/{id}", put(events::edit).delete(events::delete))
        .route("/api/events/{id}/join", post(events::join))
        .route("/api/events/{id}/leave", post(events::leave))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the directory holding the compiled client bundle.
fn site_dir() -> PathBuf {
    std::env::var("SITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application: proxy API plus static client assets.
pub fn app(state: AppState) -> Router {
    let site = ServeDir::new(site_dir()).append_index_html_on_directories(true);
    api_routes(state)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
