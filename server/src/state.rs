//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The proxy is stateless between requests: the only shared pieces are the
//! upstream HTTP client (connection pooling) and the backend origin.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Backend origin used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5858";

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — `reqwest::Client` is internally Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin, normalized without a trailing slash.
    pub backend: String,
}

impl AppState {
    #[must_use]
    pub fn new(backend: impl Into<String>) -> Self {
        let backend = backend.into();
        let backend = backend.trim_end_matches('/').to_owned();
        Self { http: reqwest::Client::new(), backend }
    }
}
