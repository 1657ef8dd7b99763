//! REST API client for the same-origin proxy server.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`, with the session
//! cookie attached automatically by the browser on same-origin requests.
//! Native builds: inert stubs, so the state stores compile and unit-test
//! without a network.
//!
//! DESIGN
//! ======
//! The stores receive `AuthApi`/`EventsApi` implementations by constructor
//! injection rather than calling free functions, so tests can substitute
//! mocks and count calls. `HttpApi` is the one production implementation of
//! both traits. Errors are `String` messages: backend rejection bodies are
//! surfaced when present, transport failures become their display text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Event, EventDraft, EventPatch, MyEvents, SafeLocation, User};

#[cfg(any(test, feature = "csr"))]
fn event_endpoint(id: i64) -> String {
    format!("/api/events/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn join_endpoint(id: i64) -> String {
    format!("/api/events/{id}/join")
}

#[cfg(any(test, feature = "csr"))]
fn leave_endpoint(id: i64) -> String {
    format!("/api/events/{id}/leave")
}

/// Build a user-facing failure message from a non-OK response.
/// Prefers the backend's own `error`/`message` field over a bare status.
#[cfg(any(test, feature = "csr"))]
fn rejection_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_owned();
            }
        }
    }
    format!("request failed: {status}")
}

/// Authentication operations against the proxy.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a session cookie.
    async fn login(&self, email: &str, password: &str) -> Result<(), String>;
    /// Create an account. Does not authenticate.
    async fn register(&self, email: &str, username: &str, password: &str) -> Result<(), String>;
    /// Fetch the current user's profile; `None` when unauthenticated or offline.
    async fn fetch_profile(&self) -> Option<User>;
    /// Update the profile location; returns the server-confirmed value.
    async fn update_location(&self, location: &str) -> Result<String, String>;
    /// Invalidate the server session.
    async fn logout(&self) -> Result<(), String>;
}

/// Event collection operations against the proxy.
#[async_trait(?Send)]
pub trait EventsApi {
    async fn list_events(&self) -> Result<Vec<Event>, String>;
    async fn list_mine(&self) -> Result<MyEvents, String>;
    async fn safe_locations(&self) -> Result<Vec<SafeLocation>, String>;
    async fn create_event(&self, draft: &EventDraft) -> Result<(), String>;
    async fn edit_event(&self, id: i64, patch: &EventPatch) -> Result<(), String>;
    async fn delete_event(&self, id: i64) -> Result<(), String>;
    async fn join_event(&self, id: i64) -> Result<(), String>;
    async fn leave_event(&self, id: i64) -> Result<(), String>;
}

/// Production API client over the browser fetch stack.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(feature = "csr")]
async fn expect_ok(response: gloo_net::http::Response) -> Result<(), String> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(rejection_message(status, &body))
}

#[cfg(feature = "csr")]
async fn post_empty(url: &str) -> Result<(), String> {
    let response = gloo_net::http::Request::post(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    expect_ok(response).await
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let response = gloo_net::http::Request::post("/api/auth/login")
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            expect_ok(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err("not available off-browser".to_owned())
        }
    }

    async fn register(&self, email: &str, username: &str, password: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let payload = serde_json::json!({ "email": email, "username": username, "password": password });
            let response = gloo_net::http::Request::post("/api/auth/register")
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            expect_ok(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, username, password);
            Err("not available off-browser".to_owned())
        }
    }

    async fn fetch_profile(&self) -> Option<User> {
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
            if !response.ok() {
                return None;
            }
            response.json::<User>().await.ok()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    async fn update_location(&self, location: &str) -> Result<String, String> {
        #[cfg(feature = "csr")]
        {
            #[derive(serde::Deserialize)]
            struct LocationResponse {
                location: String,
            }

            let payload = serde_json::json!({ "location": location });
            let response = gloo_net::http::Request::put("/api/auth/location")
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !response.ok() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(rejection_message(status, &body));
            }
            let body: LocationResponse = response.json().await.map_err(|e| e.to_string())?;
            Ok(body.location)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = location;
            Err("not available off-browser".to_owned())
        }
    }

    async fn logout(&self) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            post_empty("/api/auth/logout").await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err("not available off-browser".to_owned())
        }
    }
}

#[async_trait(?Send)]
impl EventsApi for HttpApi {
    async fn list_events(&self) -> Result<Vec<Event>, String> {
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::get("/api/events")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !response.ok() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(rejection_message(status, &body));
            }
            response.json::<Vec<Event>>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err("not available off-browser".to_owned())
        }
    }

    async fn list_mine(&self) -> Result<MyEvents, String> {
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::get("/api/events/mine")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !response.ok() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(rejection_message(status, &body));
            }
            response.json::<MyEvents>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err("not available off-browser".to_owned())
        }
    }

    async fn safe_locations(&self) -> Result<Vec<SafeLocation>, String> {
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::get("/api/events/safe")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !response.ok() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(rejection_message(status, &body));
            }
            let wrapper: super::types::SafeLocations = response.json().await.map_err(|e| e.to_string())?;
            Ok(wrapper.courts)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err("not available off-browser".to_owned())
        }
    }

    async fn create_event(&self, draft: &EventDraft) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::post("/api/events")
                .json(draft)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            expect_ok(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = draft;
            Err("not available off-browser".to_owned())
        }
    }

    async fn edit_event(&self, id: i64, patch: &EventPatch) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::put(&event_endpoint(id))
                .json(patch)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            expect_ok(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, patch);
            Err("not available off-browser".to_owned())
        }
    }

    async fn delete_event(&self, id: i64) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let response = gloo_net::http::Request::delete(&event_endpoint(id))
                .send()
                .await
                .map_err(|e| e.to_string())?;
            expect_ok(response).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err("not available off-browser".to_owned())
        }
    }

    async fn join_event(&self, id: i64) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            post_empty(&join_endpoint(id)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err("not available off-browser".to_owned())
        }
    }

    async fn leave_event(&self, id: i64) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            post_empty(&leave_endpoint(id)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err("not available off-browser".to_owned())
        }
    }
}
