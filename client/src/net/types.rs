//! Wire DTOs for the client/proxy boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Fields the backend may
//! omit (`is_attending`, `current_registered`, `creator_username`) carry
//! serde defaults so older payload shapes still deserialize. The client
//! never computes these fields itself; they are server truth.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as returned by `/api/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier; matched against `Event::creator_id`.
    #[serde(default)]
    pub id: i64,
    /// Display name.
    pub username: String,
    /// Login email.
    pub email: String,
    /// Free-text home location, if the user has set one.
    #[serde(default)]
    pub location: Option<String>,
}

/// An event as annotated for the requesting user.
///
/// `Eq + Hash` so keyed list rendering can key on the whole value: any
/// server-side change to a rendered field must produce a fresh key, or
/// an edited row would keep its stale view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Backend-assigned unique identifier.
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
    /// Start timestamp, `YYYY-MM-DDTHH:MM:SS`.
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub creator_id: i64,
    /// Display name of the creator, when the backend includes it.
    #[serde(default)]
    pub creator_username: String,
    /// Maximum attendee count; `None` means unlimited.
    #[serde(default)]
    pub capacity: Option<i64>,
    /// Current attendee count, maintained by the backend.
    #[serde(default)]
    pub current_registered: i64,
    /// Whether the requesting user is attending. Relative to the session.
    #[serde(default)]
    pub is_attending: bool,
}

/// The partitioned "my events" view: created vs. merely attending.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MyEvents {
    #[serde(default)]
    pub created: Vec<Event>,
    #[serde(default)]
    pub participating: Vec<Event>,
}

/// Advisory address suggestion with a safety score. Never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SafeLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub safety_score: f64,
}

/// Wrapper shape of the safe-location suggestions endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SafeLocations {
    #[serde(default)]
    pub courts: Vec<SafeLocation>,
}

/// Payload for creating an event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    pub address: String,
    pub description: String,
    pub start_time: String,
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

/// Partial payload for editing an event; absent fields are left unchanged
/// by the backend and omitted from the serialized body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}
