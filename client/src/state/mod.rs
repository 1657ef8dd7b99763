//! Client-side state stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two stores own all remote state: `auth` for the session and profile,
//! `events` for the event collections. Pages hold the current snapshot in
//! an `RwSignal`, hand it to a store together with an API client, run one
//! async operation, and write the resulting snapshot back. The stores
//! themselves are plain structs with `RefCell` interiors so they unit-test
//! natively without a reactive runtime.

pub mod auth;
pub mod events;
pub mod ui;

use leptos::prelude::*;

/// Install the shared state signals in the reactive context tree.
/// Called once from the app shell; pages read them with `expect_context`.
pub fn provide_stores() {
    provide_context(RwSignal::new(auth::AuthState::default()));
    provide_context(RwSignal::new(events::EventsState::default()));
    provide_context(RwSignal::new(ui::UiState::default()));
}
