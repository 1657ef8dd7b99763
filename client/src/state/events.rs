//! Event collection state.
//!
//! DESIGN
//! ======
//! The store never edits collections in place after a mutation. Every
//! successful create/join/leave/edit/delete refetches BOTH the public
//! event list and the "mine" partition, because a single mutation can
//! move events between partitions and shift server-computed annotations
//! (`current_registered`, `is_attending`). Server truth wins over any
//! local prediction.
//!
//! Concurrent operations resolve last-writer-wins at the page's signal:
//! each page operation snapshots state in, runs, and writes state out, so
//! whichever operation resolves last determines the rendered collections.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch leaves the previous collections untouched and records
//! the message in `last_error`; `last_error` is cleared when the next
//! operation begins. `loading` is a single shared flag, always cleared
//! before an operation returns.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;

use crate::net::api::EventsApi;
use crate::net::types::{Event, EventDraft, EventPatch, MyEvents, SafeLocation};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventsState {
    /// All upcoming events, annotated for the current session.
    pub events: Vec<Event>,
    /// The current user's created/participating partitions.
    pub mine: MyEvents,
    /// Advisory location suggestions; loaded on demand, never persisted.
    pub safe_locations: Vec<SafeLocation>,
    pub loading: bool,
    pub last_error: Option<String>,
}

/// Orchestrates event operations against an injected API client.
pub struct EventStore<A: EventsApi> {
    api: A,
    state: RefCell<EventsState>,
}

impl<A: EventsApi> EventStore<A> {
    pub fn new(api: A) -> Self {
        Self::with_state(api, EventsState::default())
    }

    pub fn with_state(api: A, state: EventsState) -> Self {
        Self { api, state: RefCell::new(state) }
    }

    pub fn into_state(self) -> EventsState {
        self.state.into_inner()
    }

    /// Reload both collections from the server.
    pub async fn refresh(&self) {
        self.begin();
        self.refetch_collections().await;
        self.state.borrow_mut().loading = false;
    }

    /// Reload only the flat event list.
    pub async fn fetch_events(&self) {
        self.begin();
        let fetched = self.api.list_events().await;
        let mut state = self.state.borrow_mut();
        match fetched {
            Ok(list) => state.events = list,
            Err(message) => state.last_error = Some(message),
        }
        state.loading = false;
    }

    /// Reload only the created/participating partitions.
    pub async fn fetch_mine(&self) {
        self.begin();
        let fetched = self.api.list_mine().await;
        let mut state = self.state.borrow_mut();
        match fetched {
            Ok(partitions) => state.mine = partitions,
            Err(message) => state.last_error = Some(message),
        }
        state.loading = false;
    }

    /// Load the advisory safe-location list.
    pub async fn fetch_safe_locations(&self) {
        self.begin();
        let fetched = self.api.safe_locations().await;
        let mut state = self.state.borrow_mut();
        match fetched {
            Ok(courts) => state.safe_locations = courts,
            Err(message) => state.last_error = Some(message),
        }
        state.loading = false;
    }

    pub async fn create_event(&self, draft: &EventDraft) -> Result<(), String> {
        self.begin();
        let result = self.api.create_event(draft).await;
        self.finish_mutation(result).await
    }

    pub async fn edit_event(&self, id: i64, patch: &EventPatch) -> Result<(), String> {
        self.begin();
        let result = self.api.edit_event(id, patch).await;
        self.finish_mutation(result).await
    }

    pub async fn delete_event(&self, id: i64) -> Result<(), String> {
        self.begin();
        let result = self.api.delete_event(id).await;
        self.finish_mutation(result).await
    }

    pub async fn join_event(&self, id: i64) -> Result<(), String> {
        self.begin();
        let result = self.api.join_event(id).await;
        self.finish_mutation(result).await
    }

    pub async fn leave_event(&self, id: i64) -> Result<(), String> {
        self.begin();
        let result = self.api.leave_event(id).await;
        self.finish_mutation(result).await
    }

    fn begin(&self) {
        let mut state = self.state.borrow_mut();
        state.loading = true;
        state.last_error = None;
    }

    async fn finish_mutation(&self, result: Result<(), String>) -> Result<(), String> {
        match result {
            Ok(()) => {
                self.refetch_collections().await;
                self.state.borrow_mut().loading = false;
                Ok(())
            }
            Err(message) => {
                let mut state = self.state.borrow_mut();
                state.last_error = Some(message.clone());
                state.loading = false;
                Err(message)
            }
        }
    }

    // Fetch failures keep the previous collection; partial success is fine.
    async fn refetch_collections(&self) {
        let events = self.api.list_events().await;
        let mine = self.api.list_mine().await;
        let mut state = self.state.borrow_mut();
        match events {
            Ok(list) => state.events = list,
            Err(message) => state.last_error = Some(message),
        }
        match mine {
            Ok(partitions) => state.mine = partitions,
            Err(message) => state.last_error = Some(message),
        }
    }
}
