//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Pages run store operations by snapshotting
//! the shared signal into a store, awaiting the operation, and writing
//! the resulting snapshot back. Concurrent operations therefore resolve
//! last-writer-wins at the signal.

pub mod account;
pub mod create_event;
pub mod events;
pub mod login;
pub mod my_events;
pub mod register;
