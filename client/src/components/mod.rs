//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and event surfaces while reading/writing
//! shared state from Leptos context providers. Pure presentation logic
//! (labels, action selection, patch diffing) lives in plain functions so
//! it unit-tests without a DOM.

pub mod event_card;
pub mod event_form;
pub mod sidebar;
