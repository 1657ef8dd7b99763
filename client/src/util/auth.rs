//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior. The redirect fires only once the phase has resolved; while
//! the session check is still in flight the page renders nothing rather
//! than bouncing the user to the login screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthPhase, AuthState};

/// Redirect to `/login` whenever the session has resolved to anonymous.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if auth.get().phase == AuthPhase::Anonymous {
            navigate("/login", NavigateOptions::default());
        }
    });
}
