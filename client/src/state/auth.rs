//! Session and profile state.
//!
//! DESIGN
//! ======
//! The session itself lives in an HTTP-only cookie the client cannot read,
//! so the store tracks a *belief* about the session as an `AuthPhase`. The
//! belief starts at `Unknown` and is resolved by a profile fetch: the
//! profile endpoint is the single source of truth for "am I logged in".
//!
//! Login is a two-step operation: credential exchange, then a mandatory
//! profile fetch. A failure at either step lands the store in `Anonymous`
//! with no user attached. There is no state where a phase is
//! `Authenticated` but `user` is `None`.
//!
//! ERROR HANDLING
//! ==============
//! Operations return `Result<(), String>` for form-level display; the
//! store never keeps a stale error around between operations.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use crate::net::api::AuthApi;
use crate::net::types::User;

/// The store's current belief about the session cookie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Nothing checked yet; render neither the app nor the login page.
    #[default]
    Unknown,
    /// A profile fetch is in flight.
    Checking,
    /// Profile fetch succeeded; `user` is populated.
    Authenticated,
    /// No valid session.
    Anonymous,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }
}

/// Orchestrates auth operations against an injected API client.
pub struct AuthStore<A: AuthApi> {
    api: A,
    state: RefCell<AuthState>,
}

impl<A: AuthApi> AuthStore<A> {
    pub fn new(api: A) -> Self {
        Self::with_state(api, AuthState::default())
    }

    pub fn with_state(api: A, state: AuthState) -> Self {
        Self { api, state: RefCell::new(state) }
    }

    pub fn into_state(self) -> AuthState {
        self.state.into_inner()
    }

    /// Resolve `Unknown` into `Authenticated` or `Anonymous` by asking the
    /// proxy for the current profile. Safe to call again after the phase
    /// has resolved.
    pub async fn verify(&self) {
        self.state.borrow_mut().phase = AuthPhase::Checking;
        let profile = self.api.fetch_profile().await;
        let mut state = self.state.borrow_mut();
        match profile {
            Some(user) => {
                state.user = Some(user);
                state.phase = AuthPhase::Authenticated;
            }
            None => {
                state.user = None;
                state.phase = AuthPhase::Anonymous;
            }
        }
    }

    /// Exchange credentials, then load the profile. Both steps must
    /// succeed before the store reports `Authenticated`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        self.state.borrow_mut().phase = AuthPhase::Checking;
        if let Err(message) = self.api.login(email, password).await {
            let mut state = self.state.borrow_mut();
            state.user = None;
            state.phase = AuthPhase::Anonymous;
            return Err(message);
        }
        let profile = self.api.fetch_profile().await;
        let mut state = self.state.borrow_mut();
        match profile {
            Some(user) => {
                state.user = Some(user);
                state.phase = AuthPhase::Authenticated;
                Ok(())
            }
            None => {
                state.user = None;
                state.phase = AuthPhase::Anonymous;
                Err("signed in, but loading your profile failed".to_owned())
            }
        }
    }

    /// Create an account. Does not log in and does not touch the phase;
    /// callers route to the login page on success.
    pub async fn register(&self, email: &str, username: &str, password: &str) -> Result<(), String> {
        self.api.register(email, username, password).await
    }

    /// Update the profile location, merging only the server-confirmed
    /// value into the existing profile. Requires an authenticated session.
    pub async fn update_location(&self, location: &str) -> Result<(), String> {
        if !self.state.borrow().is_authenticated() {
            return Err("not signed in".to_owned());
        }
        let confirmed = self.api.update_location(location).await?;
        if let Some(user) = self.state.borrow_mut().user.as_mut() {
            user.location = Some(confirmed);
        }
        Ok(())
    }

    /// Drop the session. The store goes `Anonymous` whether or not the
    /// server acknowledged; the proxy expires the cookie regardless.
    pub async fn logout(&self) {
        let _ = self.api.logout().await;
        let mut state = self.state.borrow_mut();
        state.user = None;
        state.phase = AuthPhase::Anonymous;
    }
}
