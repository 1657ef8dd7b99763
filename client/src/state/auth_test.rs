use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;

use super::*;
use crate::net::api::AuthApi;
use crate::net::types::User;

struct MockAuth {
    login_result: Result<(), String>,
    register_result: Result<(), String>,
    profile: Option<User>,
    location_result: Result<String, String>,
    logout_result: Result<(), String>,
    login_calls: Cell<usize>,
    register_calls: Cell<usize>,
    profile_calls: Cell<usize>,
    location_calls: Cell<usize>,
    logout_calls: Cell<usize>,
}

impl Default for MockAuth {
    fn default() -> Self {
        Self {
            login_result: Ok(()),
            register_result: Ok(()),
            profile: None,
            location_result: Ok(String::new()),
            logout_result: Ok(()),
            login_calls: Cell::new(0),
            register_calls: Cell::new(0),
            profile_calls: Cell::new(0),
            location_calls: Cell::new(0),
            logout_calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for Rc<MockAuth> {
    async fn login(&self, _email: &str, _password: &str) -> Result<(), String> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login_result.clone()
    }

    async fn register(&self, _email: &str, _username: &str, _password: &str) -> Result<(), String> {
        self.register_calls.set(self.register_calls.get() + 1);
        self.register_result.clone()
    }

    async fn fetch_profile(&self) -> Option<User> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        self.profile.clone()
    }

    async fn update_location(&self, _location: &str) -> Result<String, String> {
        self.location_calls.set(self.location_calls.get() + 1);
        self.location_result.clone()
    }

    async fn logout(&self) -> Result<(), String> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout_result.clone()
    }
}

fn mara() -> User {
    User {
        id: 7,
        username: "mara".into(),
        email: "mara@example.com".into(),
        location: Some("Fishtown".into()),
    }
}

#[tokio::test]
async fn verify_resolves_to_authenticated_when_profile_loads() {
    let api = Rc::new(MockAuth { profile: Some(mara()), ..MockAuth::default() });
    let store = AuthStore::new(Rc::clone(&api));

    store.verify().await;

    let state = store.into_state();
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.user, Some(mara()));
    assert_eq!(api.profile_calls.get(), 1);
}

#[tokio::test]
async fn verify_resolves_to_anonymous_without_profile() {
    let api = Rc::new(MockAuth::default());
    let store = AuthStore::new(Rc::clone(&api));

    store.verify().await;

    let state = store.into_state();
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(state.user, None);
}

#[tokio::test]
async fn login_requires_the_profile_fetch_to_succeed() {
    // Credentials accepted but the follow-up profile fetch fails: the
    // store must not report a half-authenticated session.
    let api = Rc::new(MockAuth { profile: None, ..MockAuth::default() });
    let store = AuthStore::new(Rc::clone(&api));

    let result = store.login("mara@example.com", "hunter2").await;

    assert!(result.is_err());
    let state = store.into_state();
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(state.user, None);
    assert_eq!(api.login_calls.get(), 1);
    assert_eq!(api.profile_calls.get(), 1);
}

#[tokio::test]
async fn login_failure_skips_the_profile_fetch() {
    let api = Rc::new(MockAuth {
        login_result: Err("bad credentials".into()),
        profile: Some(mara()),
        ..MockAuth::default()
    });
    let store = AuthStore::new(Rc::clone(&api));

    let result = store.login("mara@example.com", "wrong").await;

    assert_eq!(result, Err("bad credentials".into()));
    let state = store.into_state();
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(api.profile_calls.get(), 0);
}

#[tokio::test]
async fn login_success_populates_the_profile() {
    let api = Rc::new(MockAuth { profile: Some(mara()), ..MockAuth::default() });
    let store = AuthStore::new(Rc::clone(&api));

    store.login("mara@example.com", "hunter2").await.unwrap();

    let state = store.into_state();
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.user.unwrap().username, "mara");
}

#[tokio::test]
async fn register_leaves_the_phase_untouched() {
    let api = Rc::new(MockAuth::default());
    let store = AuthStore::new(Rc::clone(&api));

    store.register("new@example.com", "newbie", "hunter2").await.unwrap();

    let state = store.into_state();
    assert_eq!(state.phase, AuthPhase::Unknown);
    assert_eq!(api.register_calls.get(), 1);
    assert_eq!(api.profile_calls.get(), 0);
}

#[tokio::test]
async fn update_location_merges_only_the_location_field() {
    let api = Rc::new(MockAuth {
        location_result: Ok("Philadelphia, PA".into()),
        ..MockAuth::default()
    });
    let state = AuthState { phase: AuthPhase::Authenticated, user: Some(mara()) };
    let store = AuthStore::with_state(Rc::clone(&api), state);

    store.update_location("Philadelphia, PA").await.unwrap();

    let user = store.into_state().user.unwrap();
    assert_eq!(user.location, Some("Philadelphia, PA".into()));
    assert_eq!(user.username, "mara");
    assert_eq!(user.email, "mara@example.com");
}

#[tokio::test]
async fn update_location_is_rejected_while_anonymous() {
    let api = Rc::new(MockAuth::default());
    let state = AuthState { phase: AuthPhase::Anonymous, user: None };
    let store = AuthStore::with_state(Rc::clone(&api), state);

    let result = store.update_location("anywhere").await;

    assert!(result.is_err());
    assert_eq!(api.location_calls.get(), 0);
}

#[tokio::test]
async fn logout_goes_anonymous_even_when_the_server_errors() {
    let api = Rc::new(MockAuth {
        logout_result: Err("backend unreachable".into()),
        ..MockAuth::default()
    });
    let state = AuthState { phase: AuthPhase::Authenticated, user: Some(mara()) };
    let store = AuthStore::with_state(Rc::clone(&api), state);

    store.logout().await;

    let state = store.into_state();
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert_eq!(state.user, None);
    assert_eq!(api.logout_calls.get(), 1);
}
