//! Account page: profile details and the home-location editor.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let location = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill the editor once the profile is available.
    let prefilled = RwSignal::new(false);
    Effect::new(move || {
        if prefilled.get_untracked() {
            return;
        }
        if let Some(user) = auth.get().user {
            prefilled.set(true);
            location.set(user.location.unwrap_or_default());
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let location_value = location.get().trim().to_owned();
        if location_value.is_empty() {
            info.set("Enter a location first.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = crate::state::auth::AuthStore::with_state(
                crate::net::api::HttpApi,
                auth.get_untracked(),
            );
            let result = store.update_location(&location_value).await;
            auth.set(store.into_state());
            match result {
                Ok(()) => info.set("Location saved.".to_owned()),
                Err(message) => info.set(message),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = location_value;
    };

    let username = move || auth.get().user.map(|user| user.username).unwrap_or_default();
    let email = move || auth.get().user.map(|user| user.email).unwrap_or_default();

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="page">
                <header class="page__header">
                    <h2>"Account"</h2>
                </header>
                <section class="page__section">
                    <dl class="profile">
                        <dt>"Username"</dt>
                        <dd>{username}</dd>
                        <dt>"Email"</dt>
                        <dd>{email}</dd>
                    </dl>
                </section>
                <section class="page__section">
                    <h3>"Home Location"</h3>
                    <form class="profile-form" on:submit=on_save>
                        <input
                            type="text"
                            placeholder="Philadelphia, PA"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=move || busy.get()>"Save"</button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="auth-message">{move || info.get()}</p>
                    </Show>
                </section>
            </main>
        </div>
    }
}
