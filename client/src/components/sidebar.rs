//! Navigation sidebar with theme toggle and sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    };

    let on_toggle_nav = move |_| ui.update(|state| *state = state.toggled_nav());

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|state| *state = state.with_dark_mode(next));
    };

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = crate::state::auth::AuthStore::with_state(
                crate::net::api::HttpApi,
                auth.get_untracked(),
            );
            store.logout().await;
            auth.set(store.into_state());
        });
    };

    view! {
        <button class="sidebar__hamburger" on:click=on_toggle_nav>"☰"</button>
        <nav class=move || {
            if ui.get().nav_open { "sidebar sidebar--open" } else { "sidebar" }
        }>
            <h1 class="sidebar__brand">"PhillyFlow"</h1>
            <p class="sidebar__user">{username}</p>
            <a class="sidebar__link" href="/">"Events"</a>
            <a class="sidebar__link" href="/my-events">"My Events"</a>
            <a class="sidebar__link" href="/create">"Create Event"</a>
            <a class="sidebar__link" href="/account">"Account"</a>
            <div class="sidebar__footer">
                <button class="sidebar__button" on:click=on_toggle_dark>
                    {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                </button>
                <button class="sidebar__button sidebar__button--logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
