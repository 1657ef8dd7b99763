//! Create Event page with safe-location suggestions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::event_form::EventForm;
use crate::components::sidebar::Sidebar;
use crate::net::types::EventDraft;
use crate::state::auth::AuthState;
use crate::state::events::EventsState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CreateEventPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<RwSignal<EventsState>>();
    install_unauth_redirect(auth, use_navigate());

    // Suggestions are advisory; a fetch failure just hides the picker.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if auth.get().is_authenticated() && !loaded.get_untracked() {
            loaded.set(true);
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let store = crate::state::events::EventStore::with_state(
                    crate::net::api::HttpApi,
                    events.get_untracked(),
                );
                store.fetch_safe_locations().await;
                events.set(store.into_state());
            });
        }
    });

    let on_submit = Callback::new(move |draft: EventDraft| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = crate::state::events::EventStore::with_state(
                crate::net::api::HttpApi,
                events.get_untracked(),
            );
            let result = store.create_event(&draft).await;
            events.set(store.into_state());
            if result.is_ok() {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/my-events");
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = draft;
    });

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="page">
                <header class="page__header">
                    <h2>"Create Event"</h2>
                </header>
                <Show when=move || events.get().last_error.is_some()>
                    <p class="page__error">
                        {move || events.get().last_error.unwrap_or_default()}
                    </p>
                </Show>
                <EventForm
                    suggestions=Signal::derive(move || events.get().safe_locations)
                    submit_label="Create Event"
                    on_submit=on_submit
                />
            </main>
        </div>
    }
}
