//! Home page: the full upcoming-event list with join/leave actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::event_card::{EventCard, is_event_creator};
use crate::components::sidebar::Sidebar;
use crate::net::types::Event;
use crate::state::auth::AuthState;
use crate::state::events::EventsState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn EventsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<RwSignal<EventsState>>();
    install_unauth_redirect(auth, use_navigate());

    // First authenticated render triggers the initial load.
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
                store.refresh().await;
                events.set(store.into_state());
            });
        }
    });

    let on_join = Callback::new(move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = crate::state::events::EventStore::with_state(
                crate::net::api::HttpApi,
                events.get_untracked(),
            );
            let _ = store.join_event(id).await;
            events.set(store.into_state());
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    let on_leave = Callback::new(move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = crate::state::events::EventStore::with_state(
                crate::net::api::HttpApi,
                events.get_untracked(),
            );
            let _ = store.leave_event(id).await;
            events.set(store.into_state());
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    let viewer_id = move || auth.get().user.map(|user| user.id).unwrap_or_default();

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="page">
                <header class="page__header">
                    <h2>"Upcoming Events"</h2>
                    <Show when=move || events.get().loading>
                        <span class="page__loading">"Loading..."</span>
                    </Show>
                </header>
                <Show when=move || events.get().last_error.is_some()>
                    <p class="page__error">
                        {move || events.get().last_error.unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || !events.get().loading && events.get().events.is_empty()>
                    <p class="page__empty">"Nothing scheduled yet. Create the first event!"</p>
                </Show>
                <div class="event-grid">
                    <For
                        each=move || events.get().events
                        key=Clone::clone
                        children=move |event: Event| {
                            let viewer_is_creator = is_event_creator(&event, viewer_id());
                            view! {
                                <EventCard
                                    event
                                    viewer_is_creator
                                    on_join
                                    on_leave
                                />
                            }
                        }
                    />
                </div>
            </main>
        </div>
    }
}
