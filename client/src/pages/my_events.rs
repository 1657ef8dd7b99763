//! My Events page: created and participating partitions, with edit and
//! delete for events the user created.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::event_card::{EventCard, capacity_label};
use crate::components::event_form::{EventForm, patch_from};
use crate::components::sidebar::Sidebar;
use crate::net::types::{Event, EventDraft, SafeLocation};
use crate::state::auth::AuthState;
use crate::state::events::EventsState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn MyEventsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let events = expect_context::<RwSignal<EventsState>>();
    install_unauth_redirect(auth, use_navigate());

    // Event currently open in the edit form, if any.
    let editing = RwSignal::new(None::<Event>);

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

    let on_delete = move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = crate::state::events::EventStore::with_state(
                crate::net::api::HttpApi,
                events.get_untracked(),
            );
            let _ = store.delete_event(id).await;
            events.set(store.into_state());
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    let on_save = Callback::new(move |draft: EventDraft| {
        let Some(original) = editing.get_untracked() else {
            return;
        };
        let patch = patch_from(&original, &draft);
        let id = original.id;
        editing.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let store = crate::state::events::EventStore::with_state(
                crate::net::api::HttpApi,
                events.get_untracked(),
            );
            let _ = store.edit_event(id, &patch).await;
            events.set(store.into_state());
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, patch);
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
    let on_join = Callback::new(|_id: i64| {});

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="page">
                <header class="page__header">
                    <h2>"My Events"</h2>
                    <Show when=move || events.get().loading>
                        <span class="page__loading">"Loading..."</span>
                    </Show>
                </header>
                <Show when=move || events.get().last_error.is_some()>
                    <p class="page__error">
                        {move || events.get().last_error.unwrap_or_default()}
                    </p>
                </Show>

                <Show when=move || editing.get().is_some()>
                    <section class="page__section page__section--editor">
                        <h3>"Edit Event"</h3>
                        <EventForm
                            initial=editing.get_untracked()
                            suggestions=Signal::derive(Vec::<SafeLocation>::new)
                            submit_label="Save Changes"
                            on_submit=on_save
                        />
                        <button class="page__cancel" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                    </section>
                </Show>

                <section class="page__section">
                    <h3>"Hosting"</h3>
                    <Show when=move || events.get().mine.created.is_empty()>
                        <p class="page__empty">"You have not created any events."</p>
                    </Show>
                    <ul class="event-rows">
                        <For
                            each=move || events.get().mine.created
                            key=Clone::clone
                            children=move |event: Event| {
                                let id = event.id;
                                let seats = capacity_label(event.current_registered, event.capacity);
                                let edit_target = event.clone();
                                view! {
                                    <li class="event-row">
                                        <div class="event-row__summary">
                                            <strong>{event.name.clone()}</strong>
                                            <span>{event.start_time.clone()}</span>
                                            <span class="event-row__seats">{seats}</span>
                                        </div>
                                        <div class="event-row__actions">
                                            <button on:click=move |_| editing.set(Some(edit_target.clone()))>
                                                "Edit"
                                            </button>
                                            <button
                                                class="event-row__delete"
                                                on:click=move |_| on_delete(id)
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>

                <section class="page__section">
                    <h3>"Attending"</h3>
                    <Show when=move || events.get().mine.participating.is_empty()>
                        <p class="page__empty">"You have not joined any events."</p>
                    </Show>
                    <div class="event-grid">
                        <For
                            each=move || events.get().mine.participating
                            key=Clone::clone
                            children=move |event: Event| {
                                view! {
                                    <EventCard
                                        event
                                        viewer_is_creator=false
                                        on_join
                                        on_leave
                                    />
                                }
                            }
                        />
                    </div>
                </section>
            </main>
        </div>
    }
}
