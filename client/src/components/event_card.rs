//! Event card: one event with its annotations and a single primary action.
//!
//! DESIGN
//! ======
//! The card never decides attendance or fullness itself; it renders the
//! server's annotations (`is_attending`, `current_registered`) and picks
//! the one action that makes sense for the viewer. Creators manage their
//! events from the My Events screen, so the card shows them a badge
//! instead of a join button.

#[cfg(test)]
#[path = "event_card_test.rs"]
mod event_card_test;

use leptos::prelude::*;

use crate::net::types::Event;

/// The one primary action a card offers its viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Viewer created this event; managed elsewhere.
    Hosting,
    /// Viewer is attending and may leave.
    Leave,
    /// Seats remain and the viewer may join.
    Join,
    /// At capacity and the viewer is not attending.
    Full,
}

#[must_use]
pub fn is_full(current_registered: i64, capacity: Option<i64>) -> bool {
    capacity.is_some_and(|cap| current_registered >= cap)
}

/// "4 / 10" with a capacity, "4 going" without one.
#[must_use]
pub fn capacity_label(current_registered: i64, capacity: Option<i64>) -> String {
    match capacity {
        Some(cap) => format!("{current_registered} / {cap}"),
        None => format!("{current_registered} going"),
    }
}

/// Creator check by id; `creator_username` may be absent from older
/// payload shapes, so it is never used for authorization decisions.
/// An unresolved viewer id (0) matches nothing.
#[must_use]
pub fn is_event_creator(event: &Event, viewer_id: i64) -> bool {
    viewer_id != 0 && event.creator_id == viewer_id
}

#[must_use]
pub fn primary_action(event: &Event, viewer_is_creator: bool) -> CardAction {
    if viewer_is_creator {
        CardAction::Hosting
    } else if event.is_attending {
        CardAction::Leave
    } else if is_full(event.current_registered, event.capacity) {
        CardAction::Full
    } else {
        CardAction::Join
    }
}

#[component]
pub fn EventCard(
    event: Event,
    viewer_is_creator: bool,
    on_join: Callback<i64>,
    on_leave: Callback<i64>,
) -> impl IntoView {
    let action = primary_action(&event, viewer_is_creator);
    let id = event.id;
    let seats = capacity_label(event.current_registered, event.capacity);
    let name = event.name;
    let when = event.start_time;
    let address = event.address;
    let description = event.description;
    let has_description = !description.is_empty();
    let host = event.creator_username;

    view! {
        <article class="event-card">
            <header class="event-card__header">
                <h3>{name}</h3>
                <span class="event-card__seats">{seats}</span>
            </header>
            <p class="event-card__meta">
                {when} " · " {address}
            </p>
            <Show when=move || has_description>
                <p class="event-card__description">{description.clone()}</p>
            </Show>
            <footer class="event-card__footer">
                <span class="event-card__host">"by " {host}</span>
                {match action {
                    CardAction::Hosting => view! {
                        <span class="event-card__badge event-card__badge--hosting">"Hosting"</span>
                    }
                    .into_any(),
                    CardAction::Leave => view! {
                        <button
                            class="event-card__button event-card__button--leave"
                            on:click=move |_| on_leave.run(id)
                        >
                            "Leave"
                        </button>
                    }
                    .into_any(),
                    CardAction::Join => view! {
                        <button
                            class="event-card__button"
                            on:click=move |_| on_join.run(id)
                        >
                            "Join"
                        </button>
                    }
                    .into_any(),
                    CardAction::Full => view! {
                        <span class="event-card__badge event-card__badge--full">"Full"</span>
                    }
                    .into_any(),
                }}
            </footer>
        </article>
    }
}
