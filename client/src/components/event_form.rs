//! Shared event form for the create and edit flows.
//!
//! DESIGN
//! ======
//! The form validates locally and emits a complete `EventDraft`; it never
//! talks to the network itself. The edit flow diffs the emitted draft
//! against the original event with `patch_from`, so an unchanged field is
//! never sent back to the server. Description input is clamped at the
//! keystroke, not at submit.

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

use leptos::prelude::*;

use crate::net::types::{Event, EventDraft, EventPatch, SafeLocation};
use crate::util::form;

/// Diff a draft against the original event, keeping only changed fields.
#[must_use]
pub fn patch_from(original: &Event, draft: &EventDraft) -> EventPatch {
    let mut patch = EventPatch::default();
    if draft.name != original.name {
        patch.name = Some(draft.name.clone());
    }
    if draft.address != original.address {
        patch.address = Some(draft.address.clone());
    }
    if draft.description != original.description {
        patch.description = Some(draft.description.clone());
    }
    if draft.start_time != original.start_time {
        patch.start_time = Some(draft.start_time.clone());
    }
    if draft.end_time != original.end_time {
        patch.end_time = draft.end_time.clone();
    }
    if draft.capacity != original.capacity {
        patch.capacity = draft.capacity;
    }
    patch
}

/// Split a `YYYY-MM-DDTHH:MM:SS` timestamp into date and `HH:MM` inputs.
#[must_use]
pub fn split_start_time(timestamp: &str) -> (String, String) {
    match timestamp.split_once('T') {
        Some((date, time)) => {
            let hhmm = time.get(..5).unwrap_or(time);
            (date.to_owned(), hhmm.to_owned())
        }
        None => (timestamp.to_owned(), String::new()),
    }
}

#[component]
pub fn EventForm(
    /// Prefill source for the edit flow; `None` renders a blank form.
    #[prop(optional_no_strip)]
    initial: Option<Event>,
    /// Advisory address suggestions; empty hides the picker.
    suggestions: Signal<Vec<SafeLocation>>,
    submit_label: &'static str,
    on_submit: Callback<EventDraft>,
) -> impl IntoView {
    let (initial_date, initial_time) = initial
        .as_ref()
        .map(|e| split_start_time(&e.start_time))
        .unwrap_or_default();

    let name = RwSignal::new(initial.as_ref().map(|e| e.name.clone()).unwrap_or_default());
    let address = RwSignal::new(initial.as_ref().map(|e| e.address.clone()).unwrap_or_default());
    let description =
        RwSignal::new(initial.as_ref().map(|e| e.description.clone()).unwrap_or_default());
    let date = RwSignal::new(initial_date);
    let time = RwSignal::new(initial_time);
    let capacity = RwSignal::new(
        initial
            .as_ref()
            .and_then(|e| e.capacity)
            .map(|c| c.to_string())
            .unwrap_or_default(),
    );
    let error = RwSignal::new(String::new());

    let on_description = move |ev| {
        let (kept, _) = form::apply_description_edit(&description.get_untracked(), &event_target_value(&ev));
        description.set(kept);
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_owned();
        let address_value = address.get().trim().to_owned();
        if name_value.is_empty() || address_value.is_empty() {
            error.set("Name and address are required.".to_owned());
            return;
        }
        let Some(start_time) = form::combine_start_time(&date.get(), &time.get()) else {
            error.set("Pick a date and a start time.".to_owned());
            return;
        };
        let capacity_value = match form::parse_capacity(&capacity.get()) {
            Ok(value) => value,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        error.set(String::new());
        on_submit.run(EventDraft {
            name: name_value,
            address: address_value,
            description: description.get(),
            start_time,
            end_time: None,
            capacity: capacity_value,
        });
    };

    view! {
        <form class="event-form" on:submit=submit>
            <label class="event-form__field">
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="event-form__field">
                "Address"
                <input
                    type="text"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || !suggestions.get().is_empty()>
                <div class="event-form__suggestions">
                    <span>"Suggested spots"</span>
                    <For
                        each=move || suggestions.get()
                        key=|court| court.name.clone()
                        children=move |court: SafeLocation| {
                            let court_name = court.name.clone();
                            view! {
                                <button
                                    type="button"
                                    class="event-form__suggestion"
                                    on:click=move |_| address.set(court_name.clone())
                                >
                                    {court.name.clone()}
                                    <span class="event-form__score">
                                        {format!("{:.0}%", court.safety_score * 100.0)}
                                    </span>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
            <div class="event-form__row">
                <label class="event-form__field">
                    "Date"
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label class="event-form__field">
                    "Start"
                    <input
                        type="time"
                        prop:value=move || time.get()
                        on:input=move |ev| time.set(event_target_value(&ev))
                    />
                </label>
                <label class="event-form__field">
                    "Capacity"
                    <input
                        type="text"
                        placeholder="unlimited"
                        prop:value=move || capacity.get()
                        on:input=move |ev| capacity.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="event-form__field">
                "Description"
                <textarea
                    prop:value=move || description.get()
                    on:input=on_description
                ></textarea>
                <span class="event-form__counter">
                    {move || format!("{} left", form::description_remaining(&description.get()))}
                </span>
            </label>
            <Show when=move || !error.get().is_empty()>
                <p class="event-form__error">{move || error.get()}</p>
            </Show>
            <button class="event-form__submit" type="submit">{submit_label}</button>
        </form>
    }
}
