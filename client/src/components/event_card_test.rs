use super::*;
use crate::net::types::Event;

fn event() -> Event {
    Event {
        id: 1,
        name: "Pickup Run".into(),
        current_registered: 4,
        capacity: Some(10),
        ..Event::default()
    }
}

#[test]
fn capacity_label_covers_both_shapes() {
    assert_eq!(capacity_label(4, Some(10)), "4 / 10");
    assert_eq!(capacity_label(4, None), "4 going");
}

#[test]
fn unlimited_events_are_never_full() {
    assert!(!is_full(5000, None));
    assert!(is_full(10, Some(10)));
    assert!(!is_full(9, Some(10)));
}

#[test]
fn creator_is_recognized_by_id_without_a_username() {
    // Older list payloads omit creator_username; the id annotation is
    // always present and must be what identifies the host.
    let mut e = event();
    e.creator_id = 7;
    e.creator_username = String::new();
    assert!(is_event_creator(&e, 7));
    assert!(!is_event_creator(&e, 8));
}

#[test]
fn unresolved_viewer_id_never_matches() {
    let mut e = event();
    e.creator_id = 0;
    assert!(!is_event_creator(&e, 0));
}

#[test]
fn creator_sees_hosting_badge_even_when_attending() {
    let mut e = event();
    e.is_attending = true;
    assert_eq!(primary_action(&e, true), CardAction::Hosting);
}

#[test]
fn attendee_may_leave_even_when_full() {
    let mut e = event();
    e.is_attending = true;
    e.current_registered = 10;
    assert_eq!(primary_action(&e, false), CardAction::Leave);
}

#[test]
fn outsider_sees_join_until_capacity() {
    let mut e = event();
    assert_eq!(primary_action(&e, false), CardAction::Join);
    e.current_registered = 10;
    assert_eq!(primary_action(&e, false), CardAction::Full);
}
