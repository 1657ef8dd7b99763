use super::*;

#[test]
fn event_deserializes_with_defaults_for_optional_fields() {
    let json = r#"{
        "id": 3,
        "name": "Pickup Run",
        "address": "1800 Spring Garden St",
        "description": "Casual 5k",
        "start_time": "2026-09-01T18:00:00",
        "creator_id": 7
    }"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.id, 3);
    assert_eq!(event.end_time, None);
    assert_eq!(event.creator_username, "");
    assert_eq!(event.capacity, None);
    assert_eq!(event.current_registered, 0);
    assert!(!event.is_attending);
}

#[test]
fn event_reads_attendance_annotation() {
    let json = r#"{
        "id": 3,
        "name": "Court Meetup",
        "address": "10th & Lombard",
        "description": "",
        "start_time": "2026-09-01T18:00:00",
        "creator_id": 7,
        "creator_username": "mara",
        "capacity": 10,
        "current_registered": 4,
        "is_attending": true
    }"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.creator_username, "mara");
    assert_eq!(event.capacity, Some(10));
    assert_eq!(event.current_registered, 4);
    assert!(event.is_attending);
}

#[test]
fn edited_event_produces_a_fresh_list_key() {
    // Keyed list rendering clones the whole event as its key; a rename or
    // reschedule that survives the post-edit refetch must not compare (or
    // hash) equal to the stale row, or the old view would be retained.
    fn hash_of(event: &Event) -> u64 {
        use std::hash::{DefaultHasher, Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        event.hash(&mut hasher);
        hasher.finish()
    }

    let before = Event {
        id: 7,
        name: "Pickup Run".into(),
        start_time: "2026-09-01T18:00:00".into(),
        creator_id: 1,
        ..Event::default()
    };
    let mut renamed = before.clone();
    renamed.name = "Evening Run".into();
    let mut rescheduled = before.clone();
    rescheduled.start_time = "2026-09-02T19:00:00".into();

    assert_ne!(before, renamed);
    assert_ne!(hash_of(&before), hash_of(&renamed));
    assert_ne!(before, rescheduled);
    assert_ne!(hash_of(&before), hash_of(&rescheduled));
}

#[test]
fn user_location_may_be_null_or_absent() {
    let with_null: User = serde_json::from_str(r#"{"id":7,"username":"mara","email":"m@x.y","location":null}"#).unwrap();
    assert_eq!(with_null.id, 7);
    assert_eq!(with_null.location, None);

    let absent: User = serde_json::from_str(r#"{"username":"mara","email":"m@x.y"}"#).unwrap();
    assert_eq!(absent.id, 0);
    assert_eq!(absent.location, None);
}

#[test]
fn my_events_defaults_to_empty_partitions() {
    let mine: MyEvents = serde_json::from_str("{}").unwrap();
    assert!(mine.created.is_empty());
    assert!(mine.participating.is_empty());
}

#[test]
fn safe_locations_unwrap_courts_field() {
    let json = r#"{"courts":[{"name":"Seger Park","latitude":39.94,"longitude":-75.16,"safety_score":0.87}]}"#;
    let wrapper: SafeLocations = serde_json::from_str(json).unwrap();
    assert_eq!(wrapper.courts.len(), 1);
    assert_eq!(wrapper.courts[0].name, "Seger Park");
}

#[test]
fn event_draft_omits_absent_capacity() {
    let draft = EventDraft {
        name: "Run".into(),
        address: "Spring Garden".into(),
        description: String::new(),
        start_time: "2026-09-01T18:00:00".into(),
        end_time: None,
        capacity: None,
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("capacity").is_none());
    // end_time is intentionally serialized as null so the backend clears it.
    assert!(json.get("end_time").is_some());
}

#[test]
fn event_patch_serializes_only_changed_fields() {
    let patch = EventPatch { name: Some("Renamed".into()), capacity: Some(12), ..EventPatch::default() };
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 2);
    assert_eq!(json["name"], "Renamed");
    assert_eq!(json["capacity"], 12);
}
