use domain::{EventCategory, SecurityEvent};

fn sample_event() -> SecurityEvent {
    SecurityEvent {
        event_id: "EVT-000001".to_string(),
        ts_ms: 1_754_000_000_000,
        event_type: "Access Granted".to_string(),
        category: EventCategory::Access,
        door_id: "DOOR-001".to_string(),
        door_name: "Main Entrance".to_string(),
        cardholder_id: Some("CH-0001".to_string()),
        cardholder_name: Some("Alice Anderson".to_string()),
        card_number: Some("10001".to_string()),
        access_group: Some("All Staff".to_string()),
        result: "granted".to_string(),
        details: "Card presented at reader".to_string(),
    }
}

#[test]
fn category_round_trips_as_lowercase() {
    let json = serde_json::to_string(&EventCategory::Alarm).expect("serialize");
    assert_eq!(json, "\"alarm\"");
    assert_eq!(EventCategory::parse("alarm"), Some(EventCategory::Alarm));
    assert_eq!(EventCategory::parse("unknown"), None);
}

#[test]
fn event_serializes_optional_fields() {
    let mut event = sample_event();
    event.cardholder_id = None;
    let value = serde_json::to_value(&event).expect("serialize");
    assert!(value["cardholder_id"].is_null());
    assert_eq!(value["category"], "access");
}

#[test]
fn involves_cardholder_matches_id_only() {
    let event = sample_event();
    assert!(event.involves_cardholder("CH-0001"));
    assert!(!event.involves_cardholder("CH-0002"));
}
