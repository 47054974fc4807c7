//! 测试事件构造辅助。
#![allow(dead_code)]

use domain::{EventCategory, SecurityEvent};

/// 基准时刻：2025-08-05T13:20:00Z。
pub const NOW_MS: i64 = 1_754_400_000_000;

pub fn event(
    id: &str,
    ts_ms: i64,
    event_type: &str,
    category: EventCategory,
    door_id: &str,
    door_name: &str,
    cardholder: Option<(&str, &str)>,
    result: &str,
) -> SecurityEvent {
    SecurityEvent {
        event_id: id.to_string(),
        ts_ms,
        event_type: event_type.to_string(),
        category,
        door_id: door_id.to_string(),
        door_name: door_name.to_string(),
        cardholder_id: cardholder.map(|(id, _)| id.to_string()),
        cardholder_name: cardholder.map(|(_, name)| name.to_string()),
        card_number: cardholder.map(|_| "10001".to_string()),
        access_group: cardholder.map(|_| "All Staff".to_string()),
        result: result.to_string(),
        details: format!("{event_type} at {door_name}"),
    }
}

pub fn granted(id: &str, ts_ms: i64, door_id: &str, door_name: &str) -> SecurityEvent {
    event(
        id,
        ts_ms,
        "Access Granted",
        EventCategory::Access,
        door_id,
        door_name,
        Some(("CH-0001", "Alice Anderson")),
        "granted",
    )
}

pub fn fault(id: &str, ts_ms: i64, door_id: &str, door_name: &str) -> SecurityEvent {
    event(
        id,
        ts_ms,
        "Door Fault",
        EventCategory::Fault,
        door_id,
        door_name,
        None,
        "fault",
    )
}

pub fn denied(id: &str, ts_ms: i64, cardholder_id: &str, name: &str) -> SecurityEvent {
    event(
        id,
        ts_ms,
        "Access Denied",
        EventCategory::Access,
        "DOOR-002",
        "Lobby North",
        Some((cardholder_id, name)),
        "denied",
    )
}
