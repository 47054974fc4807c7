//! 过滤器行为测试。

mod common;

use chrono::NaiveDate;
use common::{NOW_MS, granted};
use domain::EventCategory;
use pacs_analytics::{EventFilter, RecentUnit, filter_events, recent_events};

fn day_ms(year: i32, month: u32, day: u32, hour: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

#[test]
fn date_range_is_inclusive_with_end_of_day_extension() {
    let events = vec![
        granted("EVT-1", day_ms(2025, 8, 1, 0), "DOOR-001", "Main Entrance"),
        granted("EVT-2", day_ms(2025, 8, 2, 23), "DOOR-001", "Main Entrance"),
        granted("EVT-3", day_ms(2025, 8, 3, 0), "DOOR-001", "Main Entrance"),
    ];
    let filter = EventFilter {
        start_date: NaiveDate::from_ymd_opt(2025, 8, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 8, 2),
        ..EventFilter::default()
    };
    let result = filter_events(&events, &filter);
    let ids: Vec<&str> = result.iter().map(|event| event.event_id.as_str()).collect();
    // 8/2 23:00 仍在扩展后的结束边界（23:59:59.999）之内
    assert_eq!(ids, vec!["EVT-1", "EVT-2"]);

    let start_ms = day_ms(2025, 8, 1, 0);
    let end_ms = day_ms(2025, 8, 3, 0) - 1;
    for event in &result {
        assert!(event.ts_ms >= start_ms && event.ts_ms <= end_ms);
    }
}

#[test]
fn filtering_is_idempotent() {
    let events = vec![
        granted("EVT-1", NOW_MS - 1_000, "DOOR-001", "Main Entrance"),
        granted("EVT-2", NOW_MS - 2_000, "DOOR-002", "Lobby North"),
    ];
    let filter = EventFilter {
        door_ids: vec!["DOOR-001".to_string()],
        search: Some("entrance".to_string()),
        ..EventFilter::default()
    };
    let once = filter_events(&events, &filter);
    let twice = filter_events(&once, &filter);
    assert_eq!(
        serde_json::to_string(&once).unwrap(),
        serde_json::to_string(&twice).unwrap()
    );
}

#[test]
fn criteria_combine_conjunctively() {
    let mut alarm = granted("EVT-2", NOW_MS, "DOOR-001", "Main Entrance");
    alarm.category = EventCategory::Alarm;
    alarm.event_type = "Door Forced Open".to_string();
    let events = vec![
        granted("EVT-1", NOW_MS, "DOOR-001", "Main Entrance"),
        alarm,
    ];
    let filter = EventFilter {
        door_ids: vec!["DOOR-001".to_string()],
        categories: vec![EventCategory::Alarm],
        ..EventFilter::default()
    };
    let result = filter_events(&events, &filter);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].event_id, "EVT-2");
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let events = vec![
        granted("EVT-1", NOW_MS, "DOOR-001", "Main Entrance"),
        granted("EVT-2", NOW_MS, "DOOR-002", "Lobby North"),
    ];
    let filter = EventFilter {
        search: Some("LOBBY".to_string()),
        ..EventFilter::default()
    };
    let result = filter_events(&events, &filter);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].event_id, "EVT-2");
}

#[test]
fn recent_events_cutoff_is_inclusive() {
    let hour_ms = 3_600_000;
    let events = vec![
        granted("EVT-1", NOW_MS - 2 * hour_ms, "DOOR-001", "Main Entrance"),
        granted("EVT-2", NOW_MS - 26 * hour_ms, "DOOR-001", "Main Entrance"),
    ];
    let result = recent_events(&events, 24, RecentUnit::Hours, NOW_MS);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].event_id, "EVT-1");

    let weekly = recent_events(&events, 1, RecentUnit::Weeks, NOW_MS);
    assert_eq!(weekly.len(), 2);
}

#[test]
fn recent_unit_parses_singular_and_plural() {
    assert_eq!(RecentUnit::parse("hour"), Some(RecentUnit::Hours));
    assert_eq!(RecentUnit::parse("months"), Some(RecentUnit::Months));
    assert_eq!(RecentUnit::parse("fortnight"), None);
}
