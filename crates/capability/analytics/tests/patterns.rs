//! 模式检测测试。

mod common;

use chrono::NaiveDate;
use common::{NOW_MS, denied, fault, granted};
use pacs_analytics::{AnalyticsConfig, event_patterns};

#[test]
fn repeated_faults_need_threshold_hits_on_same_door() {
    let events = vec![
        fault("EVT-1", NOW_MS - 1_000, "DOOR-005", "East Stairwell"),
        fault("EVT-2", NOW_MS - 2_000, "DOOR-005", "East Stairwell"),
        fault("EVT-3", NOW_MS - 3_000, "DOOR-005", "East Stairwell"),
        fault("EVT-4", NOW_MS - 4_000, "DOOR-001", "Main Entrance"),
        fault("EVT-5", NOW_MS - 5_000, "DOOR-001", "Main Entrance"),
    ];
    let patterns = event_patterns(&events, &AnalyticsConfig::default());
    // DOOR-005 三次达标，DOOR-001 两次不达标
    assert_eq!(patterns.repeated_faults.len(), 1);
    assert_eq!(patterns.repeated_faults[0].door_id, "DOOR-005");
    assert_eq!(patterns.repeated_faults[0].count, 3);
}

#[test]
fn repeated_denials_group_by_cardholder() {
    let events = vec![
        denied("EVT-1", NOW_MS - 1_000, "CH-0004", "Diego Dawson"),
        denied("EVT-2", NOW_MS - 2_000, "CH-0004", "Diego Dawson"),
        denied("EVT-3", NOW_MS - 3_000, "CH-0004", "Diego Dawson"),
        denied("EVT-4", NOW_MS - 4_000, "CH-0009", "Ingrid Ivanov"),
    ];
    let patterns = event_patterns(&events, &AnalyticsConfig::default());
    assert_eq!(patterns.repeated_denials.len(), 1);
    assert_eq!(patterns.repeated_denials[0].cardholder_id, "CH-0004");
    assert_eq!(patterns.repeated_denials[0].count, 3);
    assert_eq!(patterns.problem_cardholders.len(), 1);
}

#[test]
fn off_hours_classification_uses_configured_bounds() {
    // 02:00 与 20:00 属于非工作时段，12:00 不属于
    let at = |hour: u32| {
        NaiveDate::from_ymd_opt(2025, 8, 4)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    };
    let events = vec![
        granted("EVT-1", at(2), "DOOR-001", "Main Entrance"),
        granted("EVT-2", at(12), "DOOR-001", "Main Entrance"),
        granted("EVT-3", at(20), "DOOR-001", "Main Entrance"),
    ];
    let patterns = event_patterns(&events, &AnalyticsConfig::default());
    let ids: Vec<&str> = patterns
        .off_hours
        .iter()
        .map(|event| event.event_id.as_str())
        .collect();
    assert_eq!(ids, vec!["EVT-1", "EVT-3"]);
}

#[test]
fn peak_hours_returns_top_three() {
    let at = |hour: u32, minute: u32| {
        NaiveDate::from_ymd_opt(2025, 8, 4)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    };
    let mut events = Vec::new();
    for minute in 0..4 {
        events.push(granted(
            &format!("EVT-9{minute}"),
            at(9, minute),
            "DOOR-001",
            "Main Entrance",
        ));
    }
    for minute in 0..2 {
        events.push(granted(
            &format!("EVT-14{minute}"),
            at(14, minute),
            "DOOR-001",
            "Main Entrance",
        ));
    }
    events.push(granted("EVT-170", at(17, 0), "DOOR-001", "Main Entrance"));
    events.push(granted("EVT-80", at(8, 0), "DOOR-001", "Main Entrance"));

    let patterns = event_patterns(&events, &AnalyticsConfig::default());
    assert_eq!(patterns.peak_hours.len(), 3);
    assert_eq!(patterns.peak_hours[0].hour, 9);
    assert_eq!(patterns.peak_hours[0].count, 4);
    assert_eq!(patterns.peak_hours[1].hour, 14);
}

#[test]
fn problem_doors_combine_faults_and_alarms() {
    let mut events = Vec::new();
    for i in 0..3 {
        events.push(fault(
            &format!("EVT-F{i}"),
            NOW_MS - i as i64,
            "DOOR-005",
            "East Stairwell",
        ));
    }
    for i in 0..2 {
        let mut alarm = granted(
            &format!("EVT-A{i}"),
            NOW_MS - i as i64,
            "DOOR-005",
            "East Stairwell",
        );
        alarm.category = domain::EventCategory::Alarm;
        alarm.event_type = "Door Forced Open".to_string();
        alarm.result = "alarm".to_string();
        events.push(alarm);
    }
    let patterns = event_patterns(&events, &AnalyticsConfig::default());
    assert_eq!(patterns.problem_doors.len(), 1);
    assert_eq!(patterns.problem_doors[0].count, 5);
}
