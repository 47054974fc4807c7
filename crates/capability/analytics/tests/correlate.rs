//! PACS/VMS 关联测试。

mod common;

use common::{NOW_MS, granted};
use pacs_analytics::{CorrelationOptions, correlate_events};
use pacs_storage::VmsEventRecord;

fn vms(id: &str, ts_ms: i64, source: &str) -> VmsEventRecord {
    VmsEventRecord {
        event_id: id.to_string(),
        ts_ms,
        message: "Motion Started".to_string(),
        source: source.to_string(),
        camera_id: "CAM-01".to_string(),
    }
}

#[test]
fn matches_inside_window_only() {
    let pacs = vec![granted("EVT-1", NOW_MS, "DOOR-001", "Main Entrance")];
    let vms_events = vec![
        vms("VEVT-1", NOW_MS + 10_000, "Main Entrance Camera"),
        vms("VEVT-2", NOW_MS - 29_999, "Lobby North Camera"),
        vms("VEVT-3", NOW_MS + 31_000, "Main Entrance Camera"),
    ];
    let result = correlate_events(&pacs, &vms_events, &CorrelationOptions::default());
    assert_eq!(result.len(), 1);
    let ids: Vec<&str> = result[0]
        .matches
        .iter()
        .map(|event| event.event_id.as_str())
        .collect();
    assert_eq!(ids, vec!["VEVT-1", "VEVT-2"]);
}

#[test]
fn location_matching_narrows_results() {
    let pacs = vec![granted("EVT-1", NOW_MS, "DOOR-001", "Main Entrance")];
    let vms_events = vec![
        vms("VEVT-1", NOW_MS + 5_000, "Main Entrance Camera"),
        vms("VEVT-2", NOW_MS + 5_000, "Parking Garage Camera"),
    ];
    let options = CorrelationOptions {
        match_location: true,
        ..CorrelationOptions::default()
    };
    let result = correlate_events(&pacs, &vms_events, &options);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].matches.len(), 1);
    assert_eq!(result[0].matches[0].event_id, "VEVT-1");
}

#[test]
fn pacs_events_without_matches_are_omitted() {
    let pacs = vec![
        granted("EVT-1", NOW_MS, "DOOR-001", "Main Entrance"),
        granted("EVT-2", NOW_MS - 3_600_000, "DOOR-002", "Lobby North"),
    ];
    let vms_events = vec![vms("VEVT-1", NOW_MS + 1_000, "Main Entrance Camera")];
    let result = correlate_events(&pacs, &vms_events, &CorrelationOptions::default());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].pacs_event.event_id, "EVT-1");
}
