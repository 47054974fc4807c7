//! 统计与排名测试。

mod common;

use common::{NOW_MS, denied, fault, granted};
use pacs_analytics::{event_statistics, top_doors_by_activity};

#[test]
fn by_type_counts_sum_to_total() {
    let events = vec![
        granted("EVT-1", NOW_MS - 1_000, "DOOR-001", "Main Entrance"),
        granted("EVT-2", NOW_MS - 2_000, "DOOR-002", "Lobby North"),
        denied("EVT-3", NOW_MS - 3_000, "CH-0002", "Ben Brooks"),
        fault("EVT-4", NOW_MS - 4_000, "DOOR-005", "East Stairwell"),
    ];
    let stats = event_statistics(&events);
    let sum: usize = stats.by_type.iter().map(|entry| entry.count).sum();
    assert_eq!(sum, events.len());
    assert_eq!(stats.total, events.len());
}

#[test]
fn top_doors_respects_limit_and_descending_order() {
    let mut events = Vec::new();
    for i in 0..5 {
        events.push(granted(
            &format!("EVT-A{i}"),
            NOW_MS - i as i64,
            "DOOR-001",
            "Main Entrance",
        ));
    }
    for i in 0..3 {
        events.push(granted(
            &format!("EVT-B{i}"),
            NOW_MS - i as i64,
            "DOOR-002",
            "Lobby North",
        ));
    }
    events.push(granted("EVT-C0", NOW_MS, "DOOR-003", "Server Room"));

    let top = top_doors_by_activity(&events, Some(2));
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].id, "DOOR-001");
    assert_eq!(top[0].count, 5);
    assert_eq!(top[1].id, "DOOR-002");
    assert!(top[0].count >= top[1].count);
    // 显示名来自首个匹配事件
    assert_eq!(top[0].name, "Main Entrance");
}

#[test]
fn count_ties_keep_first_seen_order() {
    let events = vec![
        granted("EVT-1", NOW_MS, "DOOR-009", "Roof Access"),
        granted("EVT-2", NOW_MS, "DOOR-001", "Main Entrance"),
    ];
    let stats = event_statistics(&events);
    // 两门各一条：按首次出现顺序 DOOR-009 在前
    assert_eq!(stats.by_door[0].key, "Roof Access");
    assert_eq!(stats.by_door[1].key, "Main Entrance");
}

#[test]
fn hour_histogram_has_24_buckets() {
    let events = vec![granted("EVT-1", NOW_MS, "DOOR-001", "Main Entrance")];
    let stats = event_statistics(&events);
    assert_eq!(stats.by_hour.len(), 24);
    let total: usize = stats.by_hour.iter().sum();
    assert_eq!(total, 1);
    assert_eq!(stats.by_day_of_week.len(), 7);
    assert_eq!(stats.by_day_of_week[0].key, "Monday");
}
