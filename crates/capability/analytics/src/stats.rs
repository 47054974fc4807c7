//! 分组统计与活跃排名。

use chrono::{DateTime, Datelike, Timelike, Utc};
use domain::SecurityEvent;
use serde::Serialize;

use crate::{DEFAULT_ACTIVITY_LIMIT, STATS_TOP_LIMIT};

/// 分组计数条目。
#[derive(Debug, Clone, Serialize)]
pub struct CountEntry {
    pub key: String,
    pub count: usize,
}

/// 活跃排名条目（携带显示名）。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// 事件统计汇总。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStatistics {
    pub total: usize,
    pub by_type: Vec<CountEntry>,
    pub by_category: Vec<CountEntry>,
    /// 按门 Top-10，计数降序，同数按首次出现顺序。
    pub by_door: Vec<CountEntry>,
    /// 按持卡人 Top-10。
    pub by_cardholder: Vec<CountEntry>,
    /// 0-23 时段直方图。
    pub by_hour: Vec<usize>,
    /// 周一..周日。
    pub by_day_of_week: Vec<CountEntry>,
}

/// 按键分组计数，保持首次出现顺序，再按计数稳定降序排列。
/// 稳定排序保证同数条目维持插入顺序。
fn grouped_counts<I>(keys: I) -> Vec<CountEntry>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<CountEntry> = Vec::new();
    for key in keys {
        match order.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.count += 1,
            None => order.push(CountEntry { key, count: 1 }),
        }
    }
    order.sort_by(|a, b| b.count.cmp(&a.count));
    order
}

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// 计算事件统计汇总。byType 各项计数之和等于事件总数。
pub fn event_statistics(events: &[SecurityEvent]) -> EventStatistics {
    let by_type = grouped_counts(events.iter().map(|event| event.event_type.clone()));
    let by_category = grouped_counts(events.iter().map(|event| event.category.as_str().to_string()));
    let mut by_door = grouped_counts(events.iter().map(|event| event.door_name.clone()));
    by_door.truncate(STATS_TOP_LIMIT);
    let mut by_cardholder = grouped_counts(
        events
            .iter()
            .filter_map(|event| event.cardholder_name.clone()),
    );
    by_cardholder.truncate(STATS_TOP_LIMIT);

    let mut by_hour = vec![0usize; 24];
    let mut weekday_counts = [0usize; 7];
    for event in events {
        if let Some(ts) = DateTime::<Utc>::from_timestamp_millis(event.ts_ms) {
            by_hour[ts.hour() as usize] += 1;
            weekday_counts[ts.weekday().num_days_from_monday() as usize] += 1;
        }
    }
    let by_day_of_week = WEEKDAYS
        .iter()
        .zip(weekday_counts)
        .map(|(name, count)| CountEntry {
            key: (*name).to_string(),
            count,
        })
        .collect();

    EventStatistics {
        total: events.len(),
        by_type,
        by_category,
        by_door,
        by_cardholder,
        by_hour,
        by_day_of_week,
    }
}

/// 按门活跃排名（默认前 5），显示名取首个匹配事件的门名。
pub fn top_doors_by_activity(events: &[SecurityEvent], limit: Option<usize>) -> Vec<ActivityEntry> {
    let limit = limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
    let mut entries = grouped_counts(events.iter().map(|event| event.door_id.clone()));
    entries.truncate(limit);
    entries
        .into_iter()
        .map(|entry| {
            let name = events
                .iter()
                .find(|event| event.door_id == entry.key)
                .map(|event| event.door_name.clone())
                .unwrap_or_default();
            ActivityEntry {
                id: entry.key,
                name,
                count: entry.count,
            }
        })
        .collect()
}

/// 按持卡人活跃排名（默认前 5）。
pub fn top_cardholders_by_activity(
    events: &[SecurityEvent],
    limit: Option<usize>,
) -> Vec<ActivityEntry> {
    let limit = limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
    let mut entries = grouped_counts(
        events
            .iter()
            .filter_map(|event| event.cardholder_id.clone()),
    );
    entries.truncate(limit);
    entries
        .into_iter()
        .map(|entry| {
            let name = events
                .iter()
                .find(|event| event.cardholder_id.as_deref() == Some(entry.key.as_str()))
                .and_then(|event| event.cardholder_name.clone())
                .unwrap_or_default();
            ActivityEntry {
                id: entry.key,
                name,
                count: entry.count,
            }
        })
        .collect()
}
