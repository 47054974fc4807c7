//! 事件模式检测。
//!
//! 全部阈值来自 AnalyticsConfig。

use chrono::{DateTime, Timelike, Utc};
use domain::{EventCategory, SecurityEvent};
use serde::Serialize;

use crate::AnalyticsConfig;

/// 门维度的模式条目。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorPattern {
    pub door_id: String,
    pub door_name: String,
    pub count: usize,
}

/// 持卡人维度的模式条目。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardholderPattern {
    pub cardholder_id: String,
    pub cardholder_name: String,
    pub count: usize,
}

/// 高峰时段条目。
#[derive(Debug, Clone, Serialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

/// 模式检测结果。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatterns {
    /// 同门故障 ≥ 阈值。
    pub repeated_faults: Vec<DoorPattern>,
    /// 同人拒绝 ≥ 阈值。
    pub repeated_denials: Vec<CardholderPattern>,
    /// 非工作时段事件（hour < off_hours_end 或 ≥ off_hours_start）。
    pub off_hours: Vec<SecurityEvent>,
    /// 高峰时段 Top-N。
    pub peak_hours: Vec<HourCount>,
    /// 问题门：故障+告警合计 ≥ 阈值，Top-N。
    pub problem_doors: Vec<DoorPattern>,
    /// 问题持卡人：拒绝 ≥ 阈值，Top-N。
    pub problem_cardholders: Vec<CardholderPattern>,
}

fn count_by_door<'a, I>(events: I) -> Vec<(String, String, usize)>
where
    I: IntoIterator<Item = &'a SecurityEvent>,
{
    let mut order: Vec<(String, String, usize)> = Vec::new();
    for event in events {
        match order.iter_mut().find(|(id, _, _)| *id == event.door_id) {
            Some((_, _, count)) => *count += 1,
            None => order.push((event.door_id.clone(), event.door_name.clone(), 1)),
        }
    }
    order.sort_by(|a, b| b.2.cmp(&a.2));
    order
}

fn count_by_cardholder<'a, I>(events: I) -> Vec<(String, String, usize)>
where
    I: IntoIterator<Item = &'a SecurityEvent>,
{
    let mut order: Vec<(String, String, usize)> = Vec::new();
    for event in events {
        let Some(id) = event.cardholder_id.as_ref() else {
            continue;
        };
        match order.iter_mut().find(|(existing, _, _)| existing == id) {
            Some((_, _, count)) => *count += 1,
            None => order.push((
                id.clone(),
                event.cardholder_name.clone().unwrap_or_default(),
                1,
            )),
        }
    }
    order.sort_by(|a, b| b.2.cmp(&a.2));
    order
}

/// 事件流模式检测。
pub fn event_patterns(events: &[SecurityEvent], config: &AnalyticsConfig) -> EventPatterns {
    let repeated_faults = count_by_door(
        events
            .iter()
            .filter(|event| event.category == EventCategory::Fault),
    )
    .into_iter()
    .filter(|(_, _, count)| *count >= config.repeated_fault_threshold)
    .map(|(door_id, door_name, count)| DoorPattern {
        door_id,
        door_name,
        count,
    })
    .collect();

    let denials: Vec<&SecurityEvent> = events
        .iter()
        .filter(|event| event.result == "denied")
        .collect();
    let repeated_denials = count_by_cardholder(denials.iter().copied())
        .into_iter()
        .filter(|(_, _, count)| *count >= config.repeated_denial_threshold)
        .map(|(cardholder_id, cardholder_name, count)| CardholderPattern {
            cardholder_id,
            cardholder_name,
            count,
        })
        .collect();

    let off_hours: Vec<SecurityEvent> = events
        .iter()
        .filter(|event| {
            DateTime::<Utc>::from_timestamp_millis(event.ts_ms).is_some_and(|ts| {
                let hour = ts.hour();
                hour < config.off_hours_end || hour >= config.off_hours_start
            })
        })
        .cloned()
        .collect();

    let mut hour_counts = [0usize; 24];
    for event in events {
        if let Some(ts) = DateTime::<Utc>::from_timestamp_millis(event.ts_ms) {
            hour_counts[ts.hour() as usize] += 1;
        }
    }
    let mut peak_hours: Vec<HourCount> = hour_counts
        .iter()
        .enumerate()
        .map(|(hour, count)| HourCount {
            hour: hour as u32,
            count: *count,
        })
        .collect();
    peak_hours.sort_by(|a, b| b.count.cmp(&a.count));
    peak_hours.truncate(config.peak_hours_limit);

    let mut problem_doors: Vec<DoorPattern> = count_by_door(events.iter().filter(|event| {
        matches!(event.category, EventCategory::Fault | EventCategory::Alarm)
    }))
    .into_iter()
    .filter(|(_, _, count)| *count >= config.problem_door_threshold)
    .map(|(door_id, door_name, count)| DoorPattern {
        door_id,
        door_name,
        count,
    })
    .collect();
    problem_doors.truncate(config.problem_limit);

    let mut problem_cardholders: Vec<CardholderPattern> =
        count_by_cardholder(denials.iter().copied())
            .into_iter()
            .filter(|(_, _, count)| *count >= config.repeated_denial_threshold)
            .map(|(cardholder_id, cardholder_name, count)| CardholderPattern {
                cardholder_id,
                cardholder_name,
                count,
            })
            .collect();
    problem_cardholders.truncate(config.problem_limit);

    EventPatterns {
        repeated_faults,
        repeated_denials,
        off_hours,
        peak_hours,
        problem_doors,
        problem_cardholders,
    }
}
