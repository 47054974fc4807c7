//! 模板化助手应答能力
//!
//! "AI" 演示层的真身：把解析出的查询意图交给 analytics 层执行，
//! 再把计算结果填进固定叙述模板。同样的输入永远产出同样的回答，
//! 没有任何模型调用。
//!
//! 回答模板刻意保持训练界面的口吻：一句结论 + 一两句补充数字。

use chrono::Duration;
use domain::{EventCategory, SecurityEvent};
use pacs_analytics::{
    AnalyticsConfig, EventFilter, RecentUnit, event_patterns, event_statistics, filter_events,
    recent_events, top_cardholders_by_activity, top_doors_by_activity,
};
use pacs_query::{ParsedQuery, QueryIntent, Window, WindowUnit, parse_query};
use pacs_storage::DoorRecord;
use serde::Serialize;

/// 助手回答。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistAnswer {
    pub answer: String,
    /// 命中的解析规则名（"none" 表示未识别）。
    pub matched_rule: String,
    /// 回答覆盖的事件数。
    pub event_count: usize,
}

/// 24 小时安全简报。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingReport {
    pub period_start_ms: i64,
    pub period_end_ms: i64,
    pub total_events: usize,
    pub granted: usize,
    pub denied: usize,
    pub alarms: usize,
    pub faults: usize,
    pub narrative: String,
}

fn window_phrase(window: &Window) -> String {
    let unit = match window.unit {
        WindowUnit::Hours => "hour",
        WindowUnit::Days => "day",
        WindowUnit::Weeks => "week",
        WindowUnit::Months => "month",
    };
    if window.value == 1 {
        format!("1 {unit}")
    } else {
        format!("{} {unit}s", window.value)
    }
}

fn to_recent_unit(unit: WindowUnit) -> RecentUnit {
    match unit {
        WindowUnit::Hours => RecentUnit::Hours,
        WindowUnit::Days => RecentUnit::Days,
        WindowUnit::Weeks => RecentUnit::Weeks,
        WindowUnit::Months => RecentUnit::Months,
    }
}

fn scoped<'a>(
    events: &'a [SecurityEvent],
    window: &Option<Window>,
    now_ms: i64,
) -> Vec<SecurityEvent> {
    match window {
        Some(window) => recent_events(events, window.value, to_recent_unit(window.unit), now_ms),
        None => events.to_vec(),
    }
}

/// 解析并回答一个自然语言问题。
pub fn answer_question(
    question: &str,
    events: &[SecurityEvent],
    doors: &[DoorRecord],
    config: &AnalyticsConfig,
    now_ms: i64,
) -> AssistAnswer {
    let ParsedQuery { intent, rule } = parse_query(question);
    let (answer, event_count) = match intent {
        QueryIntent::RecentWindow { window } => {
            let scoped = recent_events(events, window.value, to_recent_unit(window.unit), now_ms);
            let phrase = window_phrase(&window);
            let top = top_doors_by_activity(&scoped, Some(1));
            let answer = match top.first() {
                Some(entry) => format!(
                    "Found {} events in the last {}. The most active door was {} with {} events.",
                    scoped.len(),
                    phrase,
                    entry.name,
                    entry.count
                ),
                None => format!("Found no events in the last {phrase}."),
            };
            (answer, scoped.len())
        }
        QueryIntent::DeniedAccess { window } => {
            let in_window = scoped(events, &window, now_ms);
            let denials: Vec<SecurityEvent> = in_window
                .iter()
                .filter(|event| event.result == "denied")
                .cloned()
                .collect();
            let suffix = window
                .as_ref()
                .map(|window| format!(" in the last {}", window_phrase(window)))
                .unwrap_or_default();
            let top = top_cardholders_by_activity(&denials, Some(1));
            let answer = match top.first() {
                Some(entry) => format!(
                    "There were {} denied access events{}. {} accounts for {} of them.",
                    denials.len(),
                    suffix,
                    entry.name,
                    entry.count
                ),
                None => format!("There were no denied access events{suffix}."),
            };
            (answer, denials.len())
        }
        QueryIntent::DoorActivity { door_name } => {
            let filter = EventFilter {
                search: Some(door_name.clone()),
                ..EventFilter::default()
            };
            let matched = filter_events(events, &filter);
            let granted = matched
                .iter()
                .filter(|event| event.result == "granted")
                .count();
            let denied = matched
                .iter()
                .filter(|event| event.result == "denied")
                .count();
            let answer = format!(
                "Found {} events matching \"{}\": {} granted, {} denied.",
                matched.len(),
                door_name,
                granted,
                denied
            );
            (answer, matched.len())
        }
        QueryIntent::BuildingActivity { building } => {
            let needle = format!("building {}", building).to_lowercase();
            let door_ids: Vec<String> = doors
                .iter()
                .filter(|door| door.location.to_lowercase().contains(&needle))
                .map(|door| door.door_id.clone())
                .collect();
            let filter = EventFilter {
                door_ids,
                ..EventFilter::default()
            };
            let matched = filter_events(events, &filter);
            let answer = format!(
                "Building {} saw {} events across {} doors.",
                building,
                matched.len(),
                filter.door_ids.len()
            );
            (answer, matched.len())
        }
        QueryIntent::AfterHours => {
            let patterns = event_patterns(events, config);
            let count = patterns.off_hours.len();
            let answer = format!(
                "Detected {} events outside business hours (before {:02}:00 or after {:02}:00).",
                count, config.off_hours_end, config.off_hours_start
            );
            (answer, count)
        }
        QueryIntent::Faults => {
            let faults: Vec<SecurityEvent> = events
                .iter()
                .filter(|event| event.category == EventCategory::Fault)
                .cloned()
                .collect();
            let patterns = event_patterns(events, config);
            let answer = match patterns.repeated_faults.first() {
                Some(entry) => format!(
                    "There are {} fault events. {} has a repeating fault pattern ({} occurrences).",
                    faults.len(),
                    entry.door_name,
                    entry.count
                ),
                None => format!(
                    "There are {} fault events. No door crossed the repeat threshold of {}.",
                    faults.len(),
                    config.repeated_fault_threshold
                ),
            };
            (answer, faults.len())
        }
        QueryIntent::TopDoors => {
            let top = top_doors_by_activity(events, None);
            let listing: Vec<String> = top
                .iter()
                .map(|entry| format!("{} ({})", entry.name, entry.count))
                .collect();
            (
                format!("Busiest doors: {}.", listing.join(", ")),
                top.iter().map(|entry| entry.count).sum(),
            )
        }
        QueryIntent::TopCardholders => {
            let top = top_cardholders_by_activity(events, None);
            let listing: Vec<String> = top
                .iter()
                .map(|entry| format!("{} ({})", entry.name, entry.count))
                .collect();
            (
                format!("Most active cardholders: {}.", listing.join(", ")),
                top.iter().map(|entry| entry.count).sum(),
            )
        }
        QueryIntent::Summary => {
            let stats = event_statistics(events);
            let busiest = stats
                .by_door
                .first()
                .map(|entry| format!(" The busiest door is {}.", entry.key))
                .unwrap_or_default();
            let answer = format!(
                "The dataset holds {} events across {} event types.{}",
                stats.total,
                stats.by_type.len(),
                busiest
            );
            (answer, stats.total)
        }
        QueryIntent::Unrecognized => (
            "I could not match that question. Try phrasings like \"denied access in the last 3 days\", \
             \"busiest doors\", \"faults\", or \"activity in building A\"."
                .to_string(),
            0,
        ),
    };
    AssistAnswer {
        answer,
        matched_rule: rule.to_string(),
        event_count,
    }
}

/// 生成过去 24 小时的安全简报。
pub fn daily_briefing(
    events: &[SecurityEvent],
    config: &AnalyticsConfig,
    now_ms: i64,
) -> BriefingReport {
    let period_start_ms = now_ms - Duration::days(1).num_milliseconds();
    let recent: Vec<SecurityEvent> = events
        .iter()
        .filter(|event| event.ts_ms >= period_start_ms && event.ts_ms <= now_ms)
        .cloned()
        .collect();
    let granted = recent
        .iter()
        .filter(|event| event.result == "granted")
        .count();
    let denied = recent
        .iter()
        .filter(|event| event.result == "denied")
        .count();
    let alarms = recent
        .iter()
        .filter(|event| event.category == EventCategory::Alarm)
        .count();
    let faults = recent
        .iter()
        .filter(|event| event.category == EventCategory::Fault)
        .count();

    let patterns = event_patterns(&recent, config);
    let top = top_doors_by_activity(&recent, Some(1));
    let mut narrative = format!(
        "In the last 24 hours the site recorded {} events: {} granted, {} denied, {} alarms, {} faults.",
        recent.len(),
        granted,
        denied,
        alarms,
        faults
    );
    if let Some(entry) = top.first() {
        narrative.push_str(&format!(
            " The busiest door was {} with {} events.",
            entry.name, entry.count
        ));
    }
    if let Some(entry) = patterns.repeated_faults.first() {
        narrative.push_str(&format!(
            " Attention: {} reported {} faults in the period.",
            entry.door_name, entry.count
        ));
    }
    if !patterns.off_hours.is_empty() {
        narrative.push_str(&format!(
            " {} events occurred outside business hours.",
            patterns.off_hours.len()
        ));
    }

    BriefingReport {
        period_start_ms,
        period_end_ms: now_ms,
        total_events: recent.len(),
        granted,
        denied,
        alarms,
        faults,
        narrative,
    }
}
