//! 事件过滤与时间窗查询。

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use domain::{EventCategory, SecurityEvent};

/// 多条件事件过滤器。
///
/// 所有条件可选，条件之间合取；集合条件为成员匹配，
/// search 为大小写不敏感的子串匹配（门名/持卡人名/详情/事件类型）。
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// 起始日期（含，当天 00:00:00.000）。
    pub start_date: Option<NaiveDate>,
    /// 结束日期（含，扩展到当天 23:59:59.999）。
    pub end_date: Option<NaiveDate>,
    pub event_types: Vec<String>,
    pub categories: Vec<EventCategory>,
    pub door_ids: Vec<String>,
    pub cardholder_ids: Vec<String>,
    pub search: Option<String>,
}

impl EventFilter {
    /// 过滤器是否为空（无任何条件）。
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.event_types.is_empty()
            && self.categories.is_empty()
            && self.door_ids.is_empty()
            && self.cardholder_ids.is_empty()
            && self.search.is_none()
    }
}

/// 日期 → 当天起点的 epoch 毫秒。
fn day_start_ms(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(i64::MIN)
}

/// 日期 → 当天终点（23:59:59.999）的 epoch 毫秒。
fn day_end_ms(date: NaiveDate) -> i64 {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(i64::MAX)
}

/// 合取过滤。幂等：对已过滤结果再次应用同一过滤器返回同一集合。
pub fn filter_events(events: &[SecurityEvent], filter: &EventFilter) -> Vec<SecurityEvent> {
    let start_ms = filter.start_date.map(day_start_ms);
    let end_ms = filter.end_date.map(day_end_ms);
    let search = filter.search.as_ref().map(|term| term.to_lowercase());
    events
        .iter()
        .filter(|event| {
            if let Some(start) = start_ms {
                if event.ts_ms < start {
                    return false;
                }
            }
            if let Some(end) = end_ms {
                if event.ts_ms > end {
                    return false;
                }
            }
            if !filter.event_types.is_empty()
                && !filter
                    .event_types
                    .iter()
                    .any(|ty| ty.eq_ignore_ascii_case(&event.event_type))
            {
                return false;
            }
            if !filter.categories.is_empty() && !filter.categories.contains(&event.category) {
                return false;
            }
            if !filter.door_ids.is_empty() && !filter.door_ids.contains(&event.door_id) {
                return false;
            }
            if !filter.cardholder_ids.is_empty() {
                let matched = event
                    .cardholder_id
                    .as_ref()
                    .is_some_and(|id| filter.cardholder_ids.contains(id));
                if !matched {
                    return false;
                }
            }
            if let Some(term) = &search {
                let mut haystacks = vec![
                    event.door_name.to_lowercase(),
                    event.details.to_lowercase(),
                    event.event_type.to_lowercase(),
                ];
                if let Some(name) = &event.cardholder_name {
                    haystacks.push(name.to_lowercase());
                }
                if !haystacks.iter().any(|hay| hay.contains(term)) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// 时间窗单位。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentUnit {
    Hours,
    Days,
    Weeks,
    Months,
}

impl RecentUnit {
    /// 解析单复数形式的英文单位词。
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim_end_matches('s') {
            "hour" => Some(RecentUnit::Hours),
            "day" => Some(RecentUnit::Days),
            "week" => Some(RecentUnit::Weeks),
            "month" => Some(RecentUnit::Months),
            _ => None,
        }
    }
}

/// 返回时间戳 ≥ 截止点的事件。
///
/// 月份按日历月回退（chrono Months），不是 30 天近似。
pub fn recent_events(
    events: &[SecurityEvent],
    value: u32,
    unit: RecentUnit,
    now_ms: i64,
) -> Vec<SecurityEvent> {
    let now = DateTime::<Utc>::from_timestamp_millis(now_ms).unwrap_or_else(Utc::now);
    let cutoff = match unit {
        RecentUnit::Hours => now - Duration::hours(value as i64),
        RecentUnit::Days => now - Duration::days(value as i64),
        RecentUnit::Weeks => now - Duration::weeks(value as i64),
        RecentUnit::Months => now
            .checked_sub_months(Months::new(value))
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
    };
    let cutoff_ms = cutoff.timestamp_millis();
    events
        .iter()
        .filter(|event| event.ts_ms >= cutoff_ms)
        .cloned()
        .collect()
}
