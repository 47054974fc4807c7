//! 规则化自然语言查询解析能力
//!
//! 不是 NLP：一组按优先级排序的 {名称, 正则, 构造器} 规则，
//! 自上而下求值、首个命中即停，没有置信度评分。
//! 解析与执行分离——执行在 assist 层，这里只产出 QueryIntent，
//! 将来若接入真实模型，替换点就在这一层。

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde::Serialize;

/// 时间窗单位（解析层自持，避免与执行层耦合）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowUnit {
    Hours,
    Days,
    Weeks,
    Months,
}

impl WindowUnit {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().trim_end_matches('s') {
            "hour" => Some(WindowUnit::Hours),
            "day" => Some(WindowUnit::Days),
            "week" => Some(WindowUnit::Weeks),
            "month" => Some(WindowUnit::Months),
            _ => None,
        }
    }
}

/// 提取出的时间窗（"last 3 days" → value=3, unit=Days）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub value: u32,
    pub unit: WindowUnit,
}

/// 查询意图。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QueryIntent {
    /// 时间窗内的全部事件。
    RecentWindow { window: Window },
    /// 拒绝事件（可带时间窗）。
    DeniedAccess { window: Option<Window> },
    /// 指定门的活动（引号内的门名或 "at the X door"）。
    DoorActivity { door_name: String },
    /// 指定楼宇的活动。
    BuildingActivity { building: String },
    /// 非工作时段活动。
    AfterHours,
    /// 故障/告警类事件。
    Faults,
    /// 最活跃门排名。
    TopDoors,
    /// 最活跃持卡人排名。
    TopCardholders,
    /// 汇总统计。
    Summary,
    /// 未命中任何规则。
    Unrecognized,
}

/// 解析结果：意图 + 命中的规则名。
#[derive(Debug, Clone, Serialize)]
pub struct ParsedQuery {
    pub intent: QueryIntent,
    /// 命中的规则名（未命中为 "none"）。
    pub rule: &'static str,
}

/// 单条解析规则。
struct QueryRule {
    name: &'static str,
    pattern: Regex,
    build: fn(&Captures, &str) -> QueryIntent,
}

/// 从整句中提取 "last N <unit>" 时间窗（规则间共用）。
fn extract_window(question: &str) -> Option<Window> {
    static WINDOW: OnceLock<Regex> = OnceLock::new();
    let pattern = WINDOW.get_or_init(|| {
        Regex::new(r"(?i)\b(?:last|past)\s+(\d+)?\s*(hours?|days?|weeks?|months?)\b")
            .expect("window pattern")
    });
    let captures = pattern.captures(question)?;
    let value = captures
        .get(1)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(1);
    let unit = WindowUnit::parse(captures.get(2)?.as_str())?;
    Some(Window { value, unit })
}

/// 规则表（按优先级排列，首个命中生效）。
fn rules() -> &'static [QueryRule] {
    static RULES: OnceLock<Vec<QueryRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            QueryRule {
                name: "denied-access",
                pattern: Regex::new(r"(?i)\b(denied|denial|denials|rejected)\b")
                    .expect("denied pattern"),
                build: |_, question| QueryIntent::DeniedAccess {
                    window: extract_window(question),
                },
            },
            QueryRule {
                name: "faults",
                pattern: Regex::new(r"(?i)\b(faults?|faulty|malfunction|broken readers?)\b")
                    .expect("faults pattern"),
                build: |_, _| QueryIntent::Faults,
            },
            QueryRule {
                name: "after-hours",
                pattern: Regex::new(r"(?i)\b(after[- ]hours|off[- ]hours|overnight|late at night)\b")
                    .expect("after-hours pattern"),
                build: |_, _| QueryIntent::AfterHours,
            },
            QueryRule {
                name: "top-doors",
                pattern: Regex::new(r"(?i)\b(busiest|most active|top)\b.*\bdoors?\b")
                    .expect("top-doors pattern"),
                build: |_, _| QueryIntent::TopDoors,
            },
            QueryRule {
                name: "top-cardholders",
                pattern: Regex::new(
                    r"(?i)\b(busiest|most active|top)\b.*\b(cardholders?|people|employees|users)\b",
                )
                .expect("top-cardholders pattern"),
                build: |_, _| QueryIntent::TopCardholders,
            },
            QueryRule {
                name: "door-activity-quoted",
                pattern: Regex::new(r#""([^"]+)""#).expect("quoted-door pattern"),
                build: |captures, _| QueryIntent::DoorActivity {
                    door_name: captures[1].to_string(),
                },
            },
            QueryRule {
                name: "door-activity",
                pattern: Regex::new(r"(?i)\bat\s+the\s+(.+?)\s+door\b").expect("door pattern"),
                build: |captures, _| QueryIntent::DoorActivity {
                    door_name: captures[1].to_string(),
                },
            },
            QueryRule {
                name: "building-activity",
                pattern: Regex::new(r"(?i)\bbuilding\s+([a-z0-9]+)\b").expect("building pattern"),
                build: |captures, _| QueryIntent::BuildingActivity {
                    building: captures[1].to_uppercase(),
                },
            },
            QueryRule {
                name: "recent-window",
                pattern: Regex::new(r"(?i)\b(?:last|past)\s+\d*\s*(?:hours?|days?|weeks?|months?)\b")
                    .expect("recent pattern"),
                build: |_, question| match extract_window(question) {
                    Some(window) => QueryIntent::RecentWindow { window },
                    None => QueryIntent::Unrecognized,
                },
            },
            QueryRule {
                name: "summary",
                pattern: Regex::new(r"(?i)\b(summary|summarize|overview|statistics|report)\b")
                    .expect("summary pattern"),
                build: |_, _| QueryIntent::Summary,
            },
        ]
    })
}

/// 按规则顺序解析问题，首个命中生效。
pub fn parse_query(question: &str) -> ParsedQuery {
    let question = question.trim();
    for rule in rules() {
        if let Some(captures) = rule.pattern.captures(question) {
            return ParsedQuery {
                intent: (rule.build)(&captures, question),
                rule: rule.name,
            };
        }
    }
    ParsedQuery {
        intent: QueryIntent::Unrecognized,
        rule: "none",
    }
}
