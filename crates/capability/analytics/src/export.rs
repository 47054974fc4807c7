//! 事件导出。
//!
//! CSV 为有损导出（引号包裹、无类型信息），id 与 timestamp 列
//! 保证逐字往返；JSON 走 serde 全量导出。

use chrono::{DateTime, SecondsFormat, Utc};
use domain::SecurityEvent;

const CSV_HEADER: &str =
    "id,timestamp,type,category,door_id,door_name,cardholder_id,cardholder_name,card_number,access_group,result,details";

/// timestamp 列使用 RFC3339 UTC（毫秒精度），保证逐字往返。
fn format_export_ts(ts_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ts_ms) {
        Some(ts) => ts.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => String::new(),
    }
}

/// 字段含逗号/引号/换行时按 RFC4180 引号包裹，内部引号翻倍。
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// 导出 CSV 文本（带表头）。
pub fn export_csv(events: &[SecurityEvent]) -> String {
    let mut out = String::with_capacity(events.len() * 96 + CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for event in events {
        let row = [
            event.event_id.clone(),
            format_export_ts(event.ts_ms),
            event.event_type.clone(),
            event.category.as_str().to_string(),
            event.door_id.clone(),
            event.door_name.clone(),
            event.cardholder_id.clone().unwrap_or_default(),
            event.cardholder_name.clone().unwrap_or_default(),
            event.card_number.clone().unwrap_or_default(),
            event.access_group.clone().unwrap_or_default(),
            event.result.clone(),
            event.details.clone(),
        ];
        let line: Vec<String> = row.iter().map(|field| csv_escape(field)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// 导出 JSON 文本（缩进格式）。
pub fn export_json(events: &[SecurityEvent]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(events)
}
