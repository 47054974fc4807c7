//! 事件 handlers
//!
//! - GET /events - 多条件过滤 + top/skip 分页
//! - GET /events/statistics - 分组统计
//! - GET /events/patterns - 模式检测（阈值来自运行配置）
//! - GET /events/export?format=csv|json - 导出
//! - GET /events/correlation - PACS/VMS 时间窗关联
//!
//! 过滤条件全部可选、合取生效；日期为 YYYY-MM-DD，
//! 结束日期扩展到当天 23:59:59.999。

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;

use api_contract::{CorrelationQuery, EventListQuery, ExportQuery, error_codes};
use domain::EventCategory;
use pacs_analytics::{
    CorrelationOptions, EventFilter, correlate_events, event_patterns, event_statistics,
    export_csv, export_json, filter_events,
};
use pacs_mapper::map_event;
use pacs_telemetry::record_event_export;

use crate::AppState;
use crate::utils::response::{bad_request_error, ok_json, paginate, storage_error};

/// 解析 YYYY-MM-DD 日期参数。
fn parse_date(value: &str, field: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        bad_request_error(
            error_codes::INVALID_REQUEST,
            format!("{field} must be YYYY-MM-DD"),
        )
    })
}

/// 查询参数 → 过滤器。
fn build_filter(query: &EventListQuery) -> Result<EventFilter, Response> {
    let start_date = match &query.start_date {
        Some(value) => Some(parse_date(value, "start_date")?),
        None => None,
    };
    let end_date = match &query.end_date {
        Some(value) => Some(parse_date(value, "end_date")?),
        None => None,
    };
    let categories = match &query.category {
        Some(value) => match EventCategory::parse(value) {
            Some(category) => vec![category],
            None => {
                return Err(bad_request_error(
                    error_codes::INVALID_REQUEST,
                    format!("unknown category '{value}'"),
                ));
            }
        },
        None => Vec::new(),
    };
    Ok(EventFilter {
        start_date,
        end_date,
        event_types: query.event_type.clone().into_iter().collect(),
        categories,
        door_ids: query.door_id.clone().into_iter().collect(),
        cardholder_ids: query.cardholder_id.clone().into_iter().collect(),
        search: query.search.clone(),
    })
}

/// 查询事件列表
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Response {
    let filter = match build_filter(&query) {
        Ok(filter) => filter,
        Err(response) => return response,
    };
    match state.event_store.list_events().await {
        Ok(events) => {
            let matched = if filter.is_empty() {
                events
            } else {
                filter_events(&events, &filter)
            };
            let data: Vec<_> = matched
                .iter()
                .map(|event| map_event(event, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/events",
            ))
        }
        Err(err) => storage_error(err),
    }
}

/// 事件统计汇总
pub async fn get_statistics(State(state): State<AppState>) -> Response {
    match state.event_store.list_events().await {
        Ok(events) => ok_json(event_statistics(&events)),
        Err(err) => storage_error(err),
    }
}

/// 事件模式检测
pub async fn get_patterns(State(state): State<AppState>) -> Response {
    match state.event_store.list_events().await {
        Ok(events) => ok_json(event_patterns(&events, &state.analytics)),
        Err(err) => storage_error(err),
    }
}

/// 事件导出（CSV 为有损导出，id/timestamp 列保证逐字往返）
pub async fn export_events(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Response {
    let events = match state.event_store.list_events().await {
        Ok(events) => events,
        Err(err) => return storage_error(err),
    };
    let format = query.format.as_deref().unwrap_or("csv");
    match format {
        "csv" => {
            record_event_export();
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"pacs-events.csv\"",
                    ),
                ],
                export_csv(&events),
            )
                .into_response()
        }
        "json" => match export_json(&events) {
            Ok(body) => {
                record_event_export();
                (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, "application/json"),
                        (
                            header::CONTENT_DISPOSITION,
                            "attachment; filename=\"pacs-events.json\"",
                        ),
                    ],
                    body,
                )
                    .into_response()
            }
            Err(err) => bad_request_error(error_codes::INTERNAL_ERROR, err.to_string()),
        },
        other => bad_request_error(
            error_codes::INVALID_REQUEST,
            format!("unsupported format '{other}'"),
        ),
    }
}

/// PACS/VMS 事件关联
pub async fn get_correlation(
    State(state): State<AppState>,
    Query(query): Query<CorrelationQuery>,
) -> Response {
    let events = match state.event_store.list_events().await {
        Ok(events) => events,
        Err(err) => return storage_error(err),
    };
    let vms_events = match state.vms_store.list_vms_events().await {
        Ok(vms_events) => vms_events,
        Err(err) => return storage_error(err),
    };
    let options = CorrelationOptions {
        window_ms: query
            .window_seconds
            .map(|seconds| seconds.max(0) * 1000)
            .unwrap_or(state.correlation_window_ms),
        match_location: false,
    };
    ok_json(correlate_events(&events, &vms_events, &options))
}
