//! 助手 handlers
//!
//! - POST /assist/query - 规则化解析 + 模板应答
//! - GET /assist/briefing - 24 小时安全简报
//!
//! 回答是确定性模板填充，没有模型调用；
//! 解析规则见 pacs-query，执行见 pacs-assist。

use axum::{Json, extract::State, response::Response};
use chrono::Utc;

use api_contract::AssistQueryRequest;
use pacs_assist::{answer_question, daily_briefing};
use pacs_telemetry::record_assist_query;

use crate::AppState;
use crate::utils::normalize_required;
use crate::utils::response::{ok_json, storage_error};

/// 回答自然语言问题
pub async fn assist_query(
    State(state): State<AppState>,
    Json(req): Json<AssistQueryRequest>,
) -> Response {
    let question = match normalize_required(req.question, "question") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let events = match state.event_store.list_events().await {
        Ok(events) => events,
        Err(err) => return storage_error(err),
    };
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    record_assist_query();
    let answer = answer_question(
        &question,
        &events,
        &doors,
        &state.analytics,
        Utc::now().timestamp_millis(),
    );
    ok_json(answer)
}

/// 生成安全简报
pub async fn assist_briefing(State(state): State<AppState>) -> Response {
    let events = match state.event_store.list_events().await {
        Ok(events) => events,
        Err(err) => return storage_error(err),
    };
    ok_json(daily_briefing(
        &events,
        &state.analytics,
        Utc::now().timestamp_millis(),
    ))
}
