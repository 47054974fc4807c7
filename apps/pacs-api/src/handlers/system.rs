//! 系统 handlers
//!
//! - GET /health - 健康检查
//! - GET /metrics - API 调用统计快照
//! - POST /system/refresh - 重置数据集（清空 Overlay，重新播种）

use axum::{Json, extract::State, response::IntoResponse, response::Response};

use api_contract::MetricsSnapshotDto;
use pacs_telemetry::{metrics, record_dataset_reset};

use crate::AppState;
use crate::utils::response::ok_json;

/// 健康检查
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}

/// API 调用统计快照
pub async fn get_metrics() -> Response {
    let snapshot = metrics().snapshot();
    ok_json(MetricsSnapshotDto {
        api_requests: snapshot.api_requests,
        responses_ok: snapshot.responses_ok,
        responses_client_error: snapshot.responses_client_error,
        responses_server_error: snapshot.responses_server_error,
        simulated_latency_ms_total: snapshot.simulated_latency_ms_total,
        simulated_latency_count: snapshot.simulated_latency_count,
        dataset_resets: snapshot.dataset_resets,
        event_exports: snapshot.event_exports,
        assist_queries: snapshot.assist_queries,
    })
}

/// 重置数据集（Refresh Data）
///
/// 清空 Overlay 后所有可变集合在下一次读取时从固定数据重新播种，
/// 会话内的全部编辑被丢弃。
pub async fn refresh_dataset(State(state): State<AppState>) -> Response {
    state.overlay.clear();
    record_dataset_reset();
    ok_json(())
}
