//! 追踪、请求 ID 与 API 调用统计。
//!
//! 调用统计供训练界面的 API 调用跟踪面板消费：
//! 训练界面按次数展示学员触发了多少接口调用、命中了多少错误。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// API 调用统计快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub api_requests: u64,
    pub responses_ok: u64,
    pub responses_client_error: u64,
    pub responses_server_error: u64,
    pub simulated_latency_ms_total: u64,
    pub simulated_latency_count: u64,
    pub dataset_resets: u64,
    pub event_exports: u64,
    pub assist_queries: u64,
}

/// API 调用统计。
pub struct TelemetryMetrics {
    api_requests: AtomicU64,
    responses_ok: AtomicU64,
    responses_client_error: AtomicU64,
    responses_server_error: AtomicU64,
    simulated_latency_ms_total: AtomicU64,
    simulated_latency_count: AtomicU64,
    dataset_resets: AtomicU64,
    event_exports: AtomicU64,
    assist_queries: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            api_requests: AtomicU64::new(0),
            responses_ok: AtomicU64::new(0),
            responses_client_error: AtomicU64::new(0),
            responses_server_error: AtomicU64::new(0),
            simulated_latency_ms_total: AtomicU64::new(0),
            simulated_latency_count: AtomicU64::new(0),
            dataset_resets: AtomicU64::new(0),
            event_exports: AtomicU64::new(0),
            assist_queries: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            api_requests: self.api_requests.load(Ordering::Relaxed),
            responses_ok: self.responses_ok.load(Ordering::Relaxed),
            responses_client_error: self.responses_client_error.load(Ordering::Relaxed),
            responses_server_error: self.responses_server_error.load(Ordering::Relaxed),
            simulated_latency_ms_total: self.simulated_latency_ms_total.load(Ordering::Relaxed),
            simulated_latency_count: self.simulated_latency_count.load(Ordering::Relaxed),
            dataset_resets: self.dataset_resets.load(Ordering::Relaxed),
            event_exports: self.event_exports.load(Ordering::Relaxed),
            assist_queries: self.assist_queries.load(Ordering::Relaxed),
        }
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局统计实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录一次 API 调用。
pub fn record_api_request() {
    metrics().api_requests.fetch_add(1, Ordering::Relaxed);
}

/// 按 HTTP 状态码记录响应类别。
pub fn record_response_status(status: u16) {
    let metrics = metrics();
    match status {
        200..=299 => metrics.responses_ok.fetch_add(1, Ordering::Relaxed),
        400..=499 => metrics
            .responses_client_error
            .fetch_add(1, Ordering::Relaxed),
        500..=599 => metrics
            .responses_server_error
            .fetch_add(1, Ordering::Relaxed),
        _ => 0,
    };
}

/// 记录一次模拟延迟（毫秒）。
pub fn record_simulated_latency_ms(latency_ms: u64) {
    let metrics = metrics();
    metrics
        .simulated_latency_ms_total
        .fetch_add(latency_ms, Ordering::Relaxed);
    metrics
        .simulated_latency_count
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录一次数据集重置（Refresh Data）。
pub fn record_dataset_reset() {
    metrics().dataset_resets.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次事件导出。
pub fn record_event_export() {
    metrics().event_exports.fetch_add(1, Ordering::Relaxed);
}

/// 记录一次助手查询。
pub fn record_assist_query() {
    metrics().assist_queries.fetch_add(1, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_counts() {
        record_api_request();
        record_response_status(200);
        record_response_status(404);
        record_simulated_latency_ms(350);
        let snapshot = metrics().snapshot();
        assert!(snapshot.api_requests >= 1);
        assert!(snapshot.responses_ok >= 1);
        assert!(snapshot.responses_client_error >= 1);
        assert!(snapshot.simulated_latency_ms_total >= 350);
    }
}
