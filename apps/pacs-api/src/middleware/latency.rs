//! 模拟网络延迟中间件
//!
//! 每次调用前等待 300-500ms，模拟真实集成环境的网络往返，
//! 让训练界面的加载状态有东西可展示。
//! 此处以轮转计数器在配置区间内确定性取值（不用随机数），
//! 配置 PACS_LATENCY=off 可整体关闭（测试场景）。

use std::sync::atomic::Ordering;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use pacs_telemetry::record_simulated_latency_ms;

use crate::AppState;

/// 计数器步长：与区间宽度互素，遍历整个区间。
const STEP_MS: u64 = 37;

pub async fn simulated_latency(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.latency.enabled {
        let tick = state.latency.counter.fetch_add(1, Ordering::Relaxed);
        let span = state.latency.max_ms.saturating_sub(state.latency.min_ms) + 1;
        let delay_ms = state.latency.min_ms + (tick * STEP_MS) % span;
        tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
        record_simulated_latency_ms(delay_ms);
    }
    next.run(req).await
}
