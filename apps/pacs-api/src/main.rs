//! 沙箱 HTTP API 入口：装配固定数据、Overlay、实体存储与路由。

mod handlers;
mod middleware;
mod routes;
mod utils;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use chrono::Utc;
use pacs_analytics::AnalyticsConfig;
use pacs_config::AppConfig;
use pacs_fixtures::{FixtureConfig, FixtureSet};
use pacs_storage::{
    AccessGroupStore, CardholderStore, ControllerStore, DoorStore, EventStore,
    InMemoryAccessGroupStore, InMemoryCardholderStore, InMemoryControllerStore, InMemoryDoorStore,
    InMemoryEventStore, InMemoryIoPointStore, InMemoryOperatorGroupStore, InMemoryVmsStore,
    IoPointStore, MemoryOverlay, OperatorGroupStore, Overlay, VmsStore,
};
use pacs_telemetry::init_tracing;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 模拟延迟配置（含确定性步进计数器）。
#[derive(Clone)]
pub struct LatencySettings {
    pub enabled: bool,
    pub min_ms: u64,
    pub max_ms: u64,
    /// 轮转计数器：在 [min, max] 区间内确定性取值，不用随机数。
    pub counter: Arc<AtomicU64>,
}

/// 应用状态：配置片段 + 全部存储实例。
#[derive(Clone)]
pub struct AppState {
    pub base_url: String,
    pub analytics: AnalyticsConfig,
    pub correlation_window_ms: i64,
    pub latency: LatencySettings,
    pub overlay: Arc<dyn Overlay>,
    pub cardholder_store: Arc<dyn CardholderStore>,
    pub door_store: Arc<dyn DoorStore>,
    pub access_group_store: Arc<dyn AccessGroupStore>,
    pub event_store: Arc<dyn EventStore>,
    pub controller_store: Arc<dyn ControllerStore>,
    pub io_point_store: Arc<dyn IoPointStore>,
    pub operator_group_store: Arc<dyn OperatorGroupStore>,
    pub vms_store: Arc<dyn VmsStore>,
}

/// 由运行配置装配应用状态（测试以关闭延迟的配置复用此函数）。
pub fn build_state(config: &AppConfig, now_ms: i64) -> AppState {
    let fixture_config = FixtureConfig {
        cardholders: config.fixture_cardholders,
        events: config.fixture_events,
        days: config.fixture_days,
    };
    let fixtures: FixtureSet = pacs_fixtures::generate(&fixture_config, now_ms);
    let overlay: Arc<dyn Overlay> = Arc::new(MemoryOverlay::new());

    let analytics = AnalyticsConfig {
        repeated_fault_threshold: config.repeated_fault_threshold,
        repeated_denial_threshold: config.repeated_denial_threshold,
        problem_door_threshold: config.problem_door_threshold,
        off_hours_start: config.off_hours_start,
        off_hours_end: config.off_hours_end,
        ..AnalyticsConfig::default()
    };

    AppState {
        base_url: config.api_base_url.clone(),
        analytics,
        correlation_window_ms: config.correlation_window_seconds * 1000,
        latency: LatencySettings {
            enabled: config.latency_enabled,
            min_ms: config.latency_min_ms,
            max_ms: config.latency_max_ms,
            counter: Arc::new(AtomicU64::new(0)),
        },
        cardholder_store: Arc::new(InMemoryCardholderStore::new(
            overlay.clone(),
            fixtures.cardholders.clone(),
        )),
        door_store: Arc::new(InMemoryDoorStore::new(overlay.clone(), fixtures.doors.clone())),
        access_group_store: Arc::new(InMemoryAccessGroupStore::new(
            overlay.clone(),
            fixtures.access_groups.clone(),
        )),
        event_store: Arc::new(InMemoryEventStore::new(
            overlay.clone(),
            fixtures.events.clone(),
        )),
        controller_store: Arc::new(InMemoryControllerStore::new(fixtures.controllers.clone())),
        io_point_store: Arc::new(InMemoryIoPointStore::new(
            fixtures.inputs.clone(),
            fixtures.outputs.clone(),
        )),
        operator_group_store: Arc::new(InMemoryOperatorGroupStore::new(
            fixtures.operator_groups.clone(),
        )),
        vms_store: Arc::new(InMemoryVmsStore::new(
            overlay.clone(),
            fixtures.cameras.clone(),
            fixtures.bookmarks.clone(),
            fixtures.vms_events.clone(),
            fixtures.recording_servers.clone(),
        )),
        overlay,
    }
}

/// 装配完整路由（API 同时挂载在 / 与 /api 前缀下）。
pub fn build_router(state: AppState) -> axum::Router {
    let api = routes::create_api_router();
    axum::Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .merge(routes::create_vendor_router())
        .fallback(utils::response::endpoint_not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::simulated_latency,
        ))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_context))
                .layer(CorsLayer::permissive()),
        )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    // 以当前时刻为基准生成数据集（事件窗口铺满过去 N 天）
    let state = build_state(&config, Utc::now().timestamp_millis());
    let app = build_router(state);

    tracing::info!(addr = %config.http_addr, "pacs sandbox api listening");
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
