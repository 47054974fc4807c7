//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 系统：/health, /metrics, /system/refresh
//! - 持卡人：/cardholders/*（含凭证与访问组子资源）
//! - 访问组：/access_groups/*（含成员子资源）
//! - PACS 资源：/doors/*, /controllers/*, /inputs/*, /outputs/*, /operator_groups/*
//! - 事件：/events 及统计/模式/导出/关联子端点
//! - VMS 资源：/cameras/*, /bookmarks, /vms/events, /recording-servers
//! - 助手：/assist/query, /assist/briefing
//! - 厂商 stub：/axis-cgi/param.cgi, /onvif/device_service（仅根路径）

use axum::{
    Router,
    routing::{delete, get, post},
};

use super::AppState;
use super::handlers::*;

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router，由 main 同时挂载在 / 和 /api/ 前缀下
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/system/refresh", post(refresh_dataset))
        .route(
            "/cardholders",
            get(list_cardholders).post(create_cardholder),
        )
        .route(
            "/cardholders/:cardholder_id",
            get(get_cardholder).patch(update_cardholder),
        )
        .route("/cardholders/:cardholder_id/credentials", get(list_credentials))
        .route(
            "/cardholders/:cardholder_id/access-groups",
            get(list_cardholder_access_groups).post(attach_access_group),
        )
        .route(
            "/cardholders/:cardholder_id/access-groups/:group_id",
            delete(detach_access_group),
        )
        .route(
            "/access_groups",
            get(list_access_groups).post(create_access_group),
        )
        .route(
            "/access_groups/:group_id",
            get(get_access_group).patch(update_access_group),
        )
        .route(
            "/access_groups/:group_id/members",
            get(list_members).post(add_member),
        )
        .route(
            "/access_groups/:group_id/members/:cardholder_id",
            delete(remove_member),
        )
        .route("/doors", get(list_doors))
        .route("/doors/:door_id", get(get_door).patch(update_door))
        .route("/controllers", get(list_controllers))
        .route("/controllers/:controller_id", get(get_controller))
        .route("/inputs", get(list_inputs))
        .route("/inputs/:point_id", get(get_input))
        .route("/outputs", get(list_outputs))
        .route("/outputs/:point_id", get(get_output))
        .route("/operator_groups", get(list_operator_groups))
        .route("/operator_groups/:group_id", get(get_operator_group))
        .route("/events", get(list_events))
        .route("/events/statistics", get(get_statistics))
        .route("/events/patterns", get(get_patterns))
        .route("/events/export", get(export_events))
        .route("/events/correlation", get(get_correlation))
        .route("/cameras", get(list_cameras))
        .route("/cameras/:camera_id", get(get_camera))
        .route("/bookmarks", get(list_bookmarks))
        .route("/vms/events", get(list_vms_events))
        .route("/recording-servers", get(list_recording_servers))
        .route("/assist/query", post(assist_query))
        .route("/assist/briefing", get(assist_briefing))
}

/// 创建厂商协议 stub 路由（仅挂载在根路径）
pub fn create_vendor_router() -> Router<AppState> {
    Router::new()
        .route("/axis-cgi/param.cgi", get(axis_param_cgi))
        .route("/onvif/device_service", post(onvif_device_service))
}
