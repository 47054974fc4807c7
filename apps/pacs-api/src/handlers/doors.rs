//! 门禁点 handlers
//!
//! - GET /doors - 列表
//! - GET /doors/{id} - 详情
//! - PATCH /doors/{id} - 部分更新（状态为展示态，不驱动硬件模拟）

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};

use api_contract::{PageQuery, UpdateDoorRequest, error_codes};
use domain::DoorStatus;
use pacs_mapper::map_door;
use pacs_storage::DoorUpdate;

use crate::AppState;
use crate::utils::normalize_optional;
use crate::utils::response::{
    bad_request_error, not_found_error, ok_json, paginate, storage_error,
};

#[derive(serde::Deserialize)]
pub struct DoorPath {
    door_id: String,
}

/// 列出门禁点
pub async fn list_doors(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let controllers = match state.controller_store.list_controllers().await {
        Ok(controllers) => controllers,
        Err(err) => return storage_error(err),
    };
    match state.door_store.list_doors().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_door(record, &controllers, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/doors",
            ))
        }
        Err(err) => storage_error(err),
    }
}

/// 获取门禁点详情
pub async fn get_door(State(state): State<AppState>, Path(path): Path<DoorPath>) -> Response {
    let controllers = match state.controller_store.list_controllers().await {
        Ok(controllers) => controllers,
        Err(err) => return storage_error(err),
    };
    match state.door_store.find_door(&path.door_id).await {
        Ok(Some(record)) => ok_json(map_door(&record, &controllers, &state.base_url)),
        Ok(None) => not_found_error(error_codes::RESOURCE_NOT_FOUND, "Resource not found"),
        Err(err) => storage_error(err),
    }
}

/// 部分更新门禁点
///
/// # 错误处理
///
/// - `400 INVALID.REQUEST`: 状态枚举非法
/// - `404 RESOURCE.NOT_FOUND`: 门不存在
pub async fn update_door(
    State(state): State<AppState>,
    Path(path): Path<DoorPath>,
    Json(req): Json<UpdateDoorRequest>,
) -> Response {
    let name = match normalize_optional(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let status = match req.status {
        Some(value) => match DoorStatus::parse(&value) {
            Some(status) => Some(status),
            None => {
                return bad_request_error(
                    error_codes::INVALID_REQUEST,
                    format!("unknown status '{value}'"),
                );
            }
        },
        None => None,
    };
    let update = DoorUpdate {
        name,
        location: req.location,
        status,
        schedule: req.schedule,
    };
    let controllers = match state.controller_store.list_controllers().await {
        Ok(controllers) => controllers,
        Err(err) => return storage_error(err),
    };
    match state.door_store.update_door(&path.door_id, update).await {
        Ok(Some(record)) => ok_json(map_door(&record, &controllers, &state.base_url)),
        Ok(None) => not_found_error(error_codes::RESOURCE_NOT_FOUND, "Resource not found"),
        Err(err) => storage_error(err),
    }
}
