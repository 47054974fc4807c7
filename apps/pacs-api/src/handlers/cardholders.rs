//! 持卡人 handlers
//!
//! 提供持卡人资源的接口（持卡人只停用、不硬删除）：
//! - GET /cardholders - 列出持卡人（top/skip 分页）
//! - POST /cardholders - 创建持卡人（访问组需存在）
//! - GET /cardholders/{id} - 获取持卡人详情
//! - PATCH /cardholders/{id} - 部分更新（浅合并 + modified 时间戳）
//! - GET /cardholders/{id}/credentials - 凭证列表
//! - GET /cardholders/{id}/access-groups - 已挂接访问组
//! - POST /cardholders/{id}/access-groups - 挂接访问组（按组名）
//! - DELETE /cardholders/{id}/access-groups/{gid} - 摘除访问组
//!
//! 业务规则：
//! - 挂接的组名必须存在：InvalidAccessGroupException (400)
//! - 重复挂接：DuplicateAccessGroupException (409)
//! - 直接 PATCH access_groups 不做存在性校验（沿用演示宽松语义）

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use chrono::Utc;
use uuid::Uuid;

use api_contract::{
    AttachAccessGroupRequest, CreateCardholderRequest, PageQuery, UpdateCardholderRequest,
    error_codes,
};
use domain::CardholderStatus;
use pacs_mapper::{map_cardholder, map_credentials};
use pacs_storage::{CardholderRecord, CardholderUpdate};

use crate::AppState;
use crate::utils::response::{
    bad_request_error, conflict_error, not_found_error, ok_json, paginate, storage_error,
};
use crate::utils::{normalize_optional, normalize_required};

#[derive(serde::Deserialize)]
pub struct CardholderPath {
    cardholder_id: String,
}

#[derive(serde::Deserialize)]
pub struct CardholderGroupPath {
    cardholder_id: String,
    group_id: String,
}

/// 列出持卡人
///
/// # 参数
///
/// - `state`: 应用状态，包含 `cardholder_store` 与 `access_group_store`
/// - `query`: top/skip 分页参数
///
/// # 返回
///
/// `200 OK` + ListEnvelope；数据集不变时同样的 (top, skip) 返回
/// 同样的切片（分页可重放）。
///
/// # 流程
///
/// 1. 读取全部持卡人记录（首次读取会从固定数据播种 Overlay）
/// 2. 读取访问组用于把组名解析为 {href, name} 引用
/// 3. 逐条映射为厂商格式 DTO
/// 4. 按 top/skip 切片并合成分页链接
pub async fn list_cardholders(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let groups = match state.access_group_store.list_access_groups().await {
        Ok(groups) => groups,
        Err(err) => return storage_error(err),
    };
    match state.cardholder_store.list_cardholders().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_cardholder(record, &groups, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/cardholders",
            ))
        }
        Err(err) => storage_error(err),
    }
}

/// 创建持卡人
///
/// # 流程
///
/// 1. 校验必填字段（firstName、lastName）
/// 2. 逐个校验请求中的访问组名存在，
///    未知组名返回 `400 InvalidAccessGroupException`
/// 3. 生成新的持卡人 ID（CH- 前缀 + UUID v4）
/// 4. 写入存储并返回映射后的 DTO
///
/// # 错误处理
///
/// - `400 INVALID.REQUEST`: 必填字段缺失
/// - `400 InvalidAccessGroupException`: 访问组不存在
/// - `500 INTERNAL SERVER ERROR`: 存储层错误
pub async fn create_cardholder(
    State(state): State<AppState>,
    Json(req): Json<CreateCardholderRequest>,
) -> Response {
    let first_name = match normalize_required(req.first_name, "firstName") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let last_name = match normalize_required(req.last_name, "lastName") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let access_groups = req.access_groups.unwrap_or_default();
    for name in &access_groups {
        match state.access_group_store.find_access_group_by_name(name).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return bad_request_error(
                    error_codes::INVALID_ACCESS_GROUP,
                    format!("access group '{name}' does not exist"),
                );
            }
            Err(err) => return storage_error(err),
        }
    }
    let now_ms = Utc::now().timestamp_millis();
    let record = CardholderRecord {
        cardholder_id: format!("CH-{}", Uuid::new_v4()),
        first_name,
        last_name,
        email: req.email,
        phone: req.phone,
        department: req.department,
        job_title: req.job_title,
        card_number: req.card_number,
        status: CardholderStatus::Active,
        access_groups,
        created_ms: now_ms,
        modified_ms: now_ms,
    };
    let groups = match state.access_group_store.list_access_groups().await {
        Ok(groups) => groups,
        Err(err) => return storage_error(err),
    };
    match state.cardholder_store.create_cardholder(record).await {
        Ok(record) => ok_json(map_cardholder(&record, &groups, &state.base_url)),
        Err(err) => storage_error(err),
    }
}

/// 获取持卡人详情
pub async fn get_cardholder(
    State(state): State<AppState>,
    Path(path): Path<CardholderPath>,
) -> Response {
    let groups = match state.access_group_store.list_access_groups().await {
        Ok(groups) => groups,
        Err(err) => return storage_error(err),
    };
    match state
        .cardholder_store
        .find_cardholder(&path.cardholder_id)
        .await
    {
        Ok(Some(record)) => ok_json(map_cardholder(&record, &groups, &state.base_url)),
        Ok(None) => not_found_error(error_codes::CARDHOLDER_NOT_FOUND, "cardholder not found"),
        Err(err) => storage_error(err),
    }
}

/// 部分更新持卡人
///
/// PATCH 语义：请求体浅合并进既有记录，`modified` 打当前时间戳；
/// 重复发送同一请求体是安全的。直接改 accessGroups 不做存在性
/// 校验——这是训练场景刻意保留的宽松路径。
///
/// # 错误处理
///
/// - `400 INVALID.REQUEST`: 状态枚举非法 / 字段格式错误
/// - `404 CardholderNotFoundException`: 持卡人不存在
pub async fn update_cardholder(
    State(state): State<AppState>,
    Path(path): Path<CardholderPath>,
    Json(req): Json<UpdateCardholderRequest>,
) -> Response {
    let first_name = match normalize_optional(req.first_name, "firstName") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let last_name = match normalize_optional(req.last_name, "lastName") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let status = match req.status {
        Some(value) => match CardholderStatus::parse(&value) {
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
    let update = CardholderUpdate {
        first_name,
        last_name,
        email: req.email,
        phone: req.phone,
        department: req.department,
        job_title: req.job_title,
        card_number: req.card_number,
        status,
        access_groups: req.access_groups,
        modified_ms: Utc::now().timestamp_millis(),
    };
    let groups = match state.access_group_store.list_access_groups().await {
        Ok(groups) => groups,
        Err(err) => return storage_error(err),
    };
    match state
        .cardholder_store
        .update_cardholder(&path.cardholder_id, update)
        .await
    {
        Ok(Some(record)) => ok_json(map_cardholder(&record, &groups, &state.base_url)),
        Ok(None) => not_found_error(error_codes::CARDHOLDER_NOT_FOUND, "cardholder not found"),
        Err(err) => storage_error(err),
    }
}

/// 凭证列表（卡号派生；无卡号时为空列表）
pub async fn list_credentials(
    State(state): State<AppState>,
    Path(path): Path<CardholderPath>,
) -> Response {
    match state
        .cardholder_store
        .find_cardholder(&path.cardholder_id)
        .await
    {
        Ok(Some(record)) => {
            let credentials = map_credentials(&record);
            let href_path = format!("/api/cardholders/{}/credentials", record.cardholder_id);
            ok_json(paginate(credentials, None, None, &state.base_url, &href_path))
        }
        Ok(None) => not_found_error(error_codes::CARDHOLDER_NOT_FOUND, "cardholder not found"),
        Err(err) => storage_error(err),
    }
}

/// 已挂接访问组列表
pub async fn list_cardholder_access_groups(
    State(state): State<AppState>,
    Path(path): Path<CardholderPath>,
) -> Response {
    let groups = match state.access_group_store.list_access_groups().await {
        Ok(groups) => groups,
        Err(err) => return storage_error(err),
    };
    match state
        .cardholder_store
        .find_cardholder(&path.cardholder_id)
        .await
    {
        Ok(Some(record)) => {
            let dto = map_cardholder(&record, &groups, &state.base_url);
            let href_path = format!("/api/cardholders/{}/access-groups", record.cardholder_id);
            ok_json(paginate(
                dto.access_groups,
                None,
                None,
                &state.base_url,
                &href_path,
            ))
        }
        Ok(None) => not_found_error(error_codes::CARDHOLDER_NOT_FOUND, "cardholder not found"),
        Err(err) => storage_error(err),
    }
}

/// 挂接访问组（按组名引用）
///
/// # 流程
///
/// 1. 校验持卡人存在
/// 2. 按名查找访问组，不存在返回 `400 InvalidAccessGroupException`
/// 3. 已挂接返回 `409 DuplicateAccessGroupException`
/// 4. 追加组名并更新 modified 时间戳
pub async fn attach_access_group(
    State(state): State<AppState>,
    Path(path): Path<CardholderPath>,
    Json(req): Json<AttachAccessGroupRequest>,
) -> Response {
    let group_name = match normalize_required(req.access_group, "accessGroup") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let record = match state
        .cardholder_store
        .find_cardholder(&path.cardholder_id)
        .await
    {
        Ok(Some(record)) => record,
        Ok(None) => {
            return not_found_error(error_codes::CARDHOLDER_NOT_FOUND, "cardholder not found");
        }
        Err(err) => return storage_error(err),
    };
    match state
        .access_group_store
        .find_access_group_by_name(&group_name)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return bad_request_error(
                error_codes::INVALID_ACCESS_GROUP,
                format!("access group '{group_name}' does not exist"),
            );
        }
        Err(err) => return storage_error(err),
    }
    if record.access_groups.iter().any(|name| *name == group_name) {
        return conflict_error(
            error_codes::DUPLICATE_ACCESS_GROUP,
            format!("access group '{group_name}' already attached"),
        );
    }
    let mut access_groups = record.access_groups.clone();
    access_groups.push(group_name);
    let update = CardholderUpdate {
        access_groups: Some(access_groups),
        modified_ms: Utc::now().timestamp_millis(),
        ..CardholderUpdate::default()
    };
    let groups = match state.access_group_store.list_access_groups().await {
        Ok(groups) => groups,
        Err(err) => return storage_error(err),
    };
    match state
        .cardholder_store
        .update_cardholder(&path.cardholder_id, update)
        .await
    {
        Ok(Some(record)) => ok_json(map_cardholder(&record, &groups, &state.base_url)),
        Ok(None) => not_found_error(error_codes::CARDHOLDER_NOT_FOUND, "cardholder not found"),
        Err(err) => storage_error(err),
    }
}

/// 摘除访问组
///
/// 路径中的 group_id 接受组 ID；解析到组名后从持卡人记录移除。
/// 未挂接（或组不存在）返回 `404 AccessGroupNotFoundException`。
pub async fn detach_access_group(
    State(state): State<AppState>,
    Path(path): Path<CardholderGroupPath>,
) -> Response {
    let record = match state
        .cardholder_store
        .find_cardholder(&path.cardholder_id)
        .await
    {
        Ok(Some(record)) => record,
        Ok(None) => {
            return not_found_error(error_codes::CARDHOLDER_NOT_FOUND, "cardholder not found");
        }
        Err(err) => return storage_error(err),
    };
    let group = match state.access_group_store.find_access_group(&path.group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return not_found_error(error_codes::ACCESS_GROUP_NOT_FOUND, "access group not found");
        }
        Err(err) => return storage_error(err),
    };
    if !record.access_groups.iter().any(|name| *name == group.name) {
        return not_found_error(
            error_codes::ACCESS_GROUP_NOT_FOUND,
            format!("access group '{}' not attached", group.name),
        );
    }
    let access_groups: Vec<String> = record
        .access_groups
        .into_iter()
        .filter(|name| *name != group.name)
        .collect();
    let update = CardholderUpdate {
        access_groups: Some(access_groups),
        modified_ms: Utc::now().timestamp_millis(),
        ..CardholderUpdate::default()
    };
    match state
        .cardholder_store
        .update_cardholder(&path.cardholder_id, update)
        .await
    {
        Ok(Some(_)) => ok_json(()),
        Ok(None) => not_found_error(error_codes::CARDHOLDER_NOT_FOUND, "cardholder not found"),
        Err(err) => storage_error(err),
    }
}
