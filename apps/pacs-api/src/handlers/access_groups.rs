//! 访问组 handlers
//!
//! - GET /access_groups - 列表（不内嵌成员）
//! - POST /access_groups - 创建（引用的门必须存在）
//! - GET /access_groups/{id} - 详情（内嵌成员引用）
//! - PATCH /access_groups/{id} - 部分更新
//! - GET /access_groups/{id}/members - 成员列表
//! - POST /access_groups/{id}/members - 加成员
//! - DELETE /access_groups/{id}/members/{chId} - 移除成员
//!
//! 业务规则：
//! - 加成员时持卡人必须存在：CardholderNotFoundException (400)
//! - 重复成员：DuplicateMemberException (409)
//! - 移除不在列表中的成员：MemberNotFoundException (404)
//! - 成员路由同时维护 members 与 memberCount；
//!   直接 PATCH 可使两者失配（沿用演示宽松语义）

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use uuid::Uuid;

use api_contract::{
    AddMemberRequest, CreateAccessGroupRequest, PageQuery, UpdateAccessGroupRequest, error_codes,
};
use pacs_mapper::map_access_group;
use pacs_storage::{AccessGroupRecord, AccessGroupUpdate};

use crate::AppState;
use crate::utils::response::{
    bad_request_error, conflict_error, not_found_error, ok_json, paginate, storage_error,
};
use crate::utils::{normalize_optional, normalize_required};

#[derive(serde::Deserialize)]
pub struct GroupPath {
    group_id: String,
}

#[derive(serde::Deserialize)]
pub struct GroupMemberPath {
    group_id: String,
    cardholder_id: String,
}

/// 列出访问组（成员引用省略，详情端点携带）
pub async fn list_access_groups(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    match state.access_group_store.list_access_groups().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_access_group(record, &doors, None, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/access_groups",
            ))
        }
        Err(err) => storage_error(err),
    }
}

/// 创建访问组
///
/// 引用的门 ID 逐个校验存在（外键检查只在这个 POST 上做）。
pub async fn create_access_group(
    State(state): State<AppState>,
    Json(req): Json<CreateAccessGroupRequest>,
) -> Response {
    let name = match normalize_required(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let door_ids = req.door_ids.unwrap_or_default();
    for door_id in &door_ids {
        match state.door_store.find_door(door_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return bad_request_error(
                    error_codes::INVALID_REQUEST,
                    format!("door '{door_id}' does not exist"),
                );
            }
            Err(err) => return storage_error(err),
        }
    }
    let record = AccessGroupRecord {
        group_id: format!("AG-{}", Uuid::new_v4()),
        name,
        description: req.description.unwrap_or_default(),
        member_count: 0,
        door_ids,
        schedule: req.schedule.unwrap_or_else(|| "Business Hours".to_string()),
        members: Vec::new(),
    };
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    match state.access_group_store.create_access_group(record).await {
        Ok(record) => ok_json(map_access_group(&record, &doors, None, &state.base_url)),
        Err(err) => storage_error(err),
    }
}

/// 获取访问组详情（内嵌成员引用）
pub async fn get_access_group(
    State(state): State<AppState>,
    Path(path): Path<GroupPath>,
) -> Response {
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    let cardholders = match state.cardholder_store.list_cardholders().await {
        Ok(cardholders) => cardholders,
        Err(err) => return storage_error(err),
    };
    match state.access_group_store.find_access_group(&path.group_id).await {
        Ok(Some(record)) => ok_json(map_access_group(
            &record,
            &doors,
            Some(&cardholders),
            &state.base_url,
        )),
        Ok(None) => not_found_error(error_codes::ACCESS_GROUP_NOT_FOUND, "access group not found"),
        Err(err) => storage_error(err),
    }
}

/// 部分更新访问组（浅合并；不校验门/成员存在性）
pub async fn update_access_group(
    State(state): State<AppState>,
    Path(path): Path<GroupPath>,
    Json(req): Json<UpdateAccessGroupRequest>,
) -> Response {
    let name = match normalize_optional(req.name, "name") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let update = AccessGroupUpdate {
        name,
        description: req.description,
        door_ids: req.door_ids,
        schedule: req.schedule,
        members: None,
        member_count: None,
    };
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    match state
        .access_group_store
        .update_access_group(&path.group_id, update)
        .await
    {
        Ok(Some(record)) => ok_json(map_access_group(&record, &doors, None, &state.base_url)),
        Ok(None) => not_found_error(error_codes::ACCESS_GROUP_NOT_FOUND, "access group not found"),
        Err(err) => storage_error(err),
    }
}

/// 成员列表
pub async fn list_members(State(state): State<AppState>, Path(path): Path<GroupPath>) -> Response {
    let cardholders = match state.cardholder_store.list_cardholders().await {
        Ok(cardholders) => cardholders,
        Err(err) => return storage_error(err),
    };
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    match state.access_group_store.find_access_group(&path.group_id).await {
        Ok(Some(record)) => {
            let dto = map_access_group(&record, &doors, Some(&cardholders), &state.base_url);
            let href_path = format!("/api/access_groups/{}/members", record.group_id);
            ok_json(paginate(
                dto.members.unwrap_or_default(),
                None,
                None,
                &state.base_url,
                &href_path,
            ))
        }
        Ok(None) => not_found_error(error_codes::ACCESS_GROUP_NOT_FOUND, "access group not found"),
        Err(err) => storage_error(err),
    }
}

/// 加成员
///
/// # 流程
///
/// 1. 校验访问组存在（404）
/// 2. 校验持卡人存在，不存在返回 `400 CardholderNotFoundException`
/// 3. 重复成员返回 `409 DuplicateMemberException`
/// 4. 追加成员并同步 memberCount
pub async fn add_member(
    State(state): State<AppState>,
    Path(path): Path<GroupPath>,
    Json(req): Json<AddMemberRequest>,
) -> Response {
    let cardholder_id = match normalize_required(req.cardholder_id, "cardholderId") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let group = match state.access_group_store.find_access_group(&path.group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return not_found_error(error_codes::ACCESS_GROUP_NOT_FOUND, "access group not found");
        }
        Err(err) => return storage_error(err),
    };
    match state.cardholder_store.find_cardholder(&cardholder_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return bad_request_error(
                error_codes::CARDHOLDER_NOT_FOUND,
                format!("cardholder '{cardholder_id}' does not exist"),
            );
        }
        Err(err) => return storage_error(err),
    }
    if group.members.iter().any(|member| *member == cardholder_id) {
        return conflict_error(
            error_codes::DUPLICATE_MEMBER,
            format!("cardholder '{cardholder_id}' already a member"),
        );
    }
    let mut members = group.members.clone();
    members.push(cardholder_id);
    let member_count = members.len();
    let update = AccessGroupUpdate {
        members: Some(members),
        member_count: Some(member_count),
        ..AccessGroupUpdate::default()
    };
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    let cardholders = match state.cardholder_store.list_cardholders().await {
        Ok(cardholders) => cardholders,
        Err(err) => return storage_error(err),
    };
    match state
        .access_group_store
        .update_access_group(&path.group_id, update)
        .await
    {
        Ok(Some(record)) => ok_json(map_access_group(
            &record,
            &doors,
            Some(&cardholders),
            &state.base_url,
        )),
        Ok(None) => not_found_error(error_codes::ACCESS_GROUP_NOT_FOUND, "access group not found"),
        Err(err) => storage_error(err),
    }
}

/// 移除成员
pub async fn remove_member(
    State(state): State<AppState>,
    Path(path): Path<GroupMemberPath>,
) -> Response {
    let group = match state.access_group_store.find_access_group(&path.group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return not_found_error(error_codes::ACCESS_GROUP_NOT_FOUND, "access group not found");
        }
        Err(err) => return storage_error(err),
    };
    if !group
        .members
        .iter()
        .any(|member| *member == path.cardholder_id)
    {
        return not_found_error(
            error_codes::MEMBER_NOT_FOUND,
            format!("cardholder '{}' is not a member", path.cardholder_id),
        );
    }
    let members: Vec<String> = group
        .members
        .into_iter()
        .filter(|member| *member != path.cardholder_id)
        .collect();
    let member_count = members.len();
    let update = AccessGroupUpdate {
        members: Some(members),
        member_count: Some(member_count),
        ..AccessGroupUpdate::default()
    };
    match state
        .access_group_store
        .update_access_group(&path.group_id, update)
        .await
    {
        Ok(Some(_)) => ok_json(()),
        Ok(None) => not_found_error(error_codes::ACCESS_GROUP_NOT_FOUND, "access group not found"),
        Err(err) => storage_error(err),
    }
}
