//! 操作员组 handlers（只读）
//!
//! - GET /operator_groups
//! - GET /operator_groups/{id}

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use api_contract::{PageQuery, error_codes};
use pacs_mapper::map_operator_group;

use crate::AppState;
use crate::utils::response::{not_found_error, ok_json, paginate, storage_error};

#[derive(serde::Deserialize)]
pub struct OperatorGroupPath {
    group_id: String,
}

pub async fn list_operator_groups(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    match state.operator_group_store.list_operator_groups().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_operator_group(record, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/operator_groups",
            ))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn get_operator_group(
    State(state): State<AppState>,
    Path(path): Path<OperatorGroupPath>,
) -> Response {
    match state.operator_group_store.find_operator_group(&path.group_id).await {
        Ok(Some(record)) => ok_json(map_operator_group(&record, &state.base_url)),
        Ok(None) => not_found_error(error_codes::RESOURCE_NOT_FOUND, "Resource not found"),
        Err(err) => storage_error(err),
    }
}
