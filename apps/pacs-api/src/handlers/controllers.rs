//! 控制器 handlers（只读）
//!
//! - GET /controllers
//! - GET /controllers/{id}

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use api_contract::{PageQuery, error_codes};
use pacs_mapper::map_controller;

use crate::AppState;
use crate::utils::response::{not_found_error, ok_json, paginate, storage_error};

#[derive(serde::Deserialize)]
pub struct ControllerPath {
    controller_id: String,
}

pub async fn list_controllers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    match state.controller_store.list_controllers().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_controller(record, &doors, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/controllers",
            ))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn get_controller(
    State(state): State<AppState>,
    Path(path): Path<ControllerPath>,
) -> Response {
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    match state.controller_store.find_controller(&path.controller_id).await {
        Ok(Some(record)) => ok_json(map_controller(&record, &doors, &state.base_url)),
        Ok(None) => not_found_error(error_codes::RESOURCE_NOT_FOUND, "Resource not found"),
        Err(err) => storage_error(err),
    }
}
