//! 输入/输出点 handlers（只读）
//!
//! - GET /inputs, GET /inputs/{id}
//! - GET /outputs, GET /outputs/{id}

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use api_contract::{PageQuery, error_codes};
use pacs_mapper::map_io_point;

use crate::AppState;
use crate::utils::response::{not_found_error, ok_json, paginate, storage_error};

#[derive(serde::Deserialize)]
pub struct PointPath {
    point_id: String,
}

pub async fn list_inputs(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    let controllers = match state.controller_store.list_controllers().await {
        Ok(controllers) => controllers,
        Err(err) => return storage_error(err),
    };
    match state.io_point_store.list_inputs().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_io_point(record, "inputs", &doors, &controllers, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/inputs",
            ))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn get_input(State(state): State<AppState>, Path(path): Path<PointPath>) -> Response {
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    let controllers = match state.controller_store.list_controllers().await {
        Ok(controllers) => controllers,
        Err(err) => return storage_error(err),
    };
    match state.io_point_store.find_input(&path.point_id).await {
        Ok(Some(record)) => ok_json(map_io_point(
            &record,
            "inputs",
            &doors,
            &controllers,
            &state.base_url,
        )),
        Ok(None) => not_found_error(error_codes::RESOURCE_NOT_FOUND, "Resource not found"),
        Err(err) => storage_error(err),
    }
}

pub async fn list_outputs(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    let controllers = match state.controller_store.list_controllers().await {
        Ok(controllers) => controllers,
        Err(err) => return storage_error(err),
    };
    match state.io_point_store.list_outputs().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| {
                    map_io_point(record, "outputs", &doors, &controllers, &state.base_url)
                })
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/outputs",
            ))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn get_output(State(state): State<AppState>, Path(path): Path<PointPath>) -> Response {
    let doors = match state.door_store.list_doors().await {
        Ok(doors) => doors,
        Err(err) => return storage_error(err),
    };
    let controllers = match state.controller_store.list_controllers().await {
        Ok(controllers) => controllers,
        Err(err) => return storage_error(err),
    };
    match state.io_point_store.find_output(&path.point_id).await {
        Ok(Some(record)) => ok_json(map_io_point(
            &record,
            "outputs",
            &doors,
            &controllers,
            &state.base_url,
        )),
        Ok(None) => not_found_error(error_codes::RESOURCE_NOT_FOUND, "Resource not found"),
        Err(err) => storage_error(err),
    }
}
