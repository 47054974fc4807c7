//! VMS 资源 handlers（Milestone 风格，只读）
//!
//! - GET /cameras, GET /cameras/{id}
//! - GET /bookmarks
//! - GET /vms/events
//! - GET /recording-servers

use axum::{
    extract::{Path, Query, State},
    response::Response,
};

use api_contract::{PageQuery, error_codes};
use pacs_mapper::{map_bookmark, map_camera, map_recording_server, map_vms_event};

use crate::AppState;
use crate::utils::response::{not_found_error, ok_json, paginate, storage_error};

#[derive(serde::Deserialize)]
pub struct CameraPath {
    camera_id: String,
}

pub async fn list_cameras(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    match state.vms_store.list_cameras().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_camera(record, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/cameras",
            ))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn get_camera(State(state): State<AppState>, Path(path): Path<CameraPath>) -> Response {
    match state.vms_store.find_camera(&path.camera_id).await {
        Ok(Some(record)) => ok_json(map_camera(&record, &state.base_url)),
        Ok(None) => not_found_error(error_codes::RESOURCE_NOT_FOUND, "Resource not found"),
        Err(err) => storage_error(err),
    }
}

pub async fn list_bookmarks(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    match state.vms_store.list_bookmarks().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_bookmark(record, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/bookmarks",
            ))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn list_vms_events(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    match state.vms_store.list_vms_events().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_vms_event(record, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/vms/events",
            ))
        }
        Err(err) => storage_error(err),
    }
}

pub async fn list_recording_servers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    match state.vms_store.list_recording_servers().await {
        Ok(records) => {
            let data: Vec<_> = records
                .iter()
                .map(|record| map_recording_server(record, &state.base_url))
                .collect();
            ok_json(paginate(
                data,
                query.top,
                query.skip,
                &state.base_url,
                "/api/recording-servers",
            ))
        }
        Err(err) => storage_error(err),
    }
}
