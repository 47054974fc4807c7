//! HTTP 响应辅助函数与分页
//!
//! 提供统一的错误响应构造函数和列表分页封装：
//! - 错误响应：bad_request_error, not_found_error, conflict_error, storage_error
//! - 业务错误码使用厂商风格的异常标签（api_contract::error_codes）
//! - paginate：top/skip 偏移分页 → ListEnvelope
//!
//! 设计原则：
//! - 所有错误返回统一的 ApiResponse 格式
//! - HTTP 状态码与错误码对应
//! - next.href 仅在还有剩余记录时出现

use api_contract::{ApiResponse, ListEnvelope, NextLink, error_codes};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pacs_storage::StorageError;
use serde::Serialize;

/// 列表端点的默认页大小。
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// 错误请求响应（400）。
pub fn bad_request_error(code: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(code, message.into())),
    )
        .into_response()
}

/// 资源未找到响应（404）。
pub fn not_found_error(code: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(code, message.into())),
    )
        .into_response()
}

/// 冲突响应（409，重复挂接/重复成员）。
pub fn conflict_error(code: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ApiResponse::<()>::error(code, message.into())),
    )
        .into_response()
}

/// 存储错误响应（500）。
pub fn storage_error(err: StorageError) -> Response {
    let message = err.to_string();
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error(error_codes::INTERNAL_ERROR, message)),
    )
        .into_response()
}

/// 未匹配路径的统一 404（fallback handler）。
pub async fn endpoint_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(
            error_codes::ENDPOINT_NOT_FOUND,
            "Endpoint not found",
        )),
    )
        .into_response()
}

/// 偏移分页：top/skip 切片 + 链接合成。
///
/// skip 是可重放的普通偏移；数据集不变时同样的 (top, skip)
/// 永远返回同样的切片。
pub fn paginate<T: Serialize>(
    items: Vec<T>,
    top: Option<usize>,
    skip: Option<usize>,
    base_url: &str,
    path: &str,
) -> ListEnvelope<T> {
    let top = top.unwrap_or(DEFAULT_PAGE_SIZE);
    let skip = skip.unwrap_or(0);
    let total = items.len();
    let results: Vec<T> = items.into_iter().skip(skip).take(top).collect();
    let next = if top > 0 && skip + top < total {
        Some(NextLink {
            href: format!("{base_url}{path}?top={top}&skip={}", skip + top),
        })
    } else {
        None
    };
    ListEnvelope {
        results,
        href: format!("{base_url}{path}?top={top}&skip={skip}"),
        next,
        total_results: total,
    }
}

/// 200 + 数据封装。
pub fn ok_json<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}
