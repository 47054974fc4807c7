//! 请求上下文中间件
//!
//! - 注入 request_id/trace_id 并在响应头回显
//! - 以请求级 span 记录 method/path
//! - 维护 API 调用统计（按响应状态分类）

use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use pacs_telemetry::{new_request_ids, record_api_request, record_response_status};
use tracing::{Instrument, info_span};

/// 请求上下文中间件：注入 request_id/trace_id。
pub async fn request_context(mut req: Request<Body>, next: Next) -> Response {
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());
    record_api_request();

    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    record_response_status(response.status().as_u16());
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response
}
