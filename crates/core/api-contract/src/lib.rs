//! 稳定的 DTO 与 API 响应契约。
//!
//! 包含三部分：
//! - 响应封装：ApiResponse / ApiError / ListEnvelope
//! - 请求体与查询参数 DTO
//! - 厂商格式响应 DTO（Gallagher 风格 PACS、Milestone 风格 VMS）

pub mod error_codes;

use serde::{Deserialize, Serialize};

/// 标准 API 响应封装。
///
/// 业务失败以 `success=false` + error 返回，HTTP 状态码承载数值状态；
/// 调用方不需要再单独检查 status 字段。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 列表响应封装（分页）。
///
/// `skip` 是无状态的普通偏移量，可重放；`next.href` 仅在还有剩余记录时出现。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    pub results: Vec<T>,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NextLink>,
    pub total_results: usize,
}

/// 下一页链接。
#[derive(Debug, Serialize)]
pub struct NextLink {
    pub href: String,
}

// ============================================================================
// 请求体与查询参数
// ============================================================================

/// 列表分页查询参数。
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub top: Option<usize>,
    pub skip: Option<usize>,
}

/// 持卡人创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardholderRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub card_number: Option<String>,
    pub access_groups: Option<Vec<String>>,
}

/// 持卡人部分更新请求体（浅合并）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardholderRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub card_number: Option<String>,
    pub status: Option<String>,
    pub access_groups: Option<Vec<String>>,
}

/// 挂接访问组请求体（按组名引用）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachAccessGroupRequest {
    pub access_group: String,
}

/// 访问组创建请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccessGroupRequest {
    pub name: String,
    pub description: Option<String>,
    pub door_ids: Option<Vec<String>>,
    pub schedule: Option<String>,
}

/// 访问组部分更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccessGroupRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub door_ids: Option<Vec<String>>,
    pub schedule: Option<String>,
}

/// 访问组加成员请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub cardholder_id: String,
}

/// 门禁点部分更新请求体。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoorRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub schedule: Option<String>,
}

/// 事件列表查询参数。
///
/// 查询参数名为 snake_case（`type` 为 Rust 保留字所以重命名）。
#[derive(Debug, Default, Deserialize)]
pub struct EventListQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub category: Option<String>,
    pub door_id: Option<String>,
    pub cardholder_id: Option<String>,
    pub search: Option<String>,
    pub top: Option<usize>,
    pub skip: Option<usize>,
}

/// 事件导出查询参数。
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// 事件关联查询参数。
#[derive(Debug, Default, Deserialize)]
pub struct CorrelationQuery {
    pub window_seconds: Option<i64>,
}

/// 助手查询请求体。
#[derive(Debug, Deserialize)]
pub struct AssistQueryRequest {
    pub question: String,
}

/// API 调用统计快照返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub api_requests: u64,
    pub responses_ok: u64,
    pub responses_client_error: u64,
    pub responses_server_error: u64,
    pub simulated_latency_ms_total: u64,
    pub simulated_latency_count: u64,
    pub dataset_resets: u64,
    pub event_exports: u64,
    pub assist_queries: u64,
}

// ============================================================================
// 厂商格式响应 DTO：Gallagher 风格 PACS
// ============================================================================

/// 关联资源引用（href + 显示名）。
#[derive(Debug, Clone, Serialize)]
pub struct ResourceRef {
    pub href: String,
    pub name: String,
}

/// 状态子对象（门的 mode/alarm 等）。
#[derive(Debug, Clone, Serialize)]
pub struct StateValue {
    pub value: String,
}

/// 持卡人返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardholderDto {
    pub href: String,
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub short_name: String,
    pub description: String,
    pub authorised: bool,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub job_title: String,
    pub card_number: String,
    pub status: String,
    pub access_groups: Vec<ResourceRef>,
    pub created: String,
    pub modified: String,
}

/// 持卡人凭证返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDto {
    #[serde(rename = "type")]
    pub credential_type: String,
    pub number: String,
    pub status: String,
}

/// 门禁点返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoorDto {
    pub href: String,
    pub id: String,
    pub name: String,
    pub location: String,
    pub controller: ResourceRef,
    pub reader_id: String,
    pub status: String,
    pub status_flags: Vec<String>,
    pub mode: StateValue,
    pub alarm: StateValue,
    pub schedule: String,
    pub last_event: String,
    pub event_count_24h: u64,
}

/// 控制器返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerDto {
    pub href: String,
    pub id: String,
    pub name: String,
    pub location: String,
    pub ip_address: String,
    pub status: String,
    pub firmware_version: String,
    pub last_communication: String,
    pub doors: Vec<ResourceRef>,
}

/// 访问组返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessGroupDto {
    pub href: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub member_count: usize,
    pub doors: Vec<ResourceRef>,
    pub schedule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<ResourceRef>>,
}

/// 输入/输出点返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IoPointDto {
    pub href: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub point_type: String,
    pub location: String,
    pub door: Option<ResourceRef>,
    pub controller: Option<ResourceRef>,
    pub state: String,
}

/// 操作员组返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorGroupDto {
    pub href: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub privileges: Vec<String>,
}

/// 事件返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub href: String,
    pub id: String,
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub category: String,
    pub source: ResourceRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<ResourceRef>,
    pub card_number: String,
    pub access_group: String,
    pub result: String,
    pub message: String,
}

// ============================================================================
// 厂商格式响应 DTO：Milestone 风格 VMS
// ============================================================================

/// 摄像机返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraDto {
    pub href: String,
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub channel: u32,
    pub recording_server: ResourceRef,
    pub ptz_enabled: bool,
    pub status: String,
}

/// 录像书签返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkDto {
    pub href: String,
    pub id: String,
    pub time_begin: String,
    pub time_end: String,
    pub camera: ResourceRef,
    pub header: String,
    pub description: String,
}

/// VMS 事件返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VmsEventDto {
    pub href: String,
    pub id: String,
    pub time: String,
    pub message: String,
    pub source: String,
    pub camera: ResourceRef,
}

/// 录像服务器返回结构。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingServerDto {
    pub href: String,
    pub id: String,
    pub name: String,
    pub hostname: String,
    pub status: String,
    pub storage_used_gb: f64,
    pub storage_total_gb: f64,
}
