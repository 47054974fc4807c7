//! 数据模型
//!
//! 定义所有存储相关的数据模型和更新结构：
//! - 持卡人模型：CardholderRecord, CardholderUpdate
//! - 门禁点模型：DoorRecord, DoorUpdate
//! - 控制器模型：ControllerRecord
//! - 访问组模型：AccessGroupRecord, AccessGroupUpdate
//! - 输入/输出点模型：IoPointRecord
//! - 操作员组模型：OperatorGroupRecord
//! - VMS 模型：CameraRecord, BookmarkRecord, VmsEventRecord, RecordingServerRecord
//!
//! 所有记录可序列化（Overlay 以 JSON 数组形式持有集合）。
//! 事件记录 SecurityEvent 在 domain::data 中定义。

use domain::{CardholderStatus, DoorStatus};
use serde::{Deserialize, Serialize};

/// 持卡人记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardholderRecord {
    pub cardholder_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub card_number: Option<String>,
    pub status: CardholderStatus,
    /// 已挂接的访问组（按组名引用，与训练前端的数据布局一致）。
    pub access_groups: Vec<String>,
    pub created_ms: i64,
    pub modified_ms: i64,
}

/// 持卡人部分更新输入（None 字段保持原值）。
#[derive(Debug, Clone, Default)]
pub struct CardholderUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub card_number: Option<String>,
    pub status: Option<CardholderStatus>,
    pub access_groups: Option<Vec<String>>,
    /// 更新落盘时写入的 modified 时间戳。
    pub modified_ms: i64,
}

/// 门禁点记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorRecord {
    pub door_id: String,
    pub name: String,
    pub location: String,
    pub controller_id: String,
    pub reader_id: String,
    pub status: DoorStatus,
    pub schedule: String,
    pub last_event_ms: i64,
    pub event_count_24h: u64,
}

/// 门禁点部分更新输入。
#[derive(Debug, Clone, Default)]
pub struct DoorUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: Option<DoorStatus>,
    pub schedule: Option<String>,
}

/// 控制器记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerRecord {
    pub controller_id: String,
    pub name: String,
    pub location: String,
    pub ip_address: String,
    pub status: String,
    /// 固件版本在部分固定数据中缺失，由 mapper 合成默认值。
    pub firmware_version: Option<String>,
    pub last_comm_ms: i64,
    pub door_ids: Vec<String>,
}

/// 访问组记录。
///
/// member_count 与 members 为反规范化字段；
/// 专用成员路由同时维护两者，直接 PATCH 可使其失配（演示宽松语义）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessGroupRecord {
    pub group_id: String,
    pub name: String,
    pub description: String,
    pub member_count: usize,
    pub door_ids: Vec<String>,
    pub schedule: String,
    pub members: Vec<String>,
}

/// 访问组部分更新输入。
#[derive(Debug, Clone, Default)]
pub struct AccessGroupUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub door_ids: Option<Vec<String>>,
    pub schedule: Option<String>,
    pub members: Option<Vec<String>>,
    pub member_count: Option<usize>,
}

/// 输入/输出点记录（两类共用形状，分属不同集合）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoPointRecord {
    pub point_id: String,
    pub name: String,
    pub point_type: String,
    pub location: String,
    pub door_id: Option<String>,
    pub controller_id: Option<String>,
    pub state: String,
}

/// 操作员组记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorGroupRecord {
    pub group_id: String,
    pub name: String,
    pub description: String,
    pub privileges: Vec<String>,
}

/// 摄像机记录（Milestone 风格，运行期只读）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRecord {
    pub camera_id: String,
    pub name: String,
    pub enabled: bool,
    pub channel: u32,
    pub recording_server_id: String,
    pub recording_server_name: String,
    pub ptz_enabled: bool,
    pub status: String,
}

/// 录像书签记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub bookmark_id: String,
    pub time_begin_ms: i64,
    pub time_end_ms: i64,
    pub camera_id: String,
    pub camera_name: String,
    pub header: String,
    pub description: String,
}

/// VMS 事件记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VmsEventRecord {
    pub event_id: String,
    pub ts_ms: i64,
    pub message: String,
    /// 事件来源显示名（摄像机名，关联匹配用）。
    pub source: String,
    pub camera_id: String,
}

/// 录像服务器记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingServerRecord {
    pub server_id: String,
    pub name: String,
    pub hostname: String,
    pub status: String,
    pub storage_used_gb: f64,
    pub storage_total_gb: f64,
}
