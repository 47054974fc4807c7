pub mod collections;
pub mod data;

pub use data::SecurityEvent;

use serde::{Deserialize, Serialize};

/// 持卡人状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardholderStatus {
    Active,
    Inactive,
    Suspended,
}

impl CardholderStatus {
    /// 转换为线上格式的小写字符串。
    pub fn as_str(&self) -> &'static str {
        match self {
            CardholderStatus::Active => "active",
            CardholderStatus::Inactive => "inactive",
            CardholderStatus::Suspended => "suspended",
        }
    }

    /// 从小写字符串解析状态（未知值返回 None）。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(CardholderStatus::Active),
            "inactive" => Some(CardholderStatus::Inactive),
            "suspended" => Some(CardholderStatus::Suspended),
            _ => None,
        }
    }
}

/// 门禁点状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorStatus {
    Online,
    Offline,
    Fault,
}

impl DoorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoorStatus::Online => "online",
            DoorStatus::Offline => "offline",
            DoorStatus::Fault => "fault",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(DoorStatus::Online),
            "offline" => Some(DoorStatus::Offline),
            "fault" => Some(DoorStatus::Fault),
            _ => None,
        }
    }
}

/// 事件类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Access,
    Alarm,
    Fault,
    System,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Access => "access",
            EventCategory::Alarm => "alarm",
            EventCategory::Fault => "fault",
            EventCategory::System => "system",
        }
    }

    /// 从小写字符串解析类别（未知值返回 None）。
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "access" => Some(EventCategory::Access),
            "alarm" => Some(EventCategory::Alarm),
            "fault" => Some(EventCategory::Fault),
            "system" => Some(EventCategory::System),
            _ => None,
        }
    }
}
