//! 实体映射能力
//!
//! 内部记录 → 厂商格式 DTO 的纯转换函数，每类实体一个：
//! - href 由基地址 + 集合名 + ID 合成
//! - 关联实体内嵌为 {href, name} 引用对
//! - 固定数据缺失的字段合成默认值（固件版本、门的 mode/alarm 子对象）
//!
//! 契约：确定性、无 I/O、无错误路径——缺失的可选字段降级为空串/None，
//! 绝不 panic；无效时间戳格式化为空串。

pub mod lookup;

use api_contract::{
    AccessGroupDto, BookmarkDto, CameraDto, CardholderDto, ControllerDto, CredentialDto, DoorDto,
    EventDto, IoPointDto, OperatorGroupDto, RecordingServerDto, ResourceRef, VmsEventDto,
};
use chrono::{DateTime, SecondsFormat, Utc};
use domain::SecurityEvent;
use pacs_storage::{
    AccessGroupRecord, BookmarkRecord, CameraRecord, CardholderRecord, ControllerRecord,
    DoorRecord, IoPointRecord, OperatorGroupRecord, RecordingServerRecord, VmsEventRecord,
};

use lookup::{DEFAULT_FIRMWARE, door_state};

/// 合成资源 href。
pub fn href(base_url: &str, collection: &str, id: &str) -> String {
    format!("{base_url}/api/{collection}/{id}")
}

/// epoch 毫秒 → RFC3339 UTC 字符串（非正值或越界降级为空串）。
pub fn format_ts(ts_ms: i64) -> String {
    if ts_ms <= 0 {
        return String::new();
    }
    match DateTime::<Utc>::from_timestamp_millis(ts_ms) {
        Some(ts) => ts.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => String::new(),
    }
}

/// 持卡人记录 → DTO。
///
/// groups 用于把按名引用的访问组解析为 {href, name}；
/// 未知组名保留名称、href 降级为空串。
pub fn map_cardholder(
    record: &CardholderRecord,
    groups: &[AccessGroupRecord],
    base_url: &str,
) -> CardholderDto {
    let access_groups = record
        .access_groups
        .iter()
        .map(|name| {
            let group_href = groups
                .iter()
                .find(|group| group.name == *name)
                .map(|group| href(base_url, "access_groups", &group.group_id))
                .unwrap_or_default();
            ResourceRef {
                href: group_href,
                name: name.clone(),
            }
        })
        .collect();
    CardholderDto {
        href: href(base_url, "cardholders", &record.cardholder_id),
        id: record.cardholder_id.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        short_name: format!("{} {}", record.first_name, record.last_name),
        description: match (&record.job_title, &record.department) {
            (Some(title), Some(department)) => format!("{title}, {department}"),
            (Some(title), None) => title.clone(),
            (None, Some(department)) => department.clone(),
            (None, None) => String::new(),
        },
        authorised: record.status == domain::CardholderStatus::Active,
        email: record.email.clone().unwrap_or_default(),
        phone: record.phone.clone().unwrap_or_default(),
        department: record.department.clone().unwrap_or_default(),
        job_title: record.job_title.clone().unwrap_or_default(),
        card_number: record.card_number.clone().unwrap_or_default(),
        status: record.status.as_str().to_string(),
        access_groups,
        created: format_ts(record.created_ms),
        modified: format_ts(record.modified_ms),
    }
}

/// 持卡人记录 → 凭证列表（无卡号时为空列表）。
pub fn map_credentials(record: &CardholderRecord) -> Vec<CredentialDto> {
    match &record.card_number {
        Some(number) => vec![CredentialDto {
            credential_type: "card".to_string(),
            number: number.clone(),
            status: record.status.as_str().to_string(),
        }],
        None => Vec::new(),
    }
}

/// 门禁点记录 → DTO（mode/alarm 由状态查表合成）。
pub fn map_door(record: &DoorRecord, controllers: &[ControllerRecord], base_url: &str) -> DoorDto {
    let state = door_state(record.status);
    let controller_name = controllers
        .iter()
        .find(|item| item.controller_id == record.controller_id)
        .map(|item| item.name.clone())
        .unwrap_or_default();
    DoorDto {
        href: href(base_url, "doors", &record.door_id),
        id: record.door_id.clone(),
        name: record.name.clone(),
        location: record.location.clone(),
        controller: ResourceRef {
            href: href(base_url, "controllers", &record.controller_id),
            name: controller_name,
        },
        reader_id: record.reader_id.clone(),
        status: record.status.as_str().to_string(),
        status_flags: state.flags.iter().map(|flag| flag.to_string()).collect(),
        mode: state.mode(),
        alarm: state.alarm(),
        schedule: record.schedule.clone(),
        last_event: format_ts(record.last_event_ms),
        event_count_24h: record.event_count_24h,
    }
}

/// 控制器记录 → DTO（固件缺失时合成默认版本）。
pub fn map_controller(
    record: &ControllerRecord,
    doors: &[DoorRecord],
    base_url: &str,
) -> ControllerDto {
    let door_refs = record
        .door_ids
        .iter()
        .map(|door_id| {
            let name = doors
                .iter()
                .find(|door| door.door_id == *door_id)
                .map(|door| door.name.clone())
                .unwrap_or_default();
            ResourceRef {
                href: href(base_url, "doors", door_id),
                name,
            }
        })
        .collect();
    ControllerDto {
        href: href(base_url, "controllers", &record.controller_id),
        id: record.controller_id.clone(),
        name: record.name.clone(),
        location: record.location.clone(),
        ip_address: record.ip_address.clone(),
        status: record.status.clone(),
        firmware_version: record
            .firmware_version
            .clone()
            .unwrap_or_else(|| DEFAULT_FIRMWARE.to_string()),
        last_communication: format_ts(record.last_comm_ms),
        doors: door_refs,
    }
}

/// 访问组记录 → DTO。
///
/// include_members 控制是否内嵌成员引用（列表端点省略，详情端点携带）。
pub fn map_access_group(
    record: &AccessGroupRecord,
    doors: &[DoorRecord],
    cardholders: Option<&[CardholderRecord]>,
    base_url: &str,
) -> AccessGroupDto {
    let door_refs = record
        .door_ids
        .iter()
        .map(|door_id| {
            let name = doors
                .iter()
                .find(|door| door.door_id == *door_id)
                .map(|door| door.name.clone())
                .unwrap_or_default();
            ResourceRef {
                href: href(base_url, "doors", door_id),
                name,
            }
        })
        .collect();
    let members = cardholders.map(|all| {
        record
            .members
            .iter()
            .map(|member_id| {
                let name = all
                    .iter()
                    .find(|ch| ch.cardholder_id == *member_id)
                    .map(|ch| format!("{} {}", ch.first_name, ch.last_name))
                    .unwrap_or_default();
                ResourceRef {
                    href: href(base_url, "cardholders", member_id),
                    name,
                }
            })
            .collect()
    });
    AccessGroupDto {
        href: href(base_url, "access_groups", &record.group_id),
        id: record.group_id.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        member_count: record.member_count,
        doors: door_refs,
        schedule: record.schedule.clone(),
        members,
    }
}

/// 输入/输出点记录 → DTO。
pub fn map_io_point(
    record: &IoPointRecord,
    collection: &str,
    doors: &[DoorRecord],
    controllers: &[ControllerRecord],
    base_url: &str,
) -> IoPointDto {
    let door = record.door_id.as_ref().map(|door_id| {
        let name = doors
            .iter()
            .find(|item| item.door_id == *door_id)
            .map(|item| item.name.clone())
            .unwrap_or_default();
        ResourceRef {
            href: href(base_url, "doors", door_id),
            name,
        }
    });
    let controller = record.controller_id.as_ref().map(|controller_id| {
        let name = controllers
            .iter()
            .find(|item| item.controller_id == *controller_id)
            .map(|item| item.name.clone())
            .unwrap_or_default();
        ResourceRef {
            href: href(base_url, "controllers", controller_id),
            name,
        }
    });
    IoPointDto {
        href: href(base_url, collection, &record.point_id),
        id: record.point_id.clone(),
        name: record.name.clone(),
        point_type: record.point_type.clone(),
        location: record.location.clone(),
        door,
        controller,
        state: record.state.clone(),
    }
}

/// 操作员组记录 → DTO。
pub fn map_operator_group(record: &OperatorGroupRecord, base_url: &str) -> OperatorGroupDto {
    OperatorGroupDto {
        href: href(base_url, "operator_groups", &record.group_id),
        id: record.group_id.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        privileges: record.privileges.clone(),
    }
}

/// 安全事件 → DTO。
pub fn map_event(event: &SecurityEvent, base_url: &str) -> EventDto {
    let cardholder = event.cardholder_id.as_ref().map(|cardholder_id| ResourceRef {
        href: href(base_url, "cardholders", cardholder_id),
        name: event.cardholder_name.clone().unwrap_or_default(),
    });
    EventDto {
        href: href(base_url, "events", &event.event_id),
        id: event.event_id.clone(),
        time: format_ts(event.ts_ms),
        event_type: event.event_type.clone(),
        category: event.category.as_str().to_string(),
        source: ResourceRef {
            href: href(base_url, "doors", &event.door_id),
            name: event.door_name.clone(),
        },
        cardholder,
        card_number: event.card_number.clone().unwrap_or_default(),
        access_group: event.access_group.clone().unwrap_or_default(),
        result: event.result.clone(),
        message: event.details.clone(),
    }
}

/// 摄像机记录 → DTO。
pub fn map_camera(record: &CameraRecord, base_url: &str) -> CameraDto {
    CameraDto {
        href: href(base_url, "cameras", &record.camera_id),
        id: record.camera_id.clone(),
        name: record.name.clone(),
        enabled: record.enabled,
        channel: record.channel,
        recording_server: ResourceRef {
            href: href(base_url, "recording-servers", &record.recording_server_id),
            name: record.recording_server_name.clone(),
        },
        ptz_enabled: record.ptz_enabled,
        status: record.status.clone(),
    }
}

/// 录像书签记录 → DTO。
pub fn map_bookmark(record: &BookmarkRecord, base_url: &str) -> BookmarkDto {
    BookmarkDto {
        href: href(base_url, "bookmarks", &record.bookmark_id),
        id: record.bookmark_id.clone(),
        time_begin: format_ts(record.time_begin_ms),
        time_end: format_ts(record.time_end_ms),
        camera: ResourceRef {
            href: href(base_url, "cameras", &record.camera_id),
            name: record.camera_name.clone(),
        },
        header: record.header.clone(),
        description: record.description.clone(),
    }
}

/// VMS 事件记录 → DTO。
pub fn map_vms_event(record: &VmsEventRecord, base_url: &str) -> VmsEventDto {
    VmsEventDto {
        href: format!("{base_url}/api/vms/events/{}", record.event_id),
        id: record.event_id.clone(),
        time: format_ts(record.ts_ms),
        message: record.message.clone(),
        source: record.source.clone(),
        camera: ResourceRef {
            href: href(base_url, "cameras", &record.camera_id),
            name: record.source.clone(),
        },
    }
}

/// 录像服务器记录 → DTO。
pub fn map_recording_server(record: &RecordingServerRecord, base_url: &str) -> RecordingServerDto {
    RecordingServerDto {
        href: href(base_url, "recording-servers", &record.server_id),
        id: record.server_id.clone(),
        name: record.name.clone(),
        hostname: record.hostname.clone(),
        status: record.status.clone(),
        storage_used_gb: record.storage_used_gb,
        storage_total_gb: record.storage_total_gb,
    }
}
