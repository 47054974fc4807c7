//! 固定数据生成能力
//!
//! 从姓名/部门/位置池确定性生成整套演示数据：
//! - 相同 (config, now_ms) 输入产出逐字节一致的数据集
//! - 不使用随机数，按素数步长在池中循环取值
//! - 事件流刻意包含可检测的模式（同门重复故障、同人重复拒绝、
//!   非工作时段活动），保证统计与模式输出非平凡
//!
//! 生成顺序：门/控制器 → 访问组 → 持卡人 → 事件 → 门字段回填 → VMS。

pub mod pools;

use chrono::Duration;
use domain::{CardholderStatus, DoorStatus, EventCategory, SecurityEvent};
use pacs_storage::{
    AccessGroupRecord, BookmarkRecord, CameraRecord, CardholderRecord, ControllerRecord,
    DoorRecord, IoPointRecord, OperatorGroupRecord, RecordingServerRecord, VmsEventRecord,
};

use pools::*;

/// 生成规模配置。
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub cardholders: usize,
    pub events: usize,
    pub days: i64,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            cardholders: 48,
            events: 600,
            days: 7,
        }
    }
}

/// 整套固定数据。
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub cardholders: Vec<CardholderRecord>,
    pub doors: Vec<DoorRecord>,
    pub controllers: Vec<ControllerRecord>,
    pub access_groups: Vec<AccessGroupRecord>,
    pub inputs: Vec<IoPointRecord>,
    pub outputs: Vec<IoPointRecord>,
    pub operator_groups: Vec<OperatorGroupRecord>,
    pub events: Vec<SecurityEvent>,
    pub cameras: Vec<CameraRecord>,
    pub bookmarks: Vec<BookmarkRecord>,
    pub vms_events: Vec<VmsEventRecord>,
    pub recording_servers: Vec<RecordingServerRecord>,
}

/// 生成整套数据集。
pub fn generate(config: &FixtureConfig, now_ms: i64) -> FixtureSet {
    let controllers = generate_controllers(now_ms);
    let doors = generate_doors(&controllers);
    let access_groups = generate_access_groups(&doors);
    let cardholders = generate_cardholders(config, &access_groups, now_ms);
    let mut access_groups = backfill_members(access_groups, &cardholders);
    let events = generate_events(config, &doors, &cardholders, now_ms);
    let doors = backfill_door_activity(doors, &events, now_ms);
    let controllers = attach_door_ids(controllers, &doors);
    let (inputs, outputs) = generate_io_points(&doors);
    let operator_groups = generate_operator_groups();
    let recording_servers = generate_recording_servers();
    let cameras = generate_cameras(&doors, &recording_servers);
    let bookmarks = generate_bookmarks(&cameras, now_ms);
    let vms_events = generate_vms_events(&events, &cameras, &doors, now_ms);
    // member_count 与成员列表保持一致（仅在生成时；运行期可被 PATCH 打破）
    for group in &mut access_groups {
        group.member_count = group.members.len();
    }

    FixtureSet {
        cardholders,
        doors,
        controllers,
        access_groups,
        inputs,
        outputs,
        operator_groups,
        events,
        cameras,
        bookmarks,
        vms_events,
        recording_servers,
    }
}

fn generate_controllers(now_ms: i64) -> Vec<ControllerRecord> {
    (0..CONTROLLER_COUNT)
        .map(|i| ControllerRecord {
            controller_id: format!("CTRL-{:02}", i + 1),
            name: format!("Controller {}", BUILDINGS[i % BUILDINGS.len()]),
            location: BUILDINGS[i % BUILDINGS.len()].to_string(),
            ip_address: format!("10.0.1.{}", 10 + i),
            status: if i == 3 { "offline" } else { "online" }.to_string(),
            // CTRL-03 固件字段缺失，驱动 mapper 的默认值合成路径
            firmware_version: if i == 2 {
                None
            } else {
                Some("v8.60.231".to_string())
            },
            last_comm_ms: now_ms - (i as i64 + 1) * 45_000,
            door_ids: Vec::new(),
        })
        .collect()
}

fn generate_doors(controllers: &[ControllerRecord]) -> Vec<DoorRecord> {
    (0..DOOR_COUNT)
        .map(|i| {
            let controller = &controllers[i / 3 % controllers.len()];
            let status = match i {
                6 => DoorStatus::Offline,
                4 => DoorStatus::Fault,
                _ => DoorStatus::Online,
            };
            DoorRecord {
                door_id: format!("DOOR-{:03}", i + 1),
                name: DOOR_NAMES[i % DOOR_NAMES.len()].to_string(),
                location: format!("{}, Floor {}", BUILDINGS[i % BUILDINGS.len()], i % 3 + 1),
                controller_id: controller.controller_id.clone(),
                reader_id: format!("RDR-{:03}", i + 1),
                status,
                schedule: if i % 4 == 0 { "24/7" } else { "Business Hours" }.to_string(),
                last_event_ms: 0,
                event_count_24h: 0,
            }
        })
        .collect()
}

fn generate_access_groups(doors: &[DoorRecord]) -> Vec<AccessGroupRecord> {
    ACCESS_GROUP_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, description, schedule))| {
            // 每组覆盖不同的门子集：步长错开，首组覆盖全部
            let door_ids: Vec<String> = if i == 0 {
                doors.iter().map(|door| door.door_id.clone()).collect()
            } else {
                doors
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| (j + i) % (i + 1) == 0)
                    .map(|(_, door)| door.door_id.clone())
                    .collect()
            };
            AccessGroupRecord {
                group_id: format!("AG-{:02}", i + 1),
                name: (*name).to_string(),
                description: (*description).to_string(),
                member_count: 0,
                door_ids,
                schedule: (*schedule).to_string(),
                members: Vec::new(),
            }
        })
        .collect()
}

fn generate_cardholders(
    config: &FixtureConfig,
    access_groups: &[AccessGroupRecord],
    now_ms: i64,
) -> Vec<CardholderRecord> {
    (0..config.cardholders)
        .map(|i| {
            let first_name = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last_name = LAST_NAMES[(i * 7 + 3) % LAST_NAMES.len()];
            let department = DEPARTMENTS[i % DEPARTMENTS.len()];
            let status = if i % 17 == 13 {
                CardholderStatus::Suspended
            } else if i % 11 == 7 {
                CardholderStatus::Inactive
            } else {
                CardholderStatus::Active
            };
            let mut groups = vec![access_groups[0].name.clone()];
            groups.push(access_groups[1 + i % (access_groups.len() - 1)].name.clone());
            if i % 9 == 4 {
                groups.push(access_groups[access_groups.len() - 1].name.clone());
            }
            groups.dedup();
            let created_ms = now_ms - Duration::days(30 + i as i64).num_milliseconds();
            CardholderRecord {
                cardholder_id: format!("CH-{:04}", i + 1),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: Some(format!(
                    "{}.{}@sandbox.local",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                )),
                phone: if i % 13 == 11 {
                    // 部分记录缺失电话，驱动 mapper 的空串降级路径
                    None
                } else {
                    Some(format!("555-{:04}", 100 + i))
                },
                department: Some(department.to_string()),
                job_title: Some(JOB_TITLES[(i * 5 + 1) % JOB_TITLES.len()].to_string()),
                card_number: Some(format!("{}", 10_001 + i)),
                status,
                access_groups: groups,
                created_ms,
                modified_ms: created_ms,
            }
        })
        .collect()
}

fn backfill_members(
    mut access_groups: Vec<AccessGroupRecord>,
    cardholders: &[CardholderRecord],
) -> Vec<AccessGroupRecord> {
    for group in &mut access_groups {
        group.members = cardholders
            .iter()
            .filter(|ch| ch.access_groups.iter().any(|name| *name == group.name))
            .map(|ch| ch.cardholder_id.clone())
            .collect();
    }
    access_groups
}

fn generate_events(
    config: &FixtureConfig,
    doors: &[DoorRecord],
    cardholders: &[CardholderRecord],
    now_ms: i64,
) -> Vec<SecurityEvent> {
    let span_ms = Duration::days(config.days).num_milliseconds().max(1);
    let count = config.events.max(1);
    (0..count)
        .map(|i| {
            // 时间从旧到新铺满整个窗口，素数扰动打散整点
            let ts_ms =
                now_ms - span_ms + (span_ms * i as i64 / count as i64) - (i as i64 * 7919) % 1_800_000;
            let slot = i % 20;
            let (event_type, category, result) = match slot {
                12..=14 => ("Access Denied", EventCategory::Access, "denied"),
                15 => ("Door Forced Open", EventCategory::Alarm, "alarm"),
                16 => ("Door Held Open", EventCategory::Alarm, "alarm"),
                17 | 18 => ("Door Fault", EventCategory::Fault, "fault"),
                19 => ("Controller Heartbeat Lost", EventCategory::System, "system"),
                _ => ("Access Granted", EventCategory::Access, "granted"),
            };
            // 故障集中在 DOOR-005、拒绝集中在一个持卡人，保证模式检测有料
            let door = match slot {
                17 => &doors[4],
                15 | 16 | 18 => &doors[(i * 7) % doors.len()],
                _ => &doors[i % doors.len()],
            };
            let cardholder = match category {
                EventCategory::Access => {
                    if slot == 12 {
                        Some(&cardholders[3 % cardholders.len()])
                    } else {
                        Some(&cardholders[(i * 5) % cardholders.len()])
                    }
                }
                _ => None,
            };
            let details = match category {
                EventCategory::Access if result == "granted" => {
                    format!("Card presented at {}", door.name)
                }
                EventCategory::Access => format!("Access denied at {} - not authorized", door.name),
                EventCategory::Alarm => format!("{} alarm raised at {}", event_type, door.name),
                EventCategory::Fault => format!("Reader fault reported at {}", door.name),
                EventCategory::System => format!("Controller {} missed heartbeat", door.controller_id),
            };
            SecurityEvent {
                event_id: format!("EVT-{:06}", i + 1),
                ts_ms,
                event_type: event_type.to_string(),
                category,
                door_id: door.door_id.clone(),
                door_name: door.name.clone(),
                cardholder_id: cardholder.map(|ch| ch.cardholder_id.clone()),
                cardholder_name: cardholder.map(|ch| format!("{} {}", ch.first_name, ch.last_name)),
                card_number: cardholder.and_then(|ch| ch.card_number.clone()),
                access_group: cardholder.and_then(|ch| ch.access_groups.first().cloned()),
                result: result.to_string(),
                details,
            }
        })
        .collect()
}

fn backfill_door_activity(
    mut doors: Vec<DoorRecord>,
    events: &[SecurityEvent],
    now_ms: i64,
) -> Vec<DoorRecord> {
    let day_ago = now_ms - Duration::days(1).num_milliseconds();
    for door in &mut doors {
        let mut last = 0;
        let mut count = 0;
        for event in events.iter().filter(|event| event.door_id == door.door_id) {
            last = last.max(event.ts_ms);
            if event.ts_ms >= day_ago {
                count += 1;
            }
        }
        door.last_event_ms = last;
        door.event_count_24h = count;
    }
    doors
}

fn attach_door_ids(
    mut controllers: Vec<ControllerRecord>,
    doors: &[DoorRecord],
) -> Vec<ControllerRecord> {
    for controller in &mut controllers {
        controller.door_ids = doors
            .iter()
            .filter(|door| door.controller_id == controller.controller_id)
            .map(|door| door.door_id.clone())
            .collect();
    }
    controllers
}

fn generate_io_points(doors: &[DoorRecord]) -> (Vec<IoPointRecord>, Vec<IoPointRecord>) {
    let inputs = (0..INPUT_COUNT)
        .map(|i| {
            let door = &doors[i % doors.len()];
            IoPointRecord {
                point_id: format!("IN-{:03}", i + 1),
                name: format!("{} {}", door.name, INPUT_TYPES[i % INPUT_TYPES.len()]),
                point_type: INPUT_TYPES[i % INPUT_TYPES.len()].to_string(),
                location: door.location.clone(),
                door_id: Some(door.door_id.clone()),
                controller_id: Some(door.controller_id.clone()),
                state: if i % 7 == 5 { "active" } else { "normal" }.to_string(),
            }
        })
        .collect();
    let outputs = (0..OUTPUT_COUNT)
        .map(|i| {
            let door = &doors[i % doors.len()];
            IoPointRecord {
                point_id: format!("OUT-{:03}", i + 1),
                name: format!("{} {}", door.name, OUTPUT_TYPES[i % OUTPUT_TYPES.len()]),
                point_type: OUTPUT_TYPES[i % OUTPUT_TYPES.len()].to_string(),
                location: door.location.clone(),
                door_id: Some(door.door_id.clone()),
                controller_id: Some(door.controller_id.clone()),
                state: if i % 5 == 2 { "open" } else { "closed" }.to_string(),
            }
        })
        .collect();
    (inputs, outputs)
}

fn generate_operator_groups() -> Vec<OperatorGroupRecord> {
    OPERATOR_GROUPS
        .iter()
        .enumerate()
        .map(|(i, (name, description, privileges))| OperatorGroupRecord {
            group_id: format!("OG-{:02}", i + 1),
            name: (*name).to_string(),
            description: (*description).to_string(),
            privileges: privileges.iter().map(|p| (*p).to_string()).collect(),
        })
        .collect()
}

fn generate_recording_servers() -> Vec<RecordingServerRecord> {
    vec![
        RecordingServerRecord {
            server_id: "REC-01".to_string(),
            name: "Primary Recorder".to_string(),
            hostname: "vms-rec-01.sandbox.local".to_string(),
            status: "online".to_string(),
            storage_used_gb: 412.6,
            storage_total_gb: 2048.0,
        },
        RecordingServerRecord {
            server_id: "REC-02".to_string(),
            name: "Failover Recorder".to_string(),
            hostname: "vms-rec-02.sandbox.local".to_string(),
            status: "online".to_string(),
            storage_used_gb: 96.1,
            storage_total_gb: 2048.0,
        },
    ]
}

fn generate_cameras(
    doors: &[DoorRecord],
    recording_servers: &[RecordingServerRecord],
) -> Vec<CameraRecord> {
    // 摄像机命名跟随门名，保证 PACS/VMS 关联的位置匹配有交集
    (0..CAMERA_COUNT)
        .map(|i| {
            let door = &doors[i % doors.len()];
            let server = &recording_servers[i % recording_servers.len()];
            CameraRecord {
                camera_id: format!("CAM-{:02}", i + 1),
                name: format!("{} Camera", door.name),
                enabled: i != 5,
                channel: i as u32 + 1,
                recording_server_id: server.server_id.clone(),
                recording_server_name: server.name.clone(),
                ptz_enabled: i % 3 == 0,
                status: if i == 5 { "offline" } else { "online" }.to_string(),
            }
        })
        .collect()
}

fn generate_bookmarks(cameras: &[CameraRecord], now_ms: i64) -> Vec<BookmarkRecord> {
    (0..BOOKMARK_COUNT)
        .map(|i| {
            let camera = &cameras[i % cameras.len()];
            let begin = now_ms - Duration::hours(3 * (i as i64 + 1)).num_milliseconds();
            BookmarkRecord {
                bookmark_id: format!("BMK-{:03}", i + 1),
                time_begin_ms: begin,
                time_end_ms: begin + 90_000,
                camera_id: camera.camera_id.clone(),
                camera_name: camera.name.clone(),
                header: BOOKMARK_HEADERS[i % BOOKMARK_HEADERS.len()].to_string(),
                description: format!("Operator bookmark on {}", camera.name),
            }
        })
        .collect()
}

fn generate_vms_events(
    events: &[SecurityEvent],
    cameras: &[CameraRecord],
    doors: &[DoorRecord],
    now_ms: i64,
) -> Vec<VmsEventRecord> {
    (0..VMS_EVENT_COUNT)
        .map(|i| {
            // 前半锚定在 PACS 事件 10 秒后（落在默认 30 秒关联窗口内），
            // 后半独立铺开，作为无关联的背景噪声
            let (ts_ms, camera) = if i % 2 == 0 && !events.is_empty() {
                let anchor = &events[(i / 2 * events.len() / (VMS_EVENT_COUNT / 2).max(1))
                    .min(events.len() - 1)];
                let door_index = doors
                    .iter()
                    .position(|door| door.door_id == anchor.door_id)
                    .unwrap_or(0);
                (anchor.ts_ms + 10_000, &cameras[door_index % cameras.len()])
            } else {
                (
                    now_ms - Duration::hours(2 * i as i64 + 1).num_milliseconds(),
                    &cameras[(i * 3) % cameras.len()],
                )
            };
            VmsEventRecord {
                event_id: format!("VEVT-{:04}", i + 1),
                ts_ms,
                message: VMS_MESSAGES[i % VMS_MESSAGES.len()].to_string(),
                source: camera.name.clone(),
                camera_id: camera.camera_id.clone(),
            }
        })
        .collect()
}
