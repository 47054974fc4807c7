//! 映射函数的降级与查表行为测试。

use domain::{CardholderStatus, DoorStatus};
use pacs_mapper::{format_ts, map_cardholder, map_controller, map_door};
use pacs_storage::{AccessGroupRecord, CardholderRecord, ControllerRecord, DoorRecord};

const BASE: &str = "http://localhost:8080";

fn cardholder_missing_optionals() -> CardholderRecord {
    CardholderRecord {
        cardholder_id: "CH-0001".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Anderson".to_string(),
        email: None,
        phone: None,
        department: None,
        job_title: None,
        card_number: None,
        status: CardholderStatus::Suspended,
        access_groups: vec!["All Staff".to_string(), "Ghost Group".to_string()],
        created_ms: 1_754_000_000_000,
        modified_ms: 0,
    }
}

fn group(id: &str, name: &str) -> AccessGroupRecord {
    AccessGroupRecord {
        group_id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        member_count: 0,
        door_ids: Vec::new(),
        schedule: "24/7".to_string(),
        members: Vec::new(),
    }
}

#[test]
fn missing_optionals_degrade_to_empty_strings() {
    let dto = map_cardholder(
        &cardholder_missing_optionals(),
        &[group("AG-01", "All Staff")],
        BASE,
    );
    assert_eq!(dto.phone, "");
    assert_eq!(dto.email, "");
    assert_eq!(dto.card_number, "");
    assert_eq!(dto.modified, "");
    assert!(!dto.authorised);
    // 已知组名解析出 href，未知组名保留名称、href 为空
    assert_eq!(
        dto.access_groups[0].href,
        "http://localhost:8080/api/access_groups/AG-01"
    );
    assert_eq!(dto.access_groups[1].name, "Ghost Group");
    assert_eq!(dto.access_groups[1].href, "");
}

#[test]
fn door_mode_and_alarm_follow_status_lookup() {
    let door = DoorRecord {
        door_id: "DOOR-005".to_string(),
        name: "East Stairwell".to_string(),
        location: "Building A, Floor 2".to_string(),
        controller_id: "CTRL-01".to_string(),
        reader_id: "RDR-005".to_string(),
        status: DoorStatus::Fault,
        schedule: "24/7".to_string(),
        last_event_ms: 1_754_000_000_000,
        event_count_24h: 12,
    };
    let dto = map_door(&door, &[], BASE);
    assert_eq!(dto.mode.value, "degraded");
    assert_eq!(dto.alarm.value, "active");
    assert_eq!(dto.status_flags, vec!["fault", "attention"]);
    // 控制器名未解析到时降级为空串而不是报错
    assert_eq!(dto.controller.name, "");
    assert_eq!(
        dto.controller.href,
        "http://localhost:8080/api/controllers/CTRL-01"
    );
}

#[test]
fn controller_firmware_defaults_when_fixture_omits_it() {
    let controller = ControllerRecord {
        controller_id: "CTRL-03".to_string(),
        name: "Controller Building C".to_string(),
        location: "Building C".to_string(),
        ip_address: "10.0.1.12".to_string(),
        status: "online".to_string(),
        firmware_version: None,
        last_comm_ms: 1_754_000_000_000,
        door_ids: Vec::new(),
    };
    let dto = map_controller(&controller, &[], BASE);
    assert_eq!(dto.firmware_version, "v8.60.200");
}

#[test]
fn timestamps_format_as_rfc3339_utc() {
    assert_eq!(format_ts(0), "");
    assert_eq!(format_ts(-5), "");
    let formatted = format_ts(1_754_400_000_000);
    assert!(formatted.starts_with("2025-08-05T"), "got {formatted}");
    assert!(formatted.ends_with('Z'));
}
