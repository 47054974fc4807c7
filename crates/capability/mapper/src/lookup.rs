//! 状态查表
//!
//! 门状态 → mode/alarm/状态标志 的固定映射，
//! 以及固定数据缺失时合成的默认固件版本。

use api_contract::StateValue;
use domain::DoorStatus;

/// 固件版本缺失时合成的默认值。
pub const DEFAULT_FIRMWARE: &str = "v8.60.200";

/// 门状态派生出的线上表示。
#[derive(Debug, Clone, Copy)]
pub struct DoorState {
    pub mode_value: &'static str,
    pub alarm_value: &'static str,
    pub flags: &'static [&'static str],
}

impl DoorState {
    pub fn mode(&self) -> StateValue {
        StateValue {
            value: self.mode_value.to_string(),
        }
    }

    pub fn alarm(&self) -> StateValue {
        StateValue {
            value: self.alarm_value.to_string(),
        }
    }
}

/// 门状态查表。
pub fn door_state(status: DoorStatus) -> DoorState {
    match status {
        DoorStatus::Online => DoorState {
            mode_value: "normal",
            alarm_value: "none",
            flags: &[],
        },
        DoorStatus::Offline => DoorState {
            mode_value: "isolated",
            alarm_value: "communications",
            flags: &["offline"],
        },
        DoorStatus::Fault => DoorState {
            mode_value: "degraded",
            alarm_value: "active",
            flags: &["fault", "attention"],
        },
    }
}
