//! PACS/VMS 事件关联。

use domain::SecurityEvent;
use pacs_storage::VmsEventRecord;
use serde::Serialize;

/// 关联选项。
#[derive(Debug, Clone)]
pub struct CorrelationOptions {
    /// 关联时间窗（毫秒，± 双侧）。
    pub window_ms: i64,
    /// 是否要求位置/摄像机名子串匹配。
    pub match_location: bool,
}

impl Default for CorrelationOptions {
    fn default() -> Self {
        Self {
            window_ms: 30_000,
            match_location: false,
        }
    }
}

/// 单条关联结果：一个 PACS 事件及其时间窗内命中的 VMS 事件。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Correlation {
    pub pacs_event: SecurityEvent,
    pub matches: Vec<VmsEventRecord>,
}

/// 摄像机来源名与门名/位置的宽松子串匹配。
/// 比较前去掉习惯性的 " Camera" 后缀并统一小写。
fn location_overlaps(event: &SecurityEvent, vms: &VmsEventRecord) -> bool {
    let source = vms
        .source
        .to_lowercase()
        .trim_end_matches(" camera")
        .to_string();
    if source.is_empty() {
        return false;
    }
    let door_name = event.door_name.to_lowercase();
    door_name.contains(&source) || source.contains(&door_name)
}

/// 对每个 PACS 事件查找时间窗内的 VMS 事件；
/// 仅当 ≥1 命中时产出一条关联记录。
pub fn correlate_events(
    pacs_events: &[SecurityEvent],
    vms_events: &[VmsEventRecord],
    options: &CorrelationOptions,
) -> Vec<Correlation> {
    pacs_events
        .iter()
        .filter_map(|event| {
            let matches: Vec<VmsEventRecord> = vms_events
                .iter()
                .filter(|vms| (vms.ts_ms - event.ts_ms).abs() <= options.window_ms)
                .filter(|vms| !options.match_location || location_overlaps(event, vms))
                .cloned()
                .collect();
            if matches.is_empty() {
                None
            } else {
                Some(Correlation {
                    pacs_event: event.clone(),
                    matches,
                })
            }
        })
        .collect()
}
