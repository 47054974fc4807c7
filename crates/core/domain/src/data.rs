use serde::{Deserialize, Serialize};

use crate::EventCategory;

/// 安全事件记录。
///
/// 事件流在数据集生成时一次性产生，运行期只追加读取、从不回收。
/// 时间戳统一使用 epoch 毫秒。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub event_id: String,
    pub ts_ms: i64,
    pub event_type: String,
    pub category: EventCategory,
    pub door_id: String,
    pub door_name: String,
    pub cardholder_id: Option<String>,
    pub cardholder_name: Option<String>,
    pub card_number: Option<String>,
    pub access_group: Option<String>,
    pub result: String,
    pub details: String,
}

impl SecurityEvent {
    /// 事件是否归属指定持卡人。
    pub fn involves_cardholder(&self, cardholder_id: &str) -> bool {
        self.cardholder_id.as_deref() == Some(cardholder_id)
    }
}
