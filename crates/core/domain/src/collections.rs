//! Overlay 集合键常量
//!
//! 键名与训练前端的浏览器存储布局保持一致，便于对照调试。
//! 只有会被运行期修改的集合才进入 Overlay；
//! 其余实体始终直接读取固定数据。

pub const CARDHOLDERS: &str = "pacs-cardholders";
pub const DOORS: &str = "pacs-doors";
pub const ACCESS_GROUPS: &str = "pacs-access-groups";
pub const EVENTS: &str = "pacs-events";
pub const CAMERAS: &str = "pacs-cameras";

/// 全部 Overlay 集合键（按种子顺序）。
pub const ALL: [&str; 5] = [CARDHOLDERS, DOORS, ACCESS_GROUPS, EVENTS, CAMERAS];
