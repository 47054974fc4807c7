//! 事件查询与统计能力
//!
//! 对事件数组的纯函数集合：
//! - filter：多条件合取过滤、时间窗查询
//! - stats：分组计数、Top-N 活跃排名
//! - patterns：重复故障/重复拒绝/非工作时段/高峰时段检测
//! - export：CSV / JSON 导出
//! - correlate：PACS/VMS 事件时间窗关联
//!
//! 所有函数无状态、无流式处理、无增量索引——每次调用都是对输入
//! 数组的一次完整遍历。检测阈值全部收口在 AnalyticsConfig。

pub mod correlate;
pub mod export;
pub mod filter;
pub mod patterns;
pub mod stats;

pub use correlate::{Correlation, CorrelationOptions, correlate_events};
pub use export::{export_csv, export_json};
pub use filter::{EventFilter, RecentUnit, filter_events, recent_events};
pub use patterns::{EventPatterns, event_patterns};
pub use stats::{
    ActivityEntry, CountEntry, EventStatistics, event_statistics, top_cardholders_by_activity,
    top_doors_by_activity,
};

/// 统计与模式检测配置。
///
/// 阈值不硬编码在函数体里，全部收口为命名配置项。
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// 同门重复故障判定阈值。
    pub repeated_fault_threshold: usize,
    /// 同人重复拒绝判定阈值。
    pub repeated_denial_threshold: usize,
    /// 问题门判定阈值（故障+告警合计）。
    pub problem_door_threshold: usize,
    /// 非工作时段起点（小时，含）。
    pub off_hours_start: u32,
    /// 非工作时段终点（小时，不含）。
    pub off_hours_end: u32,
    /// 高峰时段排名数量。
    pub peak_hours_limit: usize,
    /// 问题门/问题持卡人排名数量。
    pub problem_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            repeated_fault_threshold: 3,
            repeated_denial_threshold: 3,
            problem_door_threshold: 5,
            off_hours_start: 19,
            off_hours_end: 7,
            peak_hours_limit: 3,
            problem_limit: 5,
        }
    }
}

/// 活跃排名的默认数量。
pub const DEFAULT_ACTIVITY_LIMIT: usize = 5;

/// 分组统计的 Top-N 数量。
pub const STATS_TOP_LIMIT: usize = 10;
