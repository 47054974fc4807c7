//! 应用运行配置加载。
//!
//! 所有配置项都有默认值：不设置任何环境变量也能直接启动沙箱。
//! 延迟模拟与统计阈值必须可配置（测试关闭延迟、演示调阈值）。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP 监听地址。
    pub http_addr: String,
    /// href 合成用的对外基地址。
    pub api_base_url: String,
    /// 是否模拟网络延迟（测试关闭）。
    pub latency_enabled: bool,
    /// 模拟延迟下界（毫秒）。
    pub latency_min_ms: u64,
    /// 模拟延迟上界（毫秒）。
    pub latency_max_ms: u64,
    /// 固定数据规模：持卡人数。
    pub fixture_cardholders: usize,
    /// 固定数据规模：事件数。
    pub fixture_events: usize,
    /// 固定数据规模：事件覆盖的天数。
    pub fixture_days: i64,
    /// 同门重复故障判定阈值。
    pub repeated_fault_threshold: usize,
    /// 同人重复拒绝判定阈值。
    pub repeated_denial_threshold: usize,
    /// 问题门判定阈值（故障+告警合计）。
    pub problem_door_threshold: usize,
    /// PACS/VMS 事件关联时间窗（秒）。
    pub correlation_window_seconds: i64,
    /// 非工作时段起点（小时，含）。
    pub off_hours_start: u32,
    /// 非工作时段终点（小时，不含）。
    pub off_hours_end: u32,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("PACS_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let api_base_url = env::var("PACS_API_BASE_URL")
            .unwrap_or_else(|_| format!("http://{http_addr}"))
            .trim_end_matches('/')
            .to_string();
        let latency_enabled = read_bool_with_default("PACS_LATENCY", true);
        let latency_min_ms = read_u64_with_default("PACS_LATENCY_MIN_MS", 300)?;
        let latency_max_ms = read_u64_with_default("PACS_LATENCY_MAX_MS", 500)?;
        if latency_max_ms < latency_min_ms {
            return Err(ConfigError::Invalid(
                "PACS_LATENCY_MAX_MS".to_string(),
                latency_max_ms.to_string(),
            ));
        }
        let fixture_cardholders = read_usize_with_default("PACS_FIXTURE_CARDHOLDERS", 48)?;
        let fixture_events = read_usize_with_default("PACS_FIXTURE_EVENTS", 600)?;
        let fixture_days = read_i64_with_default("PACS_FIXTURE_DAYS", 7)?;
        let repeated_fault_threshold = read_usize_with_default("PACS_FAULT_THRESHOLD", 3)?;
        let repeated_denial_threshold = read_usize_with_default("PACS_DENIAL_THRESHOLD", 3)?;
        let problem_door_threshold = read_usize_with_default("PACS_PROBLEM_DOOR_THRESHOLD", 5)?;
        let correlation_window_seconds =
            read_i64_with_default("PACS_CORRELATION_WINDOW_SECONDS", 30)?;
        let off_hours_start = read_u32_with_default("PACS_OFF_HOURS_START", 19)?;
        let off_hours_end = read_u32_with_default("PACS_OFF_HOURS_END", 7)?;

        Ok(Self {
            http_addr,
            api_base_url,
            latency_enabled,
            latency_min_ms,
            latency_max_ms,
            fixture_cardholders,
            fixture_events,
            fixture_days,
            repeated_fault_threshold,
            repeated_denial_threshold,
            problem_door_threshold,
            correlation_window_seconds,
            off_hours_start,
            off_hours_end,
        })
    }
}

impl Default for AppConfig {
    /// 无环境变量时的缺省配置（与 from_env 的默认值一致）。
    fn default() -> Self {
        Self {
            http_addr: "127.0.0.1:8080".to_string(),
            api_base_url: "http://127.0.0.1:8080".to_string(),
            latency_enabled: true,
            latency_min_ms: 300,
            latency_max_ms: 500,
            fixture_cardholders: 48,
            fixture_events: 600,
            fixture_days: 7,
            repeated_fault_threshold: 3,
            repeated_denial_threshold: 3,
            problem_door_threshold: 5,
            correlation_window_seconds: 30,
            off_hours_start: 19,
            off_hours_end: 7,
        }
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_usize_with_default(key: &str, default: usize) -> Result<usize, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<usize>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_i64_with_default(key: &str, default: i64) -> Result<i64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<i64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_u32_with_default(key: &str, default: u32) -> Result<u32, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
