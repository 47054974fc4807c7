use pacs_config::AppConfig;

#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("PACS_HTTP_ADDR", "127.0.0.1:8081");
        std::env::set_var("PACS_LATENCY", "off");
        std::env::set_var("PACS_FAULT_THRESHOLD", "4");
        std::env::set_var("PACS_CORRELATION_WINDOW_SECONDS", "60");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert_eq!(config.api_base_url, "http://127.0.0.1:8081");
    assert!(!config.latency_enabled);
    assert_eq!(config.repeated_fault_threshold, 4);
    assert_eq!(config.correlation_window_seconds, 60);
    // 未设置的项落回默认值
    assert_eq!(config.latency_min_ms, 300);
    assert_eq!(config.fixture_days, 7);
}
