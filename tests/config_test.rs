// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置读取、默认值回退、快照
// ==========================================

use aqi_sentry::config::{config_keys, defaults, ConfigManager, SentryConfig, SentryConfigReader};
use aqi_sentry::domain::AbsentPolicy;
use std::collections::HashMap;
use std::time::Duration;

fn manager(pairs: &[(&str, &str)]) -> ConfigManager {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ConfigManager::from_map(values)
}

#[test]
fn test_defaults() {
    let config = ConfigManager::default().load();
    assert_eq!(config.cap, defaults::AQI_CAP);
    assert_eq!(config.absent_policy, AbsentPolicy::TreatAsZero);
    assert_eq!(config.locale, "en");
    assert_eq!(config.geo_url, defaults::GEO_URL);
    assert_eq!(config.air_quality_url, defaults::AIR_QUALITY_URL);
    assert_eq!(config.http_timeout_secs, defaults::HTTP_TIMEOUT_SECS);
    assert_eq!(config, SentryConfig::default());
}

#[test]
fn test_overrides() {
    let m = manager(&[
        (config_keys::AQI_CAP, "100"),
        (config_keys::ABSENT_POLICY, "exclude"),
        (config_keys::LOCALE, "zh"),
        (config_keys::AIR_QUALITY_URL, "http://localhost:8080/aq"),
        (config_keys::HTTP_TIMEOUT_SECS, "3"),
    ]);

    assert_eq!(m.get_aqi_cap(), 100);
    assert_eq!(m.get_absent_policy(), AbsentPolicy::Exclude);
    assert_eq!(m.get_locale(), "zh-CN");
    assert_eq!(m.get_air_quality_url(), "http://localhost:8080/aq");
    assert_eq!(m.get_http_timeout(), Duration::from_secs(3));
}

#[test]
fn test_bad_values_fall_back() {
    let m = manager(&[
        (config_keys::AQI_CAP, "fifty"),
        (config_keys::ABSENT_POLICY, "guess"),
        (config_keys::LOCALE, "fr"),
        (config_keys::GEO_URL, "   "),
        (config_keys::HTTP_TIMEOUT_SECS, "0"),
    ]);

    assert_eq!(m.get_aqi_cap(), defaults::AQI_CAP);
    assert_eq!(m.get_absent_policy(), AbsentPolicy::TreatAsZero);
    assert_eq!(m.get_locale(), "en");
    assert_eq!(m.get_geo_url(), defaults::GEO_URL);
    assert_eq!(m.get_http_timeout(), Duration::from_secs(1));
}

#[test]
fn test_snapshot_is_json() {
    let snapshot = manager(&[(config_keys::AQI_CAP, "75")])
        .get_config_snapshot()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(value["cap"], 75);
    assert_eq!(value["absent_policy"], "treat_as_zero");
}
