// ==========================================
// 空气质量哨兵 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、快照
// 存储: 键值表 (默认取自进程环境变量)
// ==========================================

use crate::config::config_reader_trait::SentryConfigReader;
use crate::domain::types::AbsentPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 从进程环境变量创建 (仅收集 AQI_ 前缀的键)
    pub fn from_env() -> Self {
        let values = std::env::vars()
            .filter(|(k, _)| k.starts_with(config_keys::PREFIX))
            .collect();
        Self { values }
    }

    /// 从已有键值表创建
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// 读取配置值（空白值视为未配置）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// 解析配置值，格式错误时回退默认值并记录告警
    fn parse_or_default<T: std::str::FromStr>(&self, key: &str, default: T) -> T {
        match self.get_config_value(key) {
            None => default,
            Some(raw) => match raw.parse::<T>() {
                Ok(v) => v,
                Err(_) => {
                    tracing::warn!(
                        config_key = key,
                        raw_value = %raw,
                        "配置值格式错误，使用默认值"
                    );
                    default
                }
            },
        }
    }

    /// 解析出完整的生效配置
    pub fn load(&self) -> SentryConfig {
        SentryConfig {
            cap: self.get_aqi_cap(),
            absent_policy: self.get_absent_policy(),
            locale: self.get_locale(),
            geo_url: self.get_geo_url(),
            air_quality_url: self.get_air_quality_url(),
            http_timeout_secs: self.get_http_timeout().as_secs(),
        }
    }

    /// 获取生效配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 启动时记录日志
    /// - 报告排障
    pub fn get_config_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.load())
    }
}

// ==========================================
// SentryConfigReader Trait 实现
// ==========================================
impl SentryConfigReader for ConfigManager {
    // ===== 预警配置 =====

    fn get_aqi_cap(&self) -> u32 {
        self.parse_or_default(config_keys::AQI_CAP, defaults::AQI_CAP)
    }

    fn get_absent_policy(&self) -> AbsentPolicy {
        self.parse_or_default(config_keys::ABSENT_POLICY, AbsentPolicy::default())
    }

    // ===== 展示配置 =====

    fn get_locale(&self) -> String {
        let value = self.get_config_or_default(config_keys::LOCALE, defaults::LOCALE);
        match value.to_lowercase().as_str() {
            "en" => "en".to_string(),
            "zh-cn" | "zh_cn" | "zh" => "zh-CN".to_string(),
            _ => {
                tracing::warn!(
                    config_key = config_keys::LOCALE,
                    raw_value = %value,
                    "不支持的语言，使用默认值"
                );
                defaults::LOCALE.to_string()
            }
        }
    }

    // ===== 数据源配置 =====

    fn get_geo_url(&self) -> String {
        self.get_config_or_default(config_keys::GEO_URL, defaults::GEO_URL)
    }

    fn get_air_quality_url(&self) -> String {
        self.get_config_or_default(config_keys::AIR_QUALITY_URL, defaults::AIR_QUALITY_URL)
    }

    fn get_http_timeout(&self) -> Duration {
        let secs = self.parse_or_default(config_keys::HTTP_TIMEOUT_SECS, defaults::HTTP_TIMEOUT_SECS);
        Duration::from_secs(secs.max(1))
    }
}

// ==========================================
// SentryConfig - 生效配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentryConfig {
    pub cap: u32,                     // 预警上限
    pub absent_policy: AbsentPolicy,  // 缺测处理策略
    pub locale: String,               // 摘要语言
    pub geo_url: String,              // 定位服务地址
    pub air_quality_url: String,      // 空气质量数据服务地址
    pub http_timeout_secs: u64,       // HTTP 超时 (秒)
}

impl Default for SentryConfig {
    fn default() -> Self {
        ConfigManager::default().load()
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const PREFIX: &str = "AQI_";

    // 预警
    pub const AQI_CAP: &str = "AQI_CAP";
    pub const ABSENT_POLICY: &str = "AQI_ABSENT_POLICY";

    // 展示
    pub const LOCALE: &str = "AQI_LOCALE";

    // 数据源
    pub const GEO_URL: &str = "AQI_GEO_URL";
    pub const AIR_QUALITY_URL: &str = "AQI_AIR_QUALITY_URL";
    pub const HTTP_TIMEOUT_SECS: &str = "AQI_HTTP_TIMEOUT_SECS";

    // 日志 (启动前读取,不进入生效配置)
    pub const LOG_FORMAT: &str = "AQI_LOG_FORMAT";
}

// ==========================================
// 默认值
// ==========================================
pub mod defaults {
    pub const AQI_CAP: u32 = 50;
    pub const LOCALE: &str = "en";
    pub const GEO_URL: &str = "https://ipapi.co/json/";
    pub const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
    pub const HTTP_TIMEOUT_SECS: u64 = 10;
}
