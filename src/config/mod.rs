// ==========================================
// 空气质量哨兵 - 配置层
// ==========================================
// 职责: 系统配置管理,环境变量覆写默认值
// ==========================================

pub mod config_manager;
pub mod config_reader_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, defaults, ConfigManager, SentryConfig};
pub use config_reader_trait::SentryConfigReader;
