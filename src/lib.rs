// ==========================================
// 空气质量哨兵 - 核心库
// ==========================================
// 职责: 污染物浓度 → AQI → 3 小时预测 → 与上限比较
// 系统定位: 预警决策 (外部 I/O 仅为薄胶水层)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 分段表 / 换算 / 决策
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据源层 - 定位 / 污染物数据
pub mod provider;

// API 层 - 编排与报告
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AbsentPolicy, AlertStatus, AqiResult, Breakpoint, Decision, DecisionAssessment, Location,
    Observation, Pollutant, PollutantSeries, Reading, ReadingSet,
};

// 引擎
pub use engine::{AqiConverter, BreakpointTable, DecisionEngine, EngineError};

// 配置
pub use config::{ConfigManager, SentryConfig, SentryConfigReader};

// API
pub use api::{ApiError, SentryApi, SentryReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "空气质量哨兵";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
