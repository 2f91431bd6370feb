// ==========================================
// 空气质量哨兵 - 配置读取 Trait
// ==========================================
// 职责: 定义哨兵所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::domain::types::AbsentPolicy;
use std::time::Duration;

// ==========================================
// SentryConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从环境变量或键值表读取）
// 约定: 读取失败或格式错误时返回默认值
pub trait SentryConfigReader: Send + Sync {
    // ===== 预警配置 =====

    /// 获取预警上限
    ///
    /// # 默认值
    /// - 50
    fn get_aqi_cap(&self) -> u32;

    /// 获取缺测处理策略
    ///
    /// # 返回
    /// - AbsentPolicy::TreatAsZero: 缺测视为 0
    /// - AbsentPolicy::Exclude: 缺测不参与取最大值
    ///
    /// # 默认值
    /// - zero
    fn get_absent_policy(&self) -> AbsentPolicy;

    // ===== 展示配置 =====

    /// 获取摘要语言
    ///
    /// # 默认值
    /// - en
    fn get_locale(&self) -> String;

    // ===== 数据源配置 =====

    /// 获取定位服务地址
    ///
    /// # 默认值
    /// - https://ipapi.co/json/
    fn get_geo_url(&self) -> String;

    /// 获取空气质量数据服务地址
    ///
    /// # 默认值
    /// - https://air-quality-api.open-meteo.com/v1/air-quality
    fn get_air_quality_url(&self) -> String;

    /// 获取 HTTP 请求超时
    ///
    /// # 默认值
    /// - 10 秒
    fn get_http_timeout(&self) -> Duration;
}
