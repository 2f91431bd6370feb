// ==========================================
// 空气质量哨兵 - 数据源 Trait
// ==========================================
// 职责: 定义定位与污染物数据两类外部协作者接口（不包含实现）
// 说明: 超时、重试由实现方负责,核心引擎不感知
// ==========================================

use crate::domain::location::Location;
use crate::domain::reading::PollutantSeries;
use crate::provider::error::ProviderResult;
use async_trait::async_trait;

// ==========================================
// LocationProvider Trait
// ==========================================
// 实现者: IpApiLocationProvider, FixedLocationProvider
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// 探测当前位置
    ///
    /// # 返回
    /// - Ok(Location): 经纬度 (尽力而为,不保证精度)
    /// - Err: 网络错误、响应格式错误
    async fn detect(&self) -> ProviderResult<Location>;
}

// ==========================================
// PollutantDataProvider Trait
// ==========================================
// 实现者: OpenMeteoProvider, CsvSeriesProvider, StaticSeriesProvider
#[async_trait]
pub trait PollutantDataProvider: Send + Sync {
    /// 拉取指定位置的逐小时污染物浓度序列
    ///
    /// # 返回
    /// - Ok(Vec<PollutantSeries>): 每种污染物一条序列,按时间升序
    /// - Err: 网络错误、响应格式错误、文件错误
    async fn fetch(&self, location: Location) -> ProviderResult<Vec<PollutantSeries>>;
}
