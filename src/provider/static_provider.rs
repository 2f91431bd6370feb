// ==========================================
// 空气质量哨兵 - 固定数据源
// ==========================================
// 用途: 调用方已知位置/读数,或测试场景
// ==========================================

use crate::domain::location::Location;
use crate::domain::reading::PollutantSeries;
use crate::provider::error::ProviderResult;
use crate::provider::provider_trait::{LocationProvider, PollutantDataProvider};
use async_trait::async_trait;

/// 固定位置
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    location: Location,
}

impl FixedLocationProvider {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn detect(&self) -> ProviderResult<Location> {
        Ok(self.location)
    }
}

/// 固定序列 (忽略位置)
#[derive(Debug, Clone, Default)]
pub struct StaticSeriesProvider {
    series: Vec<PollutantSeries>,
}

impl StaticSeriesProvider {
    pub fn new(series: Vec<PollutantSeries>) -> Self {
        Self { series }
    }
}

#[async_trait]
impl PollutantDataProvider for StaticSeriesProvider {
    async fn fetch(&self, location: Location) -> ProviderResult<Vec<PollutantSeries>> {
        tracing::debug!(location = %location, series = self.series.len(), "返回固定序列");
        Ok(self.series.clone())
    }
}
