// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的序列构造、读数构造、模拟数据源
// ==========================================
#![allow(dead_code)]

use aqi_sentry::domain::{Location, Observation, Pollutant, PollutantSeries, Reading, ReadingSet};
use aqi_sentry::provider::{
    LocationProvider, PollutantDataProvider, ProviderError, ProviderResult,
};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 序列起点时间
pub fn series_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// 构造逐小时序列
///
/// # 参数
/// - `pollutant`: 污染物
/// - `values`: 每小时读数,None 为缺测
pub fn hourly_series(pollutant: Pollutant, values: &[Option<f64>]) -> PollutantSeries {
    let start = series_start();
    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| Observation {
            time: start + Duration::hours(i as i64),
            value: *v,
        })
        .collect();
    PollutantSeries::new(pollutant, points)
}

/// 构造读数集合 (未列出的污染物为缺测)
pub fn readings(pairs: &[(Pollutant, f64)]) -> ReadingSet {
    pairs
        .iter()
        .map(|(p, v)| (*p, Reading::present(*v)))
        .collect()
}

/// 测试位置 (拉各斯)
pub fn test_location() -> Location {
    Location::new(6.45, 3.39)
}

// ==========================================
// 模拟数据源
// ==========================================

/// 始终失败的定位服务
pub struct FailingLocationProvider;

#[async_trait]
impl LocationProvider for FailingLocationProvider {
    async fn detect(&self) -> ProviderResult<Location> {
        Err(ProviderError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }
}

/// 始终失败的数据服务
pub struct FailingDataProvider;

#[async_trait]
impl PollutantDataProvider for FailingDataProvider {
    async fn fetch(&self, _location: Location) -> ProviderResult<Vec<PollutantSeries>> {
        Err(ProviderError::Payload("hourly 字段缺失".to_string()))
    }
}

/// 记录调用次数的定位服务
#[derive(Default)]
pub struct CountingLocationProvider {
    pub calls: AtomicUsize,
}

impl CountingLocationProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for CountingLocationProvider {
    async fn detect(&self) -> ProviderResult<Location> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(test_location())
    }
}
