// ==========================================
// SentryApi 集成测试
// ==========================================
// 测试目标: 验证 定位 → 拉取 → 评估 → 报告 的编排
// 覆盖范围: 正常链路 / 指定位置 / 数据源错误传播 / 报告结构
// ==========================================

mod test_helpers;

use aqi_sentry::api::{ApiError, SentryApi};
use aqi_sentry::config::SentryConfig;
use aqi_sentry::domain::{AbsentPolicy, AlertStatus, Location, Pollutant};
use aqi_sentry::provider::{FixedLocationProvider, ProviderError, StaticSeriesProvider};
use std::sync::Arc;
use test_helpers::{
    hourly_series, test_location, CountingLocationProvider, FailingDataProvider,
    FailingLocationProvider,
};

fn config(cap: u32) -> SentryConfig {
    SentryConfig {
        cap,
        ..SentryConfig::default()
    }
}

fn smoggy_provider() -> Arc<StaticSeriesProvider> {
    Arc::new(StaticSeriesProvider::new(vec![
        hourly_series(Pollutant::Pm25, &[Some(35.0), Some(200.0), None]),
        hourly_series(Pollutant::Pm10, &[Some(60.0), None, None]),
        hourly_series(Pollutant::O3, &[None, None, None]),
    ]))
}

#[tokio::test]
async fn test_check_full_chain_alert() {
    let api = SentryApi::from_config(
        &config(50),
        Arc::new(FixedLocationProvider::new(test_location())),
        smoggy_provider(),
    )
    .expect("初始化失败");

    let report = api.check(None).await.expect("检查失败");

    // 最近有效读数: PM2.5 200 → 250
    assert_eq!(report.by_pollutant[&Pollutant::Pm25], 250);
    assert_eq!(report.aqi_max, 250);
    assert_eq!(report.forecast, 275.0);
    assert_eq!(report.status, AlertStatus::Alert);
    assert_eq!(report.icon, "⚠️");
    assert_eq!(report.missing, vec![Pollutant::O3, Pollutant::No2]);
    assert_eq!(report.location, Some(test_location()));
    assert_eq!(
        report.summary,
        "Forecast exceeds safe cap, consider wearing a mask."
    );
}

#[tokio::test]
async fn test_check_with_given_location_skips_detection() {
    let counter = Arc::new(CountingLocationProvider::default());
    let api = SentryApi::from_config(&config(500), counter.clone(), smoggy_provider()).unwrap();

    let given = Location::new(-33.87, 151.21);
    let report = api.check(Some(given)).await.unwrap();

    assert_eq!(counter.calls(), 0);
    assert_eq!(report.location, Some(given));
    assert_eq!(report.status, AlertStatus::Ok);

    api.check(None).await.unwrap();
    assert_eq!(counter.calls(), 1);
}

#[tokio::test]
async fn test_location_failure_propagates() {
    let api = SentryApi::from_config(
        &config(50),
        Arc::new(FailingLocationProvider),
        smoggy_provider(),
    )
    .unwrap();

    let err = api.check(None).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Provider(ProviderError::Status { status: 503, .. })
    ));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_data_failure_propagates() {
    let api = SentryApi::from_config(
        &config(50),
        Arc::new(FixedLocationProvider::new(test_location())),
        Arc::new(FailingDataProvider),
    )
    .unwrap();

    let err = api.check(None).await.unwrap_err();
    assert!(matches!(err, ApiError::Provider(ProviderError::Payload(_))));
}

#[tokio::test]
async fn test_no_data_report() {
    let config = SentryConfig {
        cap: 0,
        absent_policy: AbsentPolicy::Exclude,
        locale: "zh-CN".to_string(),
        ..SentryConfig::default()
    };
    let api = SentryApi::from_config(
        &config,
        Arc::new(FixedLocationProvider::new(test_location())),
        Arc::new(StaticSeriesProvider::default()),
    )
    .unwrap();

    let report = api.check(None).await.unwrap();
    assert_eq!(report.aqi_max, 0);
    assert_eq!(report.status, AlertStatus::Ok);
    assert!(report.by_pollutant.is_empty());
    assert_eq!(report.missing, Pollutant::ALL.to_vec());
    assert_eq!(report.summary, "暂无污染物数据，按安全范围处理。");
}

#[tokio::test]
async fn test_report_json_shape() {
    let api = SentryApi::from_config(
        &config(50),
        Arc::new(FixedLocationProvider::new(test_location())),
        smoggy_provider(),
    )
    .unwrap();

    let report = api.check(None).await.unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

    assert_eq!(value["status"], "ALERT");
    assert_eq!(value["aqi_max"], 250);
    assert_eq!(value["cap"], 50);
    assert_eq!(value["location"]["latitude"], 6.45);
    assert!(value["report_id"].as_str().is_some());
    assert!(value["generated_at"].as_str().is_some());
}
