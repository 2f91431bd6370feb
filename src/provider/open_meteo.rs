// ==========================================
// 空气质量哨兵 - Open-Meteo 空气质量数据源
// ==========================================
// 接口: GET {base}?latitude=..&longitude=..&hourly=pm2_5,pm10,ozone,nitrogen_dioxide
// 响应: { hourly: { time: [...], pm2_5: [...], pm10: [...], ozone: [...], nitrogen_dioxide: [...] } }
// 单位: µg/m³,缺测为 null
// ==========================================

use crate::domain::location::Location;
use crate::domain::reading::{Observation, PollutantSeries};
use crate::domain::types::Pollutant;
use crate::provider::error::{ProviderError, ProviderResult};
use crate::provider::http::{build_client, parse_timestamp, read_body};
use crate::provider::provider_trait::PollutantDataProvider;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// 逐小时变量名 → 污染物
pub const HOURLY_VARIABLES: [(&str, Pollutant); 4] = [
    ("pm2_5", Pollutant::Pm25),
    ("pm10", Pollutant::Pm10),
    ("ozone", Pollutant::O3),
    ("nitrogen_dioxide", Pollutant::No2),
];

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    #[serde(flatten)]
    variables: HashMap<String, Vec<Option<f64>>>,
}

// ==========================================
// OpenMeteoProvider - HTTP 数据源
// ==========================================
pub struct OpenMeteoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoProvider {
    /// 创建数据源
    ///
    /// # 参数
    /// - `base_url`: 空气质量服务地址
    /// - `timeout`: 请求超时
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ProviderResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// 复用已有客户端 (连接池共享)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn hourly_param() -> String {
        HOURLY_VARIABLES
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[async_trait]
impl PollutantDataProvider for OpenMeteoProvider {
    async fn fetch(&self, location: Location) -> ProviderResult<Vec<PollutantSeries>> {
        tracing::debug!(url = %self.base_url, location = %location, "请求逐小时空气质量数据");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", Self::hourly_param()),
            ])
            .send()
            .await?;

        let body = read_body(response).await?;
        let series = parse_hourly(&body)?;

        tracing::info!(
            location = %location,
            hours = series.first().map(|s| s.points.len()).unwrap_or(0),
            "空气质量数据拉取完成"
        );
        Ok(series)
    }
}

/// 解析逐小时响应
///
/// # 规则
/// - 每个变量数组长度必须与 time 一致
/// - 缺少的变量视为整段缺测
/// - 未识别的变量忽略
pub fn parse_hourly(body: &str) -> ProviderResult<Vec<PollutantSeries>> {
    let response: AirQualityResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Payload(format!("空气质量响应格式错误: {}", e)))?;
    let hourly = response.hourly;

    let times = hourly
        .time
        .iter()
        .enumerate()
        .map(|(row, raw)| {
            parse_timestamp(raw).ok_or_else(|| ProviderError::TimeFormat {
                row,
                value: raw.clone(),
            })
        })
        .collect::<ProviderResult<Vec<_>>>()?;

    let mut series = Vec::with_capacity(HOURLY_VARIABLES.len());
    for (name, pollutant) in HOURLY_VARIABLES {
        let values = match hourly.variables.get(name) {
            Some(values) => values,
            None => {
                tracing::warn!(variable = name, "响应缺少变量,按整段缺测处理");
                series.push(PollutantSeries::new(pollutant, Vec::new()));
                continue;
            }
        };

        if values.len() != times.len() {
            return Err(ProviderError::Payload(format!(
                "变量 {} 长度 {} 与时间轴长度 {} 不一致",
                name,
                values.len(),
                times.len()
            )));
        }

        let points = times
            .iter()
            .zip(values.iter())
            .map(|(time, value)| Observation {
                time: *time,
                value: *value,
            })
            .collect();
        series.push(PollutantSeries::new(pollutant, points));
    }

    Ok(series)
}
