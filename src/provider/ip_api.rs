// ==========================================
// 空气质量哨兵 - IP 定位数据源
// ==========================================
// 接口: GET https://ipapi.co/json/ → { latitude, longitude, ... }
// ==========================================

use crate::domain::location::Location;
use crate::provider::error::{ProviderError, ProviderResult};
use crate::provider::http::{build_client, read_body};
use crate::provider::provider_trait::LocationProvider;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

// ==========================================
// IpApiLocationProvider - 基于 IP 的定位
// ==========================================
pub struct IpApiLocationProvider {
    client: reqwest::Client,
    url: String,
}

impl IpApiLocationProvider {
    /// 创建定位数据源
    ///
    /// # 参数
    /// - `url`: 定位服务地址
    /// - `timeout`: 请求超时
    pub fn new(url: impl Into<String>, timeout: Duration) -> ProviderResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.into(),
        })
    }

    /// 复用已有客户端 (连接池共享)
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl LocationProvider for IpApiLocationProvider {
    async fn detect(&self) -> ProviderResult<Location> {
        tracing::debug!(url = %self.url, "请求 IP 定位");
        let response = self.client.get(&self.url).send().await?;
        let body = read_body(response).await?;
        let location = parse_ip_api(&body)?;
        tracing::info!(location = %location, "IP 定位完成");
        Ok(location)
    }
}

/// 解析定位响应
///
/// # 规则
/// - latitude/longitude 可为数字或数字字符串
/// - `error: true` 视为服务端拒绝 (如限流),携带 reason
pub fn parse_ip_api(body: &str) -> ProviderResult<Location> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::Payload(format!("定位响应不是合法 JSON: {}", e)))?;

    if value.get("error").and_then(Value::as_bool) == Some(true) {
        let reason = value
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        return Err(ProviderError::Payload(format!("定位服务拒绝请求: {}", reason)));
    }

    let latitude = coerce_f64(value.get("latitude"))
        .ok_or_else(|| ProviderError::Payload("定位响应缺少 latitude".to_string()))?;
    let longitude = coerce_f64(value.get("longitude"))
        .ok_or_else(|| ProviderError::Payload("定位响应缺少 longitude".to_string()))?;

    let location = Location::new(latitude, longitude);
    if !location.is_valid() {
        return Err(ProviderError::Payload(format!("定位结果超出范围: {}", location)));
    }
    Ok(location)
}

fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
