// ==========================================
// 空气质量哨兵 - HTTP 公共工具
// ==========================================

use crate::provider::error::{ProviderError, ProviderResult};
use chrono::NaiveDateTime;
use std::time::Duration;

/// 创建带超时的 HTTP 客户端
pub fn build_client(timeout: Duration) -> ProviderResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("aqi-sentry/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// 读取响应体,非 2xx 状态码转换为 Status 错误
pub async fn read_body(response: reqwest::Response) -> ProviderResult<String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.text().await?)
}

/// 解析逐小时时间戳
///
/// 支持: 2026-03-01T08:00 / 2026-03-01T08:00:00 / 2026-03-01 08:00
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
    ];
    let raw = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2026-03-01T08:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-03-01T08:00:00"), Some(expected));
        assert_eq!(parse_timestamp(" 2026-03-01 08:00 "), Some(expected));
        assert_eq!(parse_timestamp("2026-03-01 08:00:00").map(|t| t.hour()), Some(8));
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
