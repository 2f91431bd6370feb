// ==========================================
// 空气质量哨兵 - 命令行主入口
// ==========================================
// 用法:
//   aqi-sentry [LAT LON] [--csv PATH] [--cap N]
//
// 未给出经纬度时调用 IP 定位;给出 --csv 时读取离线序列文件
// 报告以 JSON 输出到 stdout,日志输出到 stderr
// ==========================================

use aqi_sentry::config::{config_keys, ConfigManager, SentryConfigReader};
use aqi_sentry::provider::{
    CsvSeriesProvider, FixedLocationProvider, IpApiLocationProvider, LocationProvider,
    OpenMeteoProvider, PollutantDataProvider,
};
use aqi_sentry::{logging, Location, SentryApi};
use anyhow::{bail, Context};
use std::path::PathBuf;
use std::sync::Arc;

/// 命令行参数
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    location: Option<Location>,
    csv: Option<PathBuf>,
    cap: Option<u32>,
}

impl CliArgs {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Self> {
        let mut parsed = CliArgs::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--csv" => {
                    let path = args.next().context("--csv 需要文件路径")?;
                    parsed.csv = Some(PathBuf::from(path));
                }
                "--cap" => {
                    let raw = args.next().context("--cap 需要整数")?;
                    parsed.cap = Some(raw.parse().with_context(|| format!("无效的上限: {}", raw))?);
                }
                _ => positional.push(arg),
            }
        }

        match positional.as_slice() {
            [] => {}
            [lat, lon] => {
                let latitude: f64 = lat.parse().with_context(|| format!("无效的纬度: {}", lat))?;
                let longitude: f64 = lon.parse().with_context(|| format!("无效的经度: {}", lon))?;
                parsed.location = Some(Location::new(latitude, longitude));
            }
            other => bail!("经纬度需要成对给出,实际参数: {:?}", other),
        }

        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // 日志格式需在配置加载前确定
    match std::env::var(config_keys::LOG_FORMAT).as_deref() {
        Ok("json") => logging::init_json(),
        _ => logging::init(),
    }

    tracing::info!("==================================================");
    tracing::info!("{} - AQI 预警", aqi_sentry::APP_NAME);
    tracing::info!("系统版本: {}", aqi_sentry::VERSION);
    tracing::info!("==================================================");

    let args = CliArgs::parse(std::env::args().skip(1))?;

    // 加载配置
    let manager = ConfigManager::from_env();
    let mut config = manager.load();
    if let Some(cap) = args.cap {
        config.cap = cap;
    }
    tracing::info!(config = %manager.get_config_snapshot()?, cap = config.cap, "配置加载完成");

    let timeout = manager.get_http_timeout();

    // 装配数据源
    let data_provider: Arc<dyn PollutantDataProvider> = match &args.csv {
        Some(path) => Arc::new(CsvSeriesProvider::new(path.clone())),
        None => Arc::new(OpenMeteoProvider::new(config.air_quality_url.clone(), timeout)?),
    };

    let location_provider: Arc<dyn LocationProvider> = match (&args.csv, args.location) {
        // 离线模式且未指定位置: 不做网络定位
        (Some(_), None) => {
            tracing::info!("离线模式,未指定位置,使用 (0, 0)");
            Arc::new(FixedLocationProvider::new(Location::new(0.0, 0.0)))
        }
        _ => Arc::new(IpApiLocationProvider::new(config.geo_url.clone(), timeout)?),
    };

    // 分段表不合法时在此终止
    let api = SentryApi::from_config(&config, location_provider, data_provider)
        .context("初始化失败")?;

    let report = api.check(args.location).await?;
    println!("{}", report.to_json_pretty()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_location_and_flags() {
        let args = parse(&["51.5", "-0.12", "--cap", "80", "--csv", "data.csv"]).unwrap();
        assert_eq!(args.location, Some(Location::new(51.5, -0.12)));
        assert_eq!(args.cap, Some(80));
        assert_eq!(args.csv, Some(PathBuf::from("data.csv")));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["51.5"]).is_err());
        assert!(parse(&["north", "0"]).is_err());
        assert!(parse(&["--cap", "-1"]).is_err());
        assert!(parse(&["--csv"]).is_err());
    }
}
