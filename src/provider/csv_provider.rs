// ==========================================
// 空气质量哨兵 - CSV 文件数据源 (离线)
// ==========================================
// 格式: 表头 time,pm25,pm10,o3,no2 (污染物列可缺省,顺序任意)
// 空单元格视为缺测
// ==========================================

use crate::domain::location::Location;
use crate::domain::reading::{Observation, PollutantSeries};
use crate::domain::types::Pollutant;
use crate::provider::error::{ProviderError, ProviderResult};
use crate::provider::http::parse_timestamp;
use crate::provider::provider_trait::PollutantDataProvider;
use async_trait::async_trait;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::PathBuf;

const TIME_COLUMN: &str = "time";

// ==========================================
// CsvSeriesProvider - 离线文件数据源
// ==========================================
// 位置参数被忽略: 文件本身即为某一站点的序列
pub struct CsvSeriesProvider {
    path: PathBuf,
}

impl CsvSeriesProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PollutantDataProvider for CsvSeriesProvider {
    async fn fetch(&self, location: Location) -> ProviderResult<Vec<PollutantSeries>> {
        tracing::debug!(path = %self.path.display(), location = %location, "读取离线序列文件");
        let bytes = tokio::fs::read(&self.path).await?;
        let series = parse_csv(bytes.as_slice())?;
        tracing::info!(path = %self.path.display(), columns = series.len(), "离线序列读取完成");
        Ok(series)
    }
}

/// 解析 CSV 序列
///
/// # 规则
/// - 必须有 time 列
/// - 其余列名按污染物别名识别,无法识别则报错
/// - 完全空白的行跳过
/// - 输出按时间升序
pub fn parse_csv<R: Read>(reader: R) -> ProviderResult<Vec<PollutantSeries>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // 允许行长度不一致
        .trim(csv::Trim::All)
        .from_reader(reader);

    // 读取表头
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let time_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(TIME_COLUMN))
        .ok_or_else(|| ProviderError::Payload("CSV 缺少 time 列".to_string()))?;

    let mut columns: Vec<(usize, Pollutant)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx == time_idx {
            continue;
        }
        let pollutant = header
            .parse::<Pollutant>()
            .map_err(|_| ProviderError::UnknownPollutant(header.clone()))?;
        columns.push((idx, pollutant));
    }

    let mut series: Vec<PollutantSeries> = columns
        .iter()
        .map(|(_, p)| PollutantSeries::new(*p, Vec::new()))
        .collect();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // 数据行号从 1 开始,表头为第 0 行
        let row = row_idx + 1;

        // 跳过完全空白的行
        if record.iter().all(|v| v.trim().is_empty()) {
            continue;
        }

        let raw_time = record.get(time_idx).unwrap_or("");
        let time = parse_timestamp(raw_time).ok_or_else(|| ProviderError::TimeFormat {
            row,
            value: raw_time.to_string(),
        })?;

        for (slot, (idx, pollutant)) in columns.iter().enumerate() {
            let raw = record.get(*idx).unwrap_or("").trim();
            let value = if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
                None
            } else {
                Some(raw.parse::<f64>().map_err(|_| ProviderError::ValueFormat {
                    row,
                    field: pollutant.to_string(),
                    value: raw.to_string(),
                })?)
            };
            series[slot].points.push(Observation { time, value });
        }
    }

    for s in series.iter_mut() {
        s.points.sort_by_key(|p| p.time);
    }

    Ok(series)
}
