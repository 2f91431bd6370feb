// ==========================================
// 空气质量哨兵 - 哨兵 API
// ==========================================
// 职责: 编排 定位 → 拉取数据 → 取最近读数 → 评估 → 渲染
// 红线: 编排层不做换算,换算全部交给引擎
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::report::SentryReport;
use crate::config::SentryConfig;
use crate::domain::decision::Decision;
use crate::domain::location::Location;
use crate::domain::reading::ReadingSet;
use crate::engine::{AqiConverter, DecisionEngine};
use crate::provider::{LocationProvider, PollutantDataProvider};
use std::sync::Arc;

// ==========================================
// SentryApi - 哨兵 API
// ==========================================
pub struct SentryApi {
    engine: DecisionEngine,
    location_provider: Arc<dyn LocationProvider>,
    data_provider: Arc<dyn PollutantDataProvider>,
    cap: u32,
    locale: String,
}

impl SentryApi {
    /// 构造函数
    pub fn new(
        engine: DecisionEngine,
        location_provider: Arc<dyn LocationProvider>,
        data_provider: Arc<dyn PollutantDataProvider>,
        cap: u32,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            location_provider,
            data_provider,
            cap,
            locale: locale.into(),
        }
    }

    /// 按生效配置构造 (使用标准分段表)
    ///
    /// # 返回
    /// - Err(Engine(MalformedTable)): 分段表不合法,必须终止启动
    pub fn from_config(
        config: &SentryConfig,
        location_provider: Arc<dyn LocationProvider>,
        data_provider: Arc<dyn PollutantDataProvider>,
    ) -> ApiResult<Self> {
        let engine = DecisionEngine::new(AqiConverter::epa()?, config.absent_policy);
        Ok(Self::new(
            engine,
            location_provider,
            data_provider,
            config.cap,
            config.locale.clone(),
        ))
    }

    pub fn cap(&self) -> u32 {
        self.cap
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 完整检查
    ///
    /// # 参数
    /// - `location`: 指定位置;为空时调用定位服务
    ///
    /// # 返回
    /// SentryReport
    pub async fn check(&self, location: Option<Location>) -> ApiResult<SentryReport> {
        let location = match location {
            Some(l) => l,
            None => self.location_provider.detect().await?,
        };

        if !location.is_valid() {
            return Err(ApiError::InvalidInput(format!("经纬度超出范围: {}", location)));
        }

        let series = self.data_provider.fetch(location).await?;
        let readings = ReadingSet::from_series(&series);
        let decision = self.evaluate(&readings)?;

        tracing::info!(
            location = %location,
            status = %decision.status,
            aqi_max = decision.aqi_max,
            forecast = decision.forecast,
            cap = decision.cap,
            "空气质量检查完成"
        );

        Ok(SentryReport::render(&decision, Some(location), &self.locale))
    }

    /// 以配置的上限评估读数 (不做 I/O)
    pub fn evaluate(&self, readings: &ReadingSet) -> ApiResult<Decision> {
        Ok(self.engine.evaluate(readings, self.cap)?)
    }
}
