// ==========================================
// 空气质量哨兵 - 决策引擎
// ==========================================
// 职责: 分项换算 → 取最大值 → 预测 → 与上限比较
// 输入: 读数集 + 上限
// 输出: Decision
// 红线: 无状态,每次评估相互独立
// ==========================================

use crate::domain::decision::Decision;
use crate::domain::reading::ReadingSet;
use crate::domain::types::{AbsentPolicy, AlertStatus};
use crate::engine::aqi_converter::AqiConverter;
use crate::engine::error::EngineResult;

/// 预测系数: 3 小时内上浮 10%
pub const FORECAST_MULTIPLIER: f64 = 1.1;

// ==========================================
// DecisionEngine - 决策引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    converter: AqiConverter,
    absent_policy: AbsentPolicy,
}

impl DecisionEngine {
    /// 构造函数
    ///
    /// # 参数
    /// - `converter`: AQI 换算引擎
    /// - `absent_policy`: 缺测处理策略
    pub fn new(converter: AqiConverter, absent_policy: AbsentPolicy) -> Self {
        Self {
            converter,
            absent_policy,
        }
    }

    pub fn converter(&self) -> &AqiConverter {
        &self.converter
    }

    pub fn absent_policy(&self) -> AbsentPolicy {
        self.absent_policy
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估一组读数
    ///
    /// # 步骤
    /// 1. 按缺测策略逐项换算
    /// 2. aqi_max = 分项最大值 (无数据为 0)
    /// 3. forecast = round(aqi_max * 1.1, 2)
    /// 4. forecast > cap 则 ALERT,否则 OK
    ///
    /// # 返回
    /// - Err(InvalidReading): 存在负数或非有限读数
    pub fn evaluate(&self, readings: &ReadingSet, cap: u32) -> EngineResult<Decision> {
        let result = self.converter.convert_all(readings, self.absent_policy)?;

        if readings.is_all_absent() {
            tracing::warn!(cap, "全部污染物缺测,按默认健康处理 (aqi_max=0)");
        } else if !result.missing.is_empty() {
            tracing::debug!(missing = ?result.missing, policy = %self.absent_policy, "部分污染物缺测");
        }

        let forecast = project_forecast(result.aqi_max);
        let status = classify(forecast, cap);

        tracing::debug!(
            aqi_max = result.aqi_max,
            forecast,
            cap,
            status = %status,
            "评估完成"
        );

        Ok(Decision {
            status,
            aqi_by_pollutant: result.by_pollutant,
            aqi_max: result.aqi_max,
            forecast,
            cap,
            missing: result.missing,
        })
    }
}

/// 3 小时预测: aqi_max * 1.1,保留两位小数
pub fn project_forecast(aqi_max: u32) -> f64 {
    round_to_cents(aqi_max as f64 * FORECAST_MULTIPLIER)
}

/// 与上限比较 (严格大于才预警)
pub fn classify(forecast: f64, cap: u32) -> AlertStatus {
    if forecast > cap as f64 {
        AlertStatus::Alert
    } else {
        AlertStatus::Ok
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
