// ==========================================
// 空气质量哨兵 - 报告渲染 (展示层)
// ==========================================
// 职责: Decision → 对外 JSON 报告 + 一句话摘要
// ==========================================

use crate::domain::decision::{Decision, DecisionAssessment};
use crate::domain::location::Location;
use crate::domain::types::{AlertStatus, Pollutant};
use crate::i18n::t_locale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ==========================================
// SentryReport - 哨兵报告
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentryReport {
    pub report_id: String,                     // 报告ID
    pub status: AlertStatus,                   // OK / ALERT
    pub icon: String,                          // 🌿 / ⚠️
    pub aqi_max: u32,                          // 最大指数
    pub by_pollutant: BTreeMap<Pollutant, u32>, // 分项指数
    pub forecast: f64,                         // 3 小时预测
    pub cap: u32,                              // 预警上限
    pub missing: Vec<Pollutant>,               // 缺测污染物
    pub location: Option<Location>,            // 评估位置
    pub generated_at: DateTime<Utc>,           // 生成时间
    pub summary: String,                       // 一句话摘要
}

impl SentryReport {
    /// 渲染报告
    ///
    /// # 参数
    /// - `decision`: 评估决策
    /// - `location`: 评估位置 (离线评估可为空)
    /// - `locale`: 摘要语言
    pub fn render(decision: &Decision, location: Option<Location>, locale: &str) -> Self {
        Self {
            report_id: Uuid::new_v4().to_string(),
            status: decision.status,
            icon: decision.status.icon().to_string(),
            aqi_max: decision.aqi_max,
            by_pollutant: decision.aqi_by_pollutant.clone(),
            forecast: decision.forecast,
            cap: decision.cap,
            missing: decision.missing.clone(),
            location,
            generated_at: Utc::now(),
            summary: summarize(decision, locale),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 一句话摘要
///
/// # 规则
/// - ALERT: 超限提示
/// - OK 且完全无数据: 显式说明按安全处理
/// - OK: 安全提示
pub fn summarize(decision: &Decision, locale: &str) -> String {
    let key = match decision.status {
        AlertStatus::Alert => "report.summary_alert",
        AlertStatus::Ok if decision.is_no_data() => "report.summary_no_data",
        AlertStatus::Ok => "report.summary_ok",
    };
    t_locale(key, locale)
}
