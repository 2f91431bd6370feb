// ==========================================
// 空气质量哨兵 - 决策领域模型
// ==========================================
// 生命周期: 每次评估新建,生成后不可变,不落库
// ==========================================

use crate::domain::types::{AlertStatus, Pollutant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// AqiResult - 分项指数与最大值
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiResult {
    pub by_pollutant: BTreeMap<Pollutant, u32>, // 分项指数
    pub aqi_max: u32,                           // 最大值 (无数据为 0)
    pub missing: Vec<Pollutant>,                // 缺测污染物
}

impl AqiResult {
    /// 指数最高的污染物 (并列时取枚举顺序靠前者)
    pub fn dominant_pollutant(&self) -> Option<Pollutant> {
        self.by_pollutant
            .iter()
            .filter(|(_, aqi)| **aqi == self.aqi_max)
            .map(|(p, _)| *p)
            .next()
    }
}

// ==========================================
// Decision - 评估决策
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub status: AlertStatus,                        // OK / ALERT
    pub aqi_by_pollutant: BTreeMap<Pollutant, u32>, // 分项指数
    pub aqi_max: u32,                               // 最大指数
    pub forecast: f64,                              // 3 小时预测 (两位小数)
    pub cap: u32,                                   // 预警上限
    pub missing: Vec<Pollutant>,                    // 缺测污染物
}

// ==========================================
// Trait: DecisionAssessment
// ==========================================
// 用途: 展示层与调用方读取决策的统一接口
pub trait DecisionAssessment {
    /// 是否预警
    fn is_alert(&self) -> bool;

    /// 距上限的余量 (负数表示超出)
    fn headroom(&self) -> f64;

    /// 是否完全没有数据 (默认健康)
    fn is_no_data(&self) -> bool;

    /// 指数最高的污染物
    fn dominant_pollutant(&self) -> Option<Pollutant>;
}

impl DecisionAssessment for Decision {
    fn is_alert(&self) -> bool {
        self.status == AlertStatus::Alert
    }

    fn headroom(&self) -> f64 {
        self.cap as f64 - self.forecast
    }

    /// # 规则
    /// - 四种污染物全部缺测
    fn is_no_data(&self) -> bool {
        self.missing.len() == Pollutant::ALL.len()
    }

    fn dominant_pollutant(&self) -> Option<Pollutant> {
        if self.is_no_data() {
            return None;
        }
        self.aqi_by_pollutant
            .iter()
            .filter(|(_, aqi)| **aqi == self.aqi_max)
            .map(|(p, _)| *p)
            .find(|p| !self.missing.contains(p))
    }
}
