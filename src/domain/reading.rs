// ==========================================
// 空气质量哨兵 - 观测读数领域模型
// ==========================================
// 职责: 描述单个读数、逐小时序列、按污染物汇总的读数集
// 红线: 缺测 (Absent) 与读数 0 必须可区分
// ==========================================

use crate::domain::types::Pollutant;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Reading - 单个读数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reading {
    /// 有效读数
    Present {
        value: f64,
        observed_at: Option<NaiveDateTime>,
    },
    /// 该时段无数据
    Absent,
}

impl Reading {
    /// 无观测时间的有效读数
    pub fn present(value: f64) -> Self {
        Reading::Present {
            value,
            observed_at: None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Present { value, .. } => Some(*value),
            Reading::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Reading::Present { .. })
    }
}

impl From<Option<f64>> for Reading {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Reading::present(v),
            None => Reading::Absent,
        }
    }
}

// ==========================================
// Observation - 逐小时观测点
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub time: NaiveDateTime,  // 观测时间
    pub value: Option<f64>,   // 浓度 (None = 缺测)
}

// ==========================================
// PollutantSeries - 单污染物时间序列
// ==========================================
// 按时间升序排列,由数据源提供
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantSeries {
    pub pollutant: Pollutant,
    pub points: Vec<Observation>,
}

impl PollutantSeries {
    pub fn new(pollutant: Pollutant, points: Vec<Observation>) -> Self {
        Self { pollutant, points }
    }

    /// 取最近一个有效读数
    ///
    /// 从序列末尾向前查找第一个非空值;整段缺测时返回 Absent
    pub fn latest_reading(&self) -> Reading {
        self.points
            .iter()
            .rev()
            .find_map(|p| {
                p.value.map(|value| Reading::Present {
                    value,
                    observed_at: Some(p.time),
                })
            })
            .unwrap_or(Reading::Absent)
    }

    /// 有效读数个数
    pub fn present_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }
}

// ==========================================
// ReadingSet - 按污染物汇总的读数集
// ==========================================
// 未出现的污染物视为 Absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingSet {
    readings: BTreeMap<Pollutant, Reading>,
}

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式写入读数
    pub fn with(mut self, pollutant: Pollutant, reading: Reading) -> Self {
        self.insert(pollutant, reading);
        self
    }

    pub fn insert(&mut self, pollutant: Pollutant, reading: Reading) {
        self.readings.insert(pollutant, reading);
    }

    /// 读取某污染物的读数 (未写入时为 Absent)
    pub fn get(&self, pollutant: Pollutant) -> Reading {
        self.readings
            .get(&pollutant)
            .copied()
            .unwrap_or(Reading::Absent)
    }

    /// 全部污染物是否均缺测
    pub fn is_all_absent(&self) -> bool {
        Pollutant::ALL.iter().all(|p| !self.get(*p).is_present())
    }

    /// 从时间序列中为每种污染物选出最近有效读数
    ///
    /// 同一污染物出现多条序列时,后出现的序列覆盖先出现的
    pub fn from_series(series: &[PollutantSeries]) -> Self {
        let mut set = Self::new();
        for s in series {
            set.insert(s.pollutant, s.latest_reading());
        }
        set
    }
}

impl FromIterator<(Pollutant, Reading)> for ReadingSet {
    fn from_iter<T: IntoIterator<Item = (Pollutant, Reading)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (pollutant, reading) in iter {
            set.insert(pollutant, reading);
        }
        set
    }
}
